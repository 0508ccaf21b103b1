use super::coverage::{CellState, Coverage};
use super::Placement;
use crate::catalog::BrickCatalog;
use crate::grid::{CellBox, OccupancyGrid};
use crate::math::{Point, Vector};

/// The output of [`pack`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// The bricks placed, in the order they were placed.
    pub placements: Vec<Placement>,
    /// The inventory left after packing, in the same entry order as the input inventory.
    pub residual: BrickCatalog,
}

impl PackingResult {
    /// The number of grid cells covered by some placement.
    pub fn covered_cell_count(&self) -> u64 {
        self.placements.iter().map(|p| p.brick.volume()).sum()
    }

    /// The number of placements using the brick type with dimensions `dims`.
    pub fn placements_of(&self, dims: &Vector<u32>) -> usize {
        self.placements
            .iter()
            .filter(|p| p.brick.dims() == *dims)
            .count()
    }

    /// The solid cells of `grid` that no placement covers, in storage order.
    ///
    /// These gaps are left when the inventory runs out of bricks that fit. `grid` must
    /// be the grid this result was computed from.
    pub fn uncovered_cells(&self, grid: &OccupancyGrid) -> Vec<Point<u32>> {
        let mut covered = vec![false; grid.num_cells()];

        for placement in &self.placements {
            for index in placement.cell_box().cells() {
                covered[grid.linear_index(&index)] = true;
            }
        }

        grid.occupied_indices()
            .filter(|index| !covered[grid.linear_index(index)])
            .collect()
    }

    /// Does every solid cell of `grid` belong to some placement?
    pub fn is_complete(&self, grid: &OccupancyGrid) -> bool {
        self.covered_cell_count() == grid.num_occupied() as u64
    }
}

/// Packs the solid cells of `grid` into bricks taken from `inventory`.
///
/// This is a single deterministic greedy pass without backtracking:
///
/// 1. Cells are scanned lexicographically by `(x, y, z)`, with `x` varying slowest.
/// 2. Each solid cell not covered yet is used as the minimum corner of a new brick.
///    Brick types are tried by decreasing volume (see [`BrickCatalog::packing_order`]),
///    skipping exhausted types and types that would stick out of the grid.
/// 3. The first type whose every cell is solid and uncovered is placed, and its supply
///    is decremented. If no type fits, the cell is left uncovered.
///
/// Uncovered cells aren’t an error: compare [`PackingResult::covered_cell_count`] with
/// [`OccupancyGrid::num_occupied`], or use [`PackingResult::uncovered_cells`], to detect
/// them. Keeping a `1x1x1` brick with a large supply in the inventory ensures every
/// solid cell gets covered.
///
/// `inventory` is left untouched: the remaining supply is returned as
/// [`PackingResult::residual`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::catalog::BrickCatalog;
/// use brickpack3d::grid::{GridFrame, OccupancyGrid};
/// use brickpack3d::packing::pack;
/// use nalgebra::{Point3, Vector3};
///
/// let grid = OccupancyGrid::new(Vector3::new(2, 1, 1), GridFrame::unit(), vec![true, true]).unwrap();
/// let inventory =
///     BrickCatalog::new(&[(Vector3::new(2, 1, 1), 1), (Vector3::new(1, 1, 1), 10)]).unwrap();
///
/// let result = pack(&grid, &inventory);
/// assert_eq!(result.placements.len(), 1);
/// assert_eq!(result.placements[0].origin, Point3::origin());
/// assert_eq!(result.residual.remaining(&Vector3::new(2, 1, 1)), Some(0));
/// assert_eq!(result.residual.remaining(&Vector3::new(1, 1, 1)), Some(10));
/// # }
/// ```
pub fn pack(grid: &OccupancyGrid, inventory: &BrickCatalog) -> PackingResult {
    let order = inventory.packing_order();
    let bounds = grid.bounds();
    let mut residual = inventory.clone();
    let mut coverage = Coverage::new(grid);
    let mut placements = Vec::new();
    let mut num_gaps = 0;

    for anchor in bounds.cells() {
        if coverage.state(&anchor) != CellState::Uncovered {
            continue;
        }

        let mut placed = false;

        for &entry_id in &order {
            let entry = &residual.entries()[entry_id];

            if entry.supply == 0 {
                continue;
            }

            let cells = match CellBox::from_origin_and_dims(anchor, &entry.brick.dims()) {
                Some(cells) if bounds.contains_box(&cells) => cells,
                _ => continue,
            };

            debug_assert!(!cells.is_empty(), "brick types always cover some cells");

            if coverage.fits(&cells) {
                coverage.cover(&cells);
                let brick = residual.consume(entry_id);
                log::trace!("Placed brick {:?} at {:?}.", brick.dims(), anchor);
                placements.push(Placement::new(brick, anchor));
                placed = true;
                break;
            }
        }

        if !placed {
            num_gaps += 1;
        }
    }

    let result = PackingResult {
        placements,
        residual,
    };

    log::debug!(
        "Packed {} occupied cells into {} bricks ({} cells covered).",
        grid.num_occupied(),
        result.placements.len(),
        result.covered_cell_count()
    );

    if num_gaps > 0 {
        log::debug!(
            "{} occupied cells could not be covered by any remaining brick type.",
            num_gaps
        );
    }

    result
}
