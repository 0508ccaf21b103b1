use crate::grid::{CellBox, OccupancyGrid};
use crate::math::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CellState {
    Empty,
    Uncovered,
    Covered,
}

/// Per-cell bookkeeping of a packing run.
///
/// Starts as a copy of the occupancy grid where every solid cell is `Uncovered`,
/// then cells switch to `Covered` as placements are recorded.
pub(super) struct Coverage<'a> {
    grid: &'a OccupancyGrid,
    states: Vec<CellState>,
}

impl<'a> Coverage<'a> {
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        let states = grid
            .as_slice()
            .iter()
            .map(|occupied| {
                if *occupied {
                    CellState::Uncovered
                } else {
                    CellState::Empty
                }
            })
            .collect();
        Self { grid, states }
    }

    #[inline]
    pub fn state(&self, index: &Point<u32>) -> CellState {
        self.states[self.grid.linear_index(index)]
    }

    /// Is every cell of `cells` solid and not covered yet?
    ///
    /// `cells` must be inside of the grid.
    pub fn fits(&self, cells: &CellBox) -> bool {
        cells
            .cells()
            .all(|index| self.state(&index) == CellState::Uncovered)
    }

    /// Marks every cell of `cells` as covered.
    pub fn cover(&mut self, cells: &CellBox) {
        for index in cells.cells() {
            let id = self.grid.linear_index(&index);
            debug_assert_eq!(self.states[id], CellState::Uncovered);
            self.states[id] = CellState::Covered;
        }
    }
}
