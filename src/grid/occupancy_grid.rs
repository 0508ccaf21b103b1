use super::{grid_to_world, CellBox, GridError, GridFrame, GridIndexOutOfRange};
use crate::math::{Point, Real, Vector};

/// A dense 3D boolean array marking which cells of a regular lattice are solid.
///
/// This is the output of an external voxelizer. The grid stores `nx * ny * nz`
/// occupancy flags together with the [`GridFrame`] mapping cell indices to world
/// space. It is immutable once built.
///
/// Cells are stored lexicographically by `(x, y, z)` with `x` varying slowest, which
/// is also the order in which [`pack`](crate::packing::pack) scans them.
///
/// Deserialization goes through [`OccupancyGrid::new`], so a grid read from a file
/// has a valid pitch and exactly one flag per cell.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::grid::{GridFrame, OccupancyGrid};
/// use nalgebra::{Point3, Vector3};
///
/// // A 3x3x3 grid where only the bottom layer is solid.
/// let grid = OccupancyGrid::from_fn(Vector3::new(3, 3, 3), GridFrame::unit(), |idx| idx.z == 0)
///     .unwrap();
/// assert_eq!(grid.num_occupied(), 9);
/// assert!(grid.is_occupied(&Point3::new(2, 1, 0)));
/// assert!(!grid.is_occupied(&Point3::new(2, 1, 1)));
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "OccupancyGridData", into = "OccupancyGridData")
)]
pub struct OccupancyGrid {
    dims: Vector<u32>,
    frame: GridFrame,
    occupied: Vec<bool>,
}

#[cfg(feature = "serde-serialize")]
#[derive(Clone, Debug, Serialize, Deserialize)]
struct OccupancyGridData {
    dims: Vector<u32>,
    frame: GridFrame,
    occupied: Vec<bool>,
}

#[cfg(feature = "serde-serialize")]
impl From<OccupancyGrid> for OccupancyGridData {
    fn from(grid: OccupancyGrid) -> Self {
        Self {
            dims: grid.dims,
            frame: grid.frame,
            occupied: grid.occupied,
        }
    }
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<OccupancyGridData> for OccupancyGrid {
    type Error = GridError;

    fn try_from(data: OccupancyGridData) -> Result<Self, GridError> {
        OccupancyGrid::new(data.dims, data.frame, data.occupied)
    }
}

impl OccupancyGrid {
    /// Creates a grid from its dimensions, frame, and one occupancy flag per cell.
    ///
    /// `occupied` must list the cells in storage order: the flag of the cell `(x, y, z)`
    /// is at `(x * ny + y) * nz + z`.
    pub fn new(dims: Vector<u32>, frame: GridFrame, occupied: Vec<bool>) -> Result<Self, GridError> {
        frame.validate()?;
        let expected = Self::cell_count(&dims);

        if occupied.len() != expected {
            return Err(GridError::DataLengthMismatch {
                expected,
                found: occupied.len(),
            });
        }

        Ok(Self {
            dims,
            frame,
            occupied,
        })
    }

    /// Creates a grid with no occupied cell.
    pub fn empty(dims: Vector<u32>, frame: GridFrame) -> Result<Self, GridError> {
        Self::new(dims, frame, vec![false; Self::cell_count(&dims)])
    }

    /// Creates a grid where the cell `index` is occupied if `f(index)` returns `true`.
    ///
    /// `f` is called once per cell, in storage order.
    pub fn from_fn(
        dims: Vector<u32>,
        frame: GridFrame,
        mut f: impl FnMut(Point<u32>) -> bool,
    ) -> Result<Self, GridError> {
        let occupied = CellBox::new(Point::origin(), dims.into())
            .cells()
            .map(&mut f)
            .collect();
        Self::new(dims, frame, occupied)
    }

    /// Creates a grid where exactly the cells listed in `indices` are occupied.
    ///
    /// Duplicate indices are allowed. Fails if any index lies outside of the grid.
    pub fn from_indices(
        dims: Vector<u32>,
        frame: GridFrame,
        indices: &[Point<u32>],
    ) -> Result<Self, GridError> {
        let mut result = Self::empty(dims, frame)?;

        for index in indices {
            let id = result.try_linear_index(index)?;
            result.occupied[id] = true;
        }

        Ok(result)
    }

    fn cell_count(dims: &Vector<u32>) -> usize {
        dims.x as usize * dims.y as usize * dims.z as usize
    }

    /// The number of cells `(nx, ny, nz)` along each grid axis.
    #[inline]
    pub fn dims(&self) -> Vector<u32> {
        self.dims
    }

    /// The mapping between cell indices and world space.
    #[inline]
    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    /// The box covering every cell of this grid.
    #[inline]
    pub fn bounds(&self) -> CellBox {
        CellBox::new(Point::origin(), self.dims.into())
    }

    /// The total number of cells (occupied or not) of this grid.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.occupied.len()
    }

    /// Is `index` inside of this grid?
    #[inline]
    pub fn contains(&self, index: &Point<u32>) -> bool {
        index.x < self.dims.x && index.y < self.dims.y && index.z < self.dims.z
    }

    /// The position of the cell `index` in storage order.
    pub fn try_linear_index(&self, index: &Point<u32>) -> Result<usize, GridIndexOutOfRange> {
        if self.contains(index) {
            let (ny, nz) = (self.dims.y as usize, self.dims.z as usize);
            Ok((index.x as usize * ny + index.y as usize) * nz + index.z as usize)
        } else {
            Err(GridIndexOutOfRange::new(index, &self.dims))
        }
    }

    /// The position of the cell `index` in storage order.
    ///
    /// # Panics
    ///
    /// Panics with [`GridIndexOutOfRange`] if `index` is outside of this grid.
    #[inline]
    pub fn linear_index(&self, index: &Point<u32>) -> usize {
        match self.try_linear_index(index) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// The cell index at the position `linear_index` in storage order.
    pub fn delinearize(&self, linear_index: usize) -> Point<u32> {
        assert!(linear_index < self.num_cells());
        let (ny, nz) = (self.dims.y as usize, self.dims.z as usize);
        Point::new(
            (linear_index / (ny * nz)) as u32,
            ((linear_index / nz) % ny) as u32,
            (linear_index % nz) as u32,
        )
    }

    /// Is the cell `index` solid?
    ///
    /// # Panics
    ///
    /// Panics with [`GridIndexOutOfRange`] if `index` is outside of this grid.
    #[inline]
    pub fn is_occupied(&self, index: &Point<u32>) -> bool {
        self.occupied[self.linear_index(index)]
    }

    /// The occupancy flags of every cell, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.occupied
    }

    /// The number of solid cells.
    pub fn num_occupied(&self) -> usize {
        self.occupied.iter().filter(|o| **o).count()
    }

    /// Iterates through the indices of all the solid cells, in storage order.
    pub fn occupied_indices(&self) -> impl Iterator<Item = Point<u32>> + '_ {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(|(id, _)| self.delinearize(id))
    }

    /// The world-space centers of all the solid cells, along the world axes.
    pub fn occupied_centers(&self) -> Vec<Point<Real>> {
        self.occupied_indices()
            .map(|index| grid_to_world(&self.frame.cell_center(&index)))
            .collect()
    }
}
