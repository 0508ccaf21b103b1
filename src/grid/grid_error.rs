use crate::math::{Point, Vector};

/// A grid index lies outside of the `[0, nx) x [0, ny) x [0, nz)` domain of a grid.
///
/// Every index computed by this crate is checked against the grid bounds before being
/// used, so encountering this error from an infallible accessor means an internal
/// invariant was broken. Infallible accessors panic with this error's message instead
/// of returning it.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("grid index {index:?} is out of range for a grid with dimensions {dims:?}")]
pub struct GridIndexOutOfRange {
    /// The offending index.
    pub index: [u32; 3],
    /// The dimensions of the grid the index was checked against.
    pub dims: [u32; 3],
}

impl GridIndexOutOfRange {
    pub(crate) fn new(index: &Point<u32>, dims: &Vector<u32>) -> Self {
        Self {
            index: [index.x, index.y, index.z],
            dims: [dims.x, dims.y, dims.z],
        }
    }
}

/// Errors raised while building an [`OccupancyGrid`](super::OccupancyGrid).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The occupancy data doesn’t contain exactly one value per grid cell.
    #[error("the occupancy data contains {found} values but the grid has {expected} cells")]
    DataLengthMismatch {
        /// The number of cells of the grid (`nx * ny * nz`).
        expected: usize,
        /// The number of occupancy values provided.
        found: usize,
    },
    /// A component of the grid pitch is zero, negative, or not finite.
    #[error("the grid pitch must be strictly positive and finite along every axis")]
    InvalidPitch,
    /// An occupied cell index given at construction is outside of the grid.
    #[error(transparent)]
    IndexOutOfRange(#[from] GridIndexOutOfRange),
}
