use super::{grid_to_world, GridError};
use crate::math::{Point, Real, Vector};

/// The mapping between grid indices and world-space coordinates.
///
/// Both fields are expressed along the grid axes: the cell with index `(i, j, k)`
/// has its minimum corner at `origin + (i * pitch.x, j * pitch.y, k * pitch.z)`.
/// Use [`GridFrame::to_world`] to obtain positions along the world axes consumed by
/// renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridFrame {
    /// Position of the minimum corner of the cell with index `(0, 0, 0)`.
    pub origin: Point<Real>,
    /// Size of one cell along each grid axis. May be anisotropic.
    pub pitch: Vector<Real>,
}

impl Default for GridFrame {
    fn default() -> Self {
        Self::unit()
    }
}

impl GridFrame {
    /// Creates a new frame.
    pub fn new(origin: Point<Real>, pitch: Vector<Real>) -> Self {
        Self { origin, pitch }
    }

    /// A frame with its origin at zero and unit cells.
    pub fn unit() -> Self {
        Self::new(Point::origin(), Vector::repeat(1.0))
    }

    /// A frame with cubic cells of size `pitch`.
    pub fn uniform(origin: Point<Real>, pitch: Real) -> Self {
        Self::new(origin, Vector::repeat(pitch))
    }

    /// Checks that every component of the pitch is strictly positive and finite.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.pitch.iter().all(|p| p.is_finite() && *p > 0.0) {
            Ok(())
        } else {
            Err(GridError::InvalidPitch)
        }
    }

    /// Position of the minimum corner of the cell `index`, along the grid axes.
    ///
    /// `index` may also be one past the last cell of a grid, which gives the maximum
    /// corner of the preceding cell.
    #[inline]
    pub fn cell_min_corner(&self, index: &Point<u32>) -> Point<Real> {
        self.origin + index.coords.map(|e| e as Real).component_mul(&self.pitch)
    }

    /// Position of the center of the cell `index`, along the grid axes.
    #[inline]
    pub fn cell_center(&self, index: &Point<u32>) -> Point<Real> {
        self.cell_min_corner(index) + self.pitch / 2.0
    }

    /// Position of the grid-space corner `index`, along the world axes.
    #[inline]
    pub fn to_world(&self, index: &Point<u32>) -> Point<Real> {
        grid_to_world(&self.cell_min_corner(index))
    }

    /// World-space size of a box spanning `dims` cells, along the world axes.
    #[inline]
    pub fn world_extents(&self, dims: &Vector<u32>) -> Vector<Real> {
        dims.map(|e| e as Real).component_mul(&self.pitch).xzy()
    }
}
