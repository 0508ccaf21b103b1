use crate::catalog::BrickType;
use crate::grid::{CellBox, GridFrame};
use crate::math::{Point, Real, Vector};

/// One brick instance anchored at a grid index.
///
/// The placement covers the half-open box `[origin, origin + brick.dims())` of grid
/// cells. Placements produced by the same packing run never overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The type of the placed brick.
    pub brick: BrickType,
    /// The grid index of the minimum corner of the placed brick.
    pub origin: Point<u32>,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(brick: BrickType, origin: Point<u32>) -> Self {
        Self { brick, origin }
    }

    /// The box of grid cells covered by this placement.
    ///
    /// # Panics
    ///
    /// Panics if `origin + brick.dims()` overflows the `u32` index space along some
    /// axis. This can’t happen for placements computed by the packer, which always lie
    /// inside of a grid.
    #[inline]
    pub fn cell_box(&self) -> CellBox {
        CellBox::from_origin_and_dims(self.origin, &self.brick.dims()).unwrap_or_else(|| {
            panic!(
                "placement of a {:?} brick at {:?} exceeds the grid index space",
                self.brick.dims(),
                self.origin
            )
        })
    }

    /// The world-space minimum and maximum corners of this placement, along the world axes.
    pub fn world_corners(&self, frame: &GridFrame) -> (Point<Real>, Point<Real>) {
        let cells = self.cell_box();
        (frame.to_world(&cells.mins), frame.to_world(&cells.maxs))
    }

    /// The world-space size of this placement, along the world axes.
    #[inline]
    pub fn world_extents(&self, frame: &GridFrame) -> Vector<Real> {
        frame.world_extents(&self.brick.dims())
    }

    /// The world-space height of the top face of this placement.
    ///
    /// This is the world `y` coordinate (grid `z`) of the placement's upper bound.
    #[inline]
    pub fn top_elevation(&self, frame: &GridFrame) -> Real {
        self.world_corners(frame).1.y
    }
}
