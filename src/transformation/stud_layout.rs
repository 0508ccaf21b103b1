use crate::catalog::BrickType;
use crate::grid::GridFrame;
use crate::math::{Point, Real};
use crate::packing::Placement;
use na::Point2;

/// The position of one decorative stud on top of a placed brick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StudFootprint {
    /// The world-space `(x, z)` center of the grid cell the stud sits on.
    pub center_xz: Point2<Real>,
    /// The world-space `y` coordinate of the top face of the brick.
    pub top_elevation: Real,
    /// The brick the stud belongs to.
    pub brick: BrickType,
}

impl StudFootprint {
    /// The world-space center of the stud's base, on top of the brick.
    #[inline]
    pub fn base_center(&self) -> Point<Real> {
        Point::new(self.center_xz.x, self.top_elevation, self.center_xz.y)
    }

    /// The world-space center of a stud cylinder with the given dimensions.
    #[inline]
    pub fn cylinder_center(&self, dims: &StudDimensions) -> Point<Real> {
        let mut center = self.base_center();
        center.y += dims.height / 2.0;
        center
    }
}

/// The size of the cylinders used to render studs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StudDimensions {
    /// The cylinder radius.
    pub radius: Real,
    /// The cylinder height.
    pub height: Real,
}

impl StudDimensions {
    /// Stud dimensions proportional to the horizontal size of a grid cell.
    ///
    /// The radius is a third, and the height a fifth, of the smallest horizontal pitch.
    pub fn from_pitch(frame: &GridFrame) -> Self {
        let cell = frame.pitch.x.min(frame.pitch.y);
        Self {
            radius: cell / 3.0,
            height: cell / 5.0,
        }
    }
}

/// Computes one stud position per grid cell under the top face of each placement.
///
/// Studs are listed placement by placement; for each placement, cells are visited
/// with the grid `x` index varying slowest.
pub fn stud_footprints(placements: &[Placement], frame: &GridFrame) -> Vec<StudFootprint> {
    let mut result = Vec::new();

    for placement in placements {
        let cells = placement.cell_box();
        let top_elevation = placement.top_elevation(frame);

        for x in cells.mins.x..cells.maxs.x {
            for y in cells.mins.y..cells.maxs.y {
                let center = frame.cell_center(&Point::new(x, y, cells.mins.z));
                result.push(StudFootprint {
                    center_xz: Point2::new(center.x, center.y),
                    top_elevation,
                    brick: placement.brick,
                });
            }
        }
    }

    result
}
