//! Axis conventions.
//!
//! Grids store their cells with `z` as the third (innermost) index, while renderers
//! consume world-space geometry with `y` pointing up. A grid index `(x, y, z)`
//! therefore maps to the world position `(x, z, y)`: the last two components are
//! swapped. Every conversion from grid space to world space in this crate goes
//! through [`grid_to_world`].

use crate::math::{Point, DIM};
use na::Scalar;

/// Converts a point expressed along the grid axes into world axes.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::grid::grid_to_world;
/// use nalgebra::Point3;
///
/// // Grid `z` is the world "up" axis.
/// assert_eq!(grid_to_world(&Point3::new(1, 2, 3)), Point3::new(1, 3, 2));
/// # }
/// ```
#[inline]
pub fn grid_to_world<T: Scalar>(pt: &Point<T>) -> Point<T> {
    pt.xzy()
}

/// Converts a point expressed along the world axes into grid axes.
///
/// This is the inverse of [`grid_to_world`] (the swap is an involution).
#[inline]
pub fn world_to_grid<T: Scalar>(pt: &Point<T>) -> Point<T> {
    pt.xzy()
}

/// One of the three axes of the grid index space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// The first (outermost) grid axis.
    X,
    /// The second grid axis, horizontal in world space.
    Y,
    /// The third (innermost) grid axis, vertical in world space.
    Z,
}

impl GridAxis {
    /// The three grid axes, in storage order.
    pub const ALL: [GridAxis; DIM] = [GridAxis::X, GridAxis::Y, GridAxis::Z];

    /// The component index of this axis in grid-space points and vectors.
    pub const fn index(self) -> usize {
        match self {
            GridAxis::X => 0,
            GridAxis::Y => 1,
            GridAxis::Z => 2,
        }
    }

    /// The component index of this axis once converted with [`grid_to_world`].
    pub const fn world_index(self) -> usize {
        match self {
            GridAxis::X => 0,
            GridAxis::Y => 2,
            GridAxis::Z => 1,
        }
    }

    /// The two other axes, in increasing storage order.
    pub const fn tangents(self) -> [GridAxis; 2] {
        match self {
            GridAxis::X => [GridAxis::Y, GridAxis::Z],
            GridAxis::Y => [GridAxis::X, GridAxis::Z],
            GridAxis::Z => [GridAxis::X, GridAxis::Y],
        }
    }
}

/// A set of faces of an axis-aligned box of grid cells.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FaceMask(u8);

bitflags::bitflags! {
    /// Flags identifying the faces of a box of grid cells, by their outward normal
    /// expressed along the grid axes.
    impl FaceMask: u8 {
        /// The face with normal `+x`.
        const X_POS = 1 << 0;
        /// The face with normal `-x`.
        const X_NEG = 1 << 1;
        /// The face with normal `+y`.
        const Y_POS = 1 << 2;
        /// The face with normal `-y`.
        const Y_NEG = 1 << 3;
        /// The face with normal `+z` (the top face in world space).
        const Z_POS = 1 << 4;
        /// The face with normal `-z` (the bottom face in world space).
        const Z_NEG = 1 << 5;
    }
}

impl FaceMask {
    /// The axis the normal of this face is aligned with.
    ///
    /// `self` must contain exactly one face.
    pub fn normal_axis(self) -> GridAxis {
        debug_assert_eq!(self.bits().count_ones(), 1);
        match self.bits().trailing_zeros() / 2 {
            0 => GridAxis::X,
            1 => GridAxis::Y,
            _ => GridAxis::Z,
        }
    }

    /// Does the normal of this face point toward increasing coordinates?
    ///
    /// `self` must contain exactly one face.
    pub fn is_positive(self) -> bool {
        debug_assert_eq!(self.bits().count_ones(), 1);
        self.bits().trailing_zeros() % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_swap_is_an_involution() {
        let pt = Point::new(4, 5, 6);
        assert_eq!(grid_to_world(&pt), Point::new(4, 6, 5));
        assert_eq!(world_to_grid(&grid_to_world(&pt)), pt);
    }

    #[test]
    fn world_index_matches_swap() {
        let pt = Point::new(10, 20, 30);
        let world = grid_to_world(&pt);
        for axis in GridAxis::ALL {
            assert_eq!(pt[axis.index()], world[axis.world_index()]);
        }
    }

    #[test]
    fn face_mask_normals() {
        let expected = [
            (FaceMask::X_POS, GridAxis::X, true),
            (FaceMask::X_NEG, GridAxis::X, false),
            (FaceMask::Y_POS, GridAxis::Y, true),
            (FaceMask::Y_NEG, GridAxis::Y, false),
            (FaceMask::Z_POS, GridAxis::Z, true),
            (FaceMask::Z_NEG, GridAxis::Z, false),
        ];

        for (face, axis, positive) in expected {
            assert_eq!(face.normal_axis(), axis);
            assert_eq!(face.is_positive(), positive);
        }
        assert_eq!(FaceMask::all().iter().count(), 6);
    }
}
