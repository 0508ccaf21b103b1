/*!
brickpack
========

**brickpack** turns a voxelized solid into a set of rectangular brick
placements drawn from a finite, typed inventory, and derives the wireframe
outline of the externally visible brick faces.

The pipeline is:

1. an [`OccupancyGrid`](grid::OccupancyGrid) produced by an external voxelizer,
2. a [`BrickCatalog`](catalog::BrickCatalog) describing the available bricks,
3. [`pack`](packing::pack), the greedy packer producing [`Placement`](packing::Placement)s,
4. [`extract_outline`](transformation::extract_outline) and
   [`stud_footprints`](transformation::stud_footprints) feeding a renderer.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod catalog;
pub mod grid;
pub mod packing;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
