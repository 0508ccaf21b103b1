//! Greedy packing of occupancy grids into catalog bricks.

pub use self::packer::{pack, PackingResult};
pub use self::placement::Placement;

mod coverage;
mod packer;
mod placement;
