//! Occupancy grids and the mapping between grid indices and world space.

pub use self::axes::{grid_to_world, world_to_grid, FaceMask, GridAxis};
pub use self::cell_box::CellBox;
pub use self::grid_error::{GridError, GridIndexOutOfRange};
pub use self::grid_frame::GridFrame;
pub use self::occupancy_grid::OccupancyGrid;

mod axes;
mod cell_box;
mod grid_error;
mod grid_frame;
mod occupancy_grid;
