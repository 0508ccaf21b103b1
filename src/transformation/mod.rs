//! Conversion of placements into renderer-ready geometry.

pub use self::stud_layout::{stud_footprints, StudDimensions, StudFootprint};
pub use self::to_outline::{exposed_faces, extract_outline, outline_to_polyline, OutlineSegment};

mod stud_layout;
mod to_outline;
