pub use self::placements_to_outline::{
    exposed_faces, extract_outline, outline_to_polyline, OutlineSegment,
};

mod placements_to_outline;
