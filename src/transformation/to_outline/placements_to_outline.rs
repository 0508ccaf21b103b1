use crate::catalog::BrickColor;
use crate::grid::{FaceMask, GridFrame};
use crate::math::{Point, Real};
use crate::packing::Placement;
use hashbrown::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One edge of an exposed brick face, in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OutlineSegment {
    /// The first endpoint of the segment, along the world axes.
    pub a: Point<Real>,
    /// The second endpoint of the segment, along the world axes.
    pub b: Point<Real>,
    /// The display color of the brick this edge belongs to.
    pub color: BrickColor,
}

/// Computes, for each placement, the set of its faces that are exposed.
///
/// A face is exposed if none of the cells lying just outside of it, across its full
/// extent, is covered by any placement. A face touching a neighboring placement even
/// partially is considered internal.
///
/// The returned masks are in the same order as `placements`.
pub fn exposed_faces(placements: &[Placement]) -> Vec<FaceMask> {
    let covered: HashSet<Point<u32>> = placements
        .iter()
        .flat_map(|p| p.cell_box().cells())
        .collect();

    #[cfg(feature = "parallel")]
    let iter = placements.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = placements.iter();

    iter.map(|placement| placement_exposed_faces(placement, &covered))
        .collect()
}

fn placement_exposed_faces(placement: &Placement, covered: &HashSet<Point<u32>>) -> FaceMask {
    let cells = placement.cell_box();
    let mut mask = FaceMask::empty();

    for face in FaceMask::all().iter() {
        let exposed = match cells.face_neighbors(face) {
            Some(neighbors) => !neighbors.cells().any(|index| covered.contains(&index)),
            None => true,
        };

        if exposed {
            mask |= face;
        }
    }

    mask
}

/// Computes the wireframe outline of the exposed faces of a set of placements.
///
/// Every exposed face (see [`exposed_faces`]) contributes exactly four segments forming
/// its rectangular boundary. Faces shared with neighboring placements are skipped so
/// the outline traces the visible seams of the assembly rather than every brick.
///
/// Segment endpoints are computed with `frame` and converted to world axes with
/// [`grid_to_world`](crate::grid::grid_to_world). An empty `placements` slice results in
/// an empty outline.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::catalog::BrickType;
/// use brickpack3d::grid::GridFrame;
/// use brickpack3d::packing::Placement;
/// use brickpack3d::transformation::extract_outline;
/// use nalgebra::{Point3, Vector3};
///
/// let brick = BrickType::new(Vector3::new(2, 1, 1)).unwrap();
/// let placements = [Placement::new(brick, Point3::origin())];
///
/// // A lone brick exposes its six faces.
/// assert_eq!(extract_outline(&placements, &GridFrame::unit()).len(), 24);
/// assert!(extract_outline(&[], &GridFrame::unit()).is_empty());
/// # }
/// ```
pub fn extract_outline(placements: &[Placement], frame: &GridFrame) -> Vec<OutlineSegment> {
    let masks = exposed_faces(placements);
    let num_faces: usize = masks.iter().map(|m| m.bits().count_ones() as usize).sum();
    let mut segments = Vec::with_capacity(num_faces * 4);

    for (placement, mask) in placements.iter().zip(masks.iter()) {
        let cells = placement.cell_box();
        let color = placement.brick.color();

        for face in mask.iter() {
            let corners = cells.face_corners(face).map(|c| frame.to_world(&c));

            for i in 0..4 {
                segments.push(OutlineSegment {
                    a: corners[i],
                    b: corners[(i + 1) % 4],
                    color,
                });
            }
        }
    }

    log::debug!(
        "Outlined {} exposed faces out of {} placements.",
        segments.len() / 4,
        placements.len()
    );

    segments
}

/// Converts outline segments into a vertex buffer and a segment index buffer.
///
/// Each segment gets its own two vertices; segment `i` is `[2 * i, 2 * i + 1]`.
pub fn outline_to_polyline(segments: &[OutlineSegment]) -> (Vec<Point<Real>>, Vec<[u32; 2]>) {
    let points = segments.iter().flat_map(|s| [s.a, s.b]).collect();
    let indices = (0..segments.len() as u32)
        .map(|i| [i * 2, i * 2 + 1])
        .collect();
    (points, indices)
}
