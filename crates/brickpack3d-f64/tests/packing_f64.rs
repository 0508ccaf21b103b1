use approx::assert_relative_eq;
use brickpack3d_f64::catalog::BrickCatalog;
use brickpack3d_f64::grid::{GridFrame, OccupancyGrid};
use brickpack3d_f64::na::{Point3, Vector3};
use brickpack3d_f64::packing::pack;
use brickpack3d_f64::transformation::extract_outline;

#[test]
fn pack_and_outline_with_f64_frame() {
    let frame = GridFrame::new(Point3::new(-1.0, 0.0, 0.5), Vector3::new(0.1, 0.1, 0.05));
    let grid = OccupancyGrid::from_fn(Vector3::new(2, 2, 2), frame, |_| true).unwrap();
    let inventory =
        BrickCatalog::new(&[(Vector3::new(2, 2, 1), 2), (Vector3::new(1, 1, 1), 8)]).unwrap();
    let result = pack(&grid, &inventory);

    assert_eq!(result.placements.len(), 2);
    assert_eq!(result.placements[1].origin, Point3::new(0, 0, 1));
    assert_eq!(result.residual.remaining(&Vector3::new(1, 1, 1)), Some(8));

    // The two stacked slabs share one face: 12 - 2 exposed faces.
    let outline = extract_outline(&result.placements, grid.frame());
    assert_eq!(outline.len(), 40);

    // World axes: grid z (pitch 0.05, origin 0.5) is the vertical world y.
    let (mins, maxs) = outline.iter().flat_map(|s| [s.a, s.b]).fold(
        (Point3::from(Vector3::repeat(f64::MAX)), Point3::from(Vector3::repeat(f64::MIN))),
        |(mins, maxs), p| (mins.inf(&p), maxs.sup(&p)),
    );
    assert_relative_eq!(mins, Point3::new(-1.0, 0.5, 0.0), epsilon = 1.0e-12);
    assert_relative_eq!(maxs, Point3::new(-0.8, 0.6, 0.2), epsilon = 1.0e-12);
}
