use approx::relative_eq;
use brickpack3d::catalog::BrickType;
use brickpack3d::grid::GridFrame;
use brickpack3d::na::{Point2, Point3, Vector3};
use brickpack3d::packing::Placement;
use brickpack3d::transformation::{stud_footprints, StudDimensions};

#[test]
fn one_stud_per_top_cell() {
    let frame = GridFrame::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 0.5, 0.25));
    let brick = BrickType::new(Vector3::new(2, 3, 2)).unwrap();
    let placements = [Placement::new(brick, Point3::new(1, 0, 4))];
    let studs = stud_footprints(&placements, &frame);

    assert_eq!(studs.len(), 6);
    assert!(studs.iter().all(|s| s.brick == brick));
    // Top face at grid z = 4 + 2, i.e. world y = 3 + 6 * 0.25.
    assert!(studs.iter().all(|s| relative_eq!(s.top_elevation, 4.5)));
    assert_eq!(studs[0].center_xz, Point2::new(1.75, 2.25));
    assert_eq!(studs[1].center_xz, Point2::new(1.75, 2.75));
    assert_eq!(studs[5].center_xz, Point2::new(2.25, 3.25));
}

#[test]
fn stud_cylinders_sit_on_the_brick() {
    let frame = GridFrame::uniform(Point3::origin(), 0.3);
    let placements = [Placement::new(BrickType::unit(), Point3::new(0, 0, 1))];
    let studs = stud_footprints(&placements, &frame);
    let dims = StudDimensions::from_pitch(&frame);

    assert!(relative_eq!(dims.radius, 0.1, epsilon = 1.0e-5));
    assert!(relative_eq!(dims.height, 0.06, epsilon = 1.0e-5));

    let center = studs[0].cylinder_center(&dims);
    assert!(relative_eq!(center.y, 0.6 + 0.03, epsilon = 1.0e-5));
    assert!(relative_eq!(center.x, 0.15, epsilon = 1.0e-5));
    assert!(relative_eq!(center.z, 0.15, epsilon = 1.0e-5));
}

#[test]
fn no_placement_no_stud() {
    assert!(stud_footprints(&[], &GridFrame::unit()).is_empty());
}
