use brickpack3d::catalog::BrickCatalog;
use brickpack3d::grid::{GridFrame, OccupancyGrid};
use brickpack3d::packing::pack;
use brickpack3d::na::{Point3, Vector3};
use brickpack3d::transformation::extract_outline;

#[test]
fn two_cell_bar_uses_one_long_brick() {
    let grid = OccupancyGrid::new(Vector3::new(2, 1, 1), GridFrame::unit(), vec![true; 2]).unwrap();
    let inventory =
        BrickCatalog::new(&[(Vector3::new(2, 1, 1), 1), (Vector3::new(1, 1, 1), 10)]).unwrap();
    let result = pack(&grid, &inventory);

    assert_eq!(result.placements.len(), 1);
    assert_eq!(result.placements[0].brick.dims(), Vector3::new(2, 1, 1));
    assert_eq!(result.placements[0].origin, Point3::origin());
    assert_eq!(result.residual.remaining(&Vector3::new(2, 1, 1)), Some(0));
    assert_eq!(result.residual.remaining(&Vector3::new(1, 1, 1)), Some(10));
}

#[test]
fn brick_sticking_out_of_the_grid_is_never_placed() {
    let grid = OccupancyGrid::new(Vector3::new(1, 1, 1), GridFrame::unit(), vec![true]).unwrap();
    let inventory = BrickCatalog::new(&[(Vector3::new(2, 1, 1), 1)]).unwrap();
    let result = pack(&grid, &inventory);

    assert!(result.placements.is_empty());
    assert_eq!(result.residual, inventory);
    assert_eq!(result.uncovered_cells(&grid), vec![Point3::origin()]);
}

#[test]
fn empty_grid_leaves_inventory_untouched() {
    let grid = OccupancyGrid::empty(Vector3::new(4, 3, 2), GridFrame::unit()).unwrap();
    let inventory = BrickCatalog::new(&[
        (Vector3::new(2, 2, 1), 4),
        (Vector3::new(2, 1, 1), 4),
        (Vector3::new(1, 1, 1), 100),
    ])
    .unwrap();
    let result = pack(&grid, &inventory);

    assert!(result.placements.is_empty());
    assert_eq!(result.residual, inventory);
    assert!(result.is_complete(&grid));
    assert!(extract_outline(&result.placements, grid.frame()).is_empty());
}

#[test]
fn caller_inventory_is_not_mutated() {
    let grid = OccupancyGrid::from_fn(Vector3::new(3, 3, 3), GridFrame::unit(), |_| true).unwrap();
    let inventory = BrickCatalog::new(&[(Vector3::new(1, 1, 1), 100)]).unwrap();
    let before = inventory.clone();
    let result = pack(&grid, &inventory);

    assert_eq!(inventory, before);
    assert_eq!(result.residual.remaining(&Vector3::new(1, 1, 1)), Some(73));
}

#[test]
fn rotations_are_distinct_catalog_entries() {
    // A 1x2x1 column can't be covered by a 2x1x1 brick: rotations aren't implicit.
    let grid = OccupancyGrid::new(Vector3::new(1, 2, 1), GridFrame::unit(), vec![true; 2]).unwrap();
    let inventory =
        BrickCatalog::new(&[(Vector3::new(2, 1, 1), 5), (Vector3::new(1, 1, 1), 5)]).unwrap();
    let result = pack(&grid, &inventory);

    assert_eq!(result.placements_of(&Vector3::new(2, 1, 1)), 0);
    assert_eq!(result.placements_of(&Vector3::new(1, 1, 1)), 2);

    let rotated = BrickCatalog::new(&[
        (Vector3::new(2, 1, 1), 5),
        (Vector3::new(1, 2, 1), 5),
        (Vector3::new(1, 1, 1), 5),
    ])
    .unwrap();
    let result = pack(&grid, &rotated);
    assert_eq!(result.placements.len(), 1);
    assert_eq!(result.placements[0].brick.dims(), Vector3::new(1, 2, 1));
}

#[test]
fn scan_order_gives_lower_x_the_first_pick() {
    // Solid cells: x in 0..3 on a 3x1x1 bar. A 2x1x1 anchored at x = 0 wins,
    // leaving x = 2 to the unit brick.
    let grid = OccupancyGrid::from_fn(Vector3::new(3, 1, 1), GridFrame::unit(), |_| true).unwrap();
    let inventory =
        BrickCatalog::new(&[(Vector3::new(1, 1, 1), 5), (Vector3::new(2, 1, 1), 5)]).unwrap();
    let result = pack(&grid, &inventory);

    let layout: Vec<_> = result
        .placements
        .iter()
        .map(|p| (p.origin.x, p.brick.dims().x))
        .collect();
    assert_eq!(layout, vec![(0, 2), (2, 1)]);
}
