mod common;

use wayfinder_lib::{estimate_position, triangulate, Beacon, Error, Point, PositionSummary};

use common::science_hall;

fn beacon(x: i32, floor: i32, z: i32, level: u32) -> Beacon {
    Beacon::new(Point::new(x, floor, z), level)
}

#[test]
fn single_beacon_is_returned_exactly() {
    let only = beacon(10, 2, 5, 40);
    assert_eq!(estimate_position(Some(only), None, None).unwrap(), only.location);
    assert_eq!(estimate_position(None, Some(only), None).unwrap(), only.location);
}

#[test]
fn equal_signals_meet_halfway() {
    let estimate =
        estimate_position(Some(beacon(0, 1, 0, 10)), Some(beacon(10, 1, 0, 10)), None).unwrap();
    assert_eq!(estimate, Point::new(5, 1, 0));
}

#[test]
fn undetected_beacon_defers_to_the_other() {
    let heard = beacon(10, 1, 6, 5);
    let silent = beacon(0, 1, 0, 0);

    assert_eq!(
        estimate_position(Some(silent), Some(heard), None).unwrap(),
        Point::new(10, 1, 6)
    );
    assert_eq!(
        estimate_position(Some(heard), Some(silent), None).unwrap(),
        Point::new(10, 1, 6)
    );
}

#[test]
fn floor_comes_from_the_first_beacon() {
    let estimate =
        estimate_position(Some(beacon(0, 1, 0, 0)), Some(beacon(8, 2, 4, 9)), None).unwrap();
    assert_eq!(estimate, Point::new(8, 1, 4));
}

#[test]
fn missing_or_silent_readings_are_rejected() {
    assert!(matches!(
        estimate_position(None, None, None),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        estimate_position(Some(beacon(0, 1, 0, 0)), Some(beacon(4, 1, 0, 0)), None),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(triangulate(&[]), Err(Error::InvalidArgument { .. })));
}

#[test]
fn third_beacon_refines_the_midpoint() {
    // First pair meets at (5, 0) with surrogate level 10 + 10/2 = 15.
    let estimate = estimate_position(
        Some(beacon(0, 1, 0, 10)),
        Some(beacon(10, 1, 0, 10)),
        Some(beacon(5, 1, 10, 15)),
    )
    .unwrap();
    assert_eq!(estimate, Point::new(5, 1, 5));

    // A stronger third reading pulls the estimate closer to the first pair.
    let estimate = estimate_position(
        Some(beacon(0, 1, 0, 10)),
        Some(beacon(10, 1, 0, 10)),
        Some(beacon(5, 1, 30, 30)),
    )
    .unwrap();
    assert_eq!(estimate, Point::new(5, 1, 10));
}

#[test]
fn silent_third_beacon_is_skipped() {
    let estimate = estimate_position(
        Some(beacon(0, 1, 0, 10)),
        Some(beacon(10, 1, 0, 10)),
        Some(beacon(90, 1, 90, 0)),
    )
    .unwrap();
    assert_eq!(estimate, Point::new(5, 1, 0));
}

#[test]
fn estimate_maps_onto_fixture_node() {
    let map = science_hall();
    let estimate =
        estimate_position(Some(beacon(0, 1, 0, 10)), Some(beacon(20, 1, 0, 10)), None).unwrap();
    assert_eq!(estimate, Point::new(10, 1, 0));

    let closest = map.closest_node(&estimate).unwrap().expect("floor 1 has nodes");
    assert_eq!(closest.id, 2);

    let summary = PositionSummary::locate(&map, estimate).unwrap();
    assert_eq!(summary.closest.map(|endpoint| endpoint.id), Some(2));
    assert_eq!(summary.distance, Some(0.0));
}

#[test]
fn opposite_grid_corners_meet_at_origin() {
    let estimate = estimate_position(
        Some(beacon(i32::MIN, 1, i32::MIN, 10)),
        Some(beacon(i32::MAX, 1, i32::MAX, 10)),
        None,
    )
    .unwrap();
    assert_eq!(estimate, Point::new(0, 1, 0));
}
