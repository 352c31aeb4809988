use super::*;
use crate::morph::ring::{centroid, ring_from_svg};

const RECT_HOLE: &str = "M10,10H110V110H10V10Z";

fn opts() -> MorphOptions {
    MorphOptions::default()
}

#[test]
fn circle_path_format() {
    assert_eq!(
        circle_path(Point::new(180.0, 180.0), 30.0),
        "M150,180A30,30,0,1,1,210,180A30,30,0,1,1,150,180Z"
    );
}

#[test]
fn circle_target_ends_on_circle_primitive() {
    let next = TargetRegion::circle(150.0, 150.0, 60.0, 60.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    assert_eq!(
        morph.at(1.0),
        "M150,180A30,30,0,1,1,210,180A30,30,0,1,1,150,180Z"
    );
    assert_eq!(morph.at(0.0), RECT_HOLE);
}

#[test]
fn circle_radius_uses_larger_side() {
    let next = TargetRegion::circle(0.0, 0.0, 40.0, 100.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    assert_eq!(morph.to_path(), circle_path(Point::new(20.0, 50.0), 50.0));
}

#[test]
fn circle_morph_converges_on_circle() {
    let next = TargetRegion::circle(150.0, 150.0, 60.0, 60.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    let late = ring_from_svg(&morph.at(0.999), 1e9, 1e-3, 4096).unwrap();
    let c = Point::new(180.0, 180.0);
    for p in &late {
        assert!((p.distance(c) - 30.0).abs() < 0.5, "{p:?} not near circle");
    }
}

#[test]
fn rectangle_target_ends_on_rectangle_hole() {
    let next = TargetRegion::rect(150.0, 150.0, 60.0, 60.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    assert_eq!(morph.at(1.0), "M150,150H210V210H150V150Z");
    assert_eq!(morph.at(0.0), RECT_HOLE);
    assert_eq!(morph.point_count(), 40);
}

#[test]
fn midpoint_frame_sits_between_targets() {
    let next = TargetRegion::rect(150.0, 150.0, 60.0, 60.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    let mid = morph.at(0.5);
    assert!(mid.starts_with('M') && mid.ends_with('Z'));

    let ring = ring_from_svg(&mid, 1e9, 1e-3, 4096).unwrap();
    assert_eq!(ring.len(), 40);
    let c = centroid(&ring);
    assert!((100.0..140.0).contains(&c.x), "centroid {c:?}");
    assert!((100.0..140.0).contains(&c.y), "centroid {c:?}");
    for p in &ring {
        assert!((10.0..=210.0).contains(&p.x) && (10.0..=210.0).contains(&p.y));
    }
}

#[test]
fn circle_source_morphs_back_to_rectangle() {
    let circle = circle_path(Point::new(180.0, 180.0), 30.0);
    let next = TargetRegion::rect(10.0, 10.0, 100.0, 100.0).unwrap();
    let morph = make_interpolator(&circle, &next, &opts()).unwrap();
    assert_eq!(morph.at(0.0), circle);
    assert_eq!(morph.at(1.0), RECT_HOLE);
    assert!(morph.at(0.5).starts_with('M'));
}

#[test]
fn frames_are_deterministic_and_clamped() {
    let next = TargetRegion::rect(150.0, 150.0, 60.0, 60.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    assert_eq!(morph.at(0.37), morph.at(0.37));
    assert_eq!(morph.at(-2.0), morph.at(0.0));
    assert_eq!(morph.at(5.0), morph.at(1.0));
}

#[test]
fn degenerate_targets_do_not_panic() {
    let next = TargetRegion::rect(40.0, 40.0, 0.0, 0.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &opts()).unwrap();
    assert_eq!(morph.at(1.0), "M40,40H40V40H40V40Z");
    let mid = ring_from_svg(&morph.at(0.5), 1e9, 1e-3, 4096).unwrap();
    assert!(!mid.is_empty());

    let dot = TargetRegion::circle(40.0, 40.0, 0.0, 0.0).unwrap();
    assert!(make_interpolator(RECT_HOLE, &dot, &opts()).is_ok());
}

#[test]
fn unparseable_source_is_an_error() {
    let next = TargetRegion::rect(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(matches!(
        make_interpolator("", &next, &opts()),
        Err(SpotlightError::Path(_))
    ));
}

#[test]
fn options_validation() {
    assert!(MorphOptions::default().validate().is_ok());
    let bad = MorphOptions {
        max_segment_length: 0.0,
        ..MorphOptions::default()
    };
    assert!(bad.validate().is_err());
    let bad = MorphOptions {
        endpoint_epsilon: 0.5,
        ..MorphOptions::default()
    };
    assert!(bad.validate().is_err());
    let bad = MorphOptions {
        max_ring_points: 2,
        ..MorphOptions::default()
    };
    assert!(bad.validate().is_err());

    let parsed: MorphOptions = serde_json::from_str(r#"{"max_segment_length": 5}"#).unwrap();
    assert_eq!(parsed.max_segment_length, 5.0);
    assert_eq!(parsed.endpoint_epsilon, 1e-4);
    assert_eq!(parsed.max_ring_points, 2048);
}

#[test]
fn tiny_segment_length_stays_bounded() {
    let fine = MorphOptions {
        max_segment_length: 1e-6,
        ..MorphOptions::default()
    };
    let next = TargetRegion::rect(20.0, 20.0, 50.0, 50.0).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &fine).unwrap();
    assert!(morph.point_count() <= fine.max_ring_points + 8);
    assert!(morph.at(0.5).starts_with('M'));
}

#[test]
fn huge_target_stays_bounded() {
    let o = opts();
    let next = TargetRegion::rect(0.0, 0.0, 1e9, 1e9).unwrap();
    let morph = make_interpolator(RECT_HOLE, &next, &o).unwrap();
    assert!(morph.point_count() <= o.max_ring_points + 8);
    assert_eq!(morph.at(1.0), "M0,0H1000000000V1000000000H0V0Z");

    let circle = TargetRegion::circle(0.0, 0.0, 1e9, 1e9).unwrap();
    let morph = make_interpolator(&rect_hole_path(&next), &circle, &o).unwrap();
    assert!(morph.point_count() <= o.max_ring_points + 8);
}
