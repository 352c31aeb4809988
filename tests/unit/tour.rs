use super::*;
use crate::foundation::core::ShapeKind;

const TOUR: &str = r#"
{
  "canvas": { "width": 320, "height": 640 },
  "steps": [
    { "position": { "x": 10, "y": 10 }, "size": { "x": 100, "y": 100 } },
    { "position": { "x": 150, "y": 150 }, "size": { "x": 60, "y": 60 }, "shape": "circle" },
    { "position": { "x": 20, "y": 500 }, "size": { "x": 280, "y": 40 }, "shape": "rectangle" }
  ]
}
"#;

#[test]
fn parses_steps_and_defaults() {
    let tour = Tour::from_json_str(TOUR).unwrap();
    assert_eq!(tour.steps.len(), 3);
    assert_eq!(tour.steps[0].shape, ShapeKind::Rectangle);
    assert_eq!(tour.steps[1].shape, ShapeKind::Circle);
    assert_eq!(tour.morph, MorphOptions::default());
}

#[test]
fn mask_path_of_step() {
    let tour = Tour::from_json_str(TOUR).unwrap();
    assert_eq!(
        tour.mask_path(0).unwrap(),
        "M0,0H320V640H0V0ZM10,10H110V110H10V10Z"
    );
    assert!(tour.mask_path(3).is_err());
}

#[test]
fn transition_between_steps() {
    let tour = Tour::from_json_str(TOUR).unwrap();
    let engine = tour.engine().unwrap();

    let t = tour.transition(&engine, 1, 2).unwrap();
    assert_eq!(t.frame(1.0), tour.mask_path(2).unwrap());

    let t = tour.transition(&engine, 0, 1).unwrap();
    assert_eq!(t.frame(0.0), tour.mask_path(0).unwrap());
    assert!(t.frame(1.0).ends_with("A30,30,0,1,1,150,180Z"));
}

#[test]
fn rejects_unknown_shape() {
    let json = r#"{ "canvas": { "width": 1, "height": 1 },
        "steps": [ { "position": { "x": 0, "y": 0 }, "size": { "x": 1, "y": 1 }, "shape": "star" } ] }"#;
    assert!(matches!(
        Tour::from_json_str(json),
        Err(SpotlightError::Validation(_))
    ));

    assert!(matches!(
        Tour::from_json_str("{ not json"),
        Err(SpotlightError::Serde(_))
    ));
}

#[test]
fn shape_spellings_match_the_cli() {
    let json = r#"{ "canvas": { "width": 1, "height": 1 },
        "steps": [
          { "position": { "x": 0, "y": 0 }, "size": { "x": 1, "y": 1 }, "shape": "rect" },
          { "position": { "x": 0, "y": 0 }, "size": { "x": 1, "y": 1 }, "shape": "Circle" }
        ] }"#;
    let tour = Tour::from_json_str(json).unwrap();
    assert_eq!(tour.steps[0].shape, ShapeKind::Rectangle);
    assert_eq!(tour.steps[1].shape, ShapeKind::Circle);
}

#[test]
fn circle_step_settles_on_its_circle() {
    let json = r#"{ "canvas": { "width": 320, "height": 640 },
        "steps": [
          { "position": { "x": 150, "y": 150 }, "size": { "x": 60, "y": 60 }, "shape": "circle" },
          { "position": { "x": 10, "y": 10 }, "size": { "x": 100, "y": 100 } }
        ] }"#;
    let tour = Tour::from_json_str(json).unwrap();
    let engine = tour.engine().unwrap();

    let at_rest = tour.mask_path(0).unwrap();
    assert_eq!(
        at_rest,
        "M0,0H320V640H0V0ZM150,180A30,30,0,1,1,210,180A30,30,0,1,1,150,180Z"
    );

    let arriving = tour.transition(&engine, 1, 0).unwrap();
    let leaving = tour.transition(&engine, 0, 1).unwrap();
    assert_eq!(arriving.frame(1.0), at_rest);
    assert_eq!(leaving.frame(0.0), arriving.frame(1.0));
    assert_eq!(leaving.frame(1.0), tour.mask_path(1).unwrap());
}

#[test]
fn rejects_empty_and_degenerate_tours() {
    let empty = r#"{ "canvas": { "width": 1, "height": 1 }, "steps": [] }"#;
    assert!(matches!(
        Tour::from_json_str(empty),
        Err(SpotlightError::Validation(_))
    ));

    let negative = r#"{ "canvas": { "width": 1, "height": 1 },
        "steps": [ { "position": { "x": 0, "y": 0 }, "size": { "x": -1, "y": 1 } } ] }"#;
    let err = Tour::from_json_str(negative).unwrap_err();
    assert!(err.to_string().contains("step 0"));

    let bad_opts = r#"{ "canvas": { "width": 1, "height": 1 },
        "steps": [ { "position": { "x": 0, "y": 0 }, "size": { "x": 1, "y": 1 } } ],
        "morph": { "max_segment_length": 0 } }"#;
    assert!(Tour::from_json_str(bad_opts).is_err());
}

#[test]
fn json_round_trip() {
    let tour = Tour::from_json_str(TOUR).unwrap();
    let back = Tour::from_json_str(&tour.to_json_string().unwrap()).unwrap();
    assert_eq!(back, tour);
}

#[test]
fn missing_file_is_reported() {
    let err = Tour::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, SpotlightError::Other(_)));
    assert!(err.to_string().contains("does/not/exist.json"));
}
