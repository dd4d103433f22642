//! Integration tests for the trail geometry

use learning_tree::core::geometry::{wave_offset, CurvePath, PathCommand, PathShape, Point};

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn default_tree_trail_starts_and_ends_on_center_line() {
    let shape = PathShape::new(100.0, 45.0, 30).expect("valid shape");
    let points = shape.sample(800.0);

    assert_eq!(points.len(), 31);
    assert!(close(points[0].x, 100.0) && close(points[0].y, 0.0));
    let last = points[30];
    assert!(close(last.x, 100.0), "last x was {}", last.x);
    assert!(close(last.y, 800.0));
}

#[test]
fn sample_count_follows_segments_for_any_extent() {
    for segments in [1, 2, 7, 30, 100] {
        let shape = PathShape::new(50.0, 20.0, segments).expect("valid shape");
        for extent in [0.0, 1.0, 333.3, 5000.0] {
            let points: Vec<Point> = shape.points(extent).collect();
            assert_eq!(points.len(), segments + 1);
            assert!(close(points[0].y, 0.0));
            assert!(close(points[segments].y, extent));
        }
    }
}

#[test]
fn samples_stay_within_amplitude_band() {
    let shape = PathShape::new(100.0, 45.0, 200).expect("valid shape");
    for point in shape.points(1000.0) {
        assert!(point.x >= 55.0 && point.x <= 145.0, "x out of band: {}", point.x);
    }
}

#[test]
fn samples_descend_monotonically() {
    let points = PathShape::default().sample(640.0);
    assert!(points.windows(2).all(|w| w[1].y > w[0].y));
}

#[test]
fn offset_starts_at_zero_and_is_repeatable() {
    assert!(wave_offset(0.0).abs() < f64::EPSILON);
    for step in 0..=20 {
        let p = f64::from(step) / 20.0;
        assert_eq!(wave_offset(p).to_bits(), wave_offset(p).to_bits());
    }
}

#[test]
fn single_segment_emits_one_cubic() {
    let shape = PathShape::new(100.0, 45.0, 1).expect("valid shape");
    let curve = shape.curve(800.0);
    let d = curve.to_svg_d();

    assert_eq!(curve.points().len(), 2);
    assert_eq!(d.matches('M').count(), 1);
    assert_eq!(d.matches('C').count(), 1);
}

#[test]
fn curve_description_has_expected_layout() {
    let curve = PathShape::default().curve(800.0);
    let d = curve.to_svg_d();

    assert!(d.starts_with("M 100 0 C "));
    assert_eq!(d.matches(" C ").count(), 30);
    assert!(d.ends_with(" 800"));
    // Three coordinate pairs per cubic, separated by ", "
    assert_eq!(d.matches(", ").count(), 60);
}

#[test]
fn every_segment_is_horizontal_at_its_ends() {
    let curve = PathShape::default().curve(500.0);
    let points = curve.points();

    for (idx, command) in curve.commands().iter().skip(1).enumerate() {
        let PathCommand::CubicTo { ctrl1, ctrl2, to } = *command else {
            panic!("expected a cubic at {idx}");
        };
        assert_eq!(ctrl1.y, points[idx].y);
        assert_eq!(ctrl2.y, to.y);
        assert_eq!(to, points[idx + 1]);
    }
}

#[test]
fn regeneration_is_byte_identical() {
    let shape = PathShape::default();
    assert_eq!(shape.sample(777.0), shape.sample(777.0));
    assert_eq!(shape.curve(777.0).to_svg_d(), shape.curve(777.0).to_svg_d());
}

#[test]
fn zero_segments_is_rejected() {
    assert!(PathShape::new(100.0, 45.0, 0).is_err());
}

#[test]
fn unusable_extents_draw_a_flat_trail() {
    let shape = PathShape::default();
    let flat = shape.curve(0.0);
    for extent in [-1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(shape.curve(extent), flat);
    }
    assert!(flat.points().iter().all(|p| p.y == 0.0));
}

#[test]
fn hand_built_curve_matches_shape_curve() {
    let shape = PathShape::default();
    let by_hand = CurvePath::through(shape.sample(400.0));
    assert_eq!(by_hand, shape.curve(400.0));
}
