use flo_svg_path::*;

use std::f64::consts::{PI};

fn distance(a: Point2D, b: Point2D) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[test]
fn coincident_endpoints_generate_nothing() {
    let segments = arc_to_bezier(Point2D(4.0, 4.0), Point2D(4.0, 4.0), 10.0, 10.0, 0.0, true, true);

    assert!(segments.is_empty(), "{:?}", segments);
}

#[test]
fn zero_radius_generates_nothing() {
    let segments = arc_to_bezier(Point2D(0.0, 0.0), Point2D(10.0, 0.0), 0.0, 10.0, 0.0, false, true);

    assert!(segments.is_empty(), "{:?}", segments);
}

#[test]
fn semicircle_is_two_segments() {
    for (large_arc, sweep) in vec![(false, false), (false, true), (true, false), (true, true)] {
        let segments = arc_to_bezier(Point2D(0.0, 0.0), Point2D(10.0, 0.0), 5.0, 5.0, 0.0, large_arc, sweep);

        assert!(segments.len() == 2, "Expected two segments for a 180 degree arc ({} {}), found {:?}", large_arc, sweep, segments);
    }
}

#[test]
fn quarter_circle_is_one_segment() {
    let segments = arc_to_bezier(Point2D(0.0, 0.0), Point2D(5.0, 5.0), 5.0, 5.0, 0.0, false, true);

    assert!(segments.len() == 1, "{:?}", segments);
    assert!(distance(segments[0].end, Point2D(5.0, 5.0)) < 1e-9, "{:?}", segments);
}

#[test]
fn three_quarter_circle_is_three_segments() {
    let segments = arc_to_bezier(Point2D(0.0, 0.0), Point2D(5.0, 5.0), 5.0, 5.0, 0.0, true, true);

    assert!(segments.len() == 3, "{:?}", segments);
    assert!(distance(segments[2].end, Point2D(5.0, 5.0)) < 1e-9, "{:?}", segments);
}

#[test]
fn sweep_flag_chooses_direction() {
    // Starting on the left of the circle, a positive sweep goes through the top (negative y) and a negative one through the bottom
    let positive = arc_to_bezier(Point2D(0.0, 0.0), Point2D(10.0, 0.0), 5.0, 5.0, 0.0, false, true);
    let negative = arc_to_bezier(Point2D(0.0, 0.0), Point2D(10.0, 0.0), 5.0, 5.0, 0.0, false, false);

    assert!(distance(positive[0].end, Point2D(5.0, -5.0)) < 1e-9, "{:?}", positive);
    assert!(distance(negative[0].end, Point2D(5.0, 5.0)) < 1e-9, "{:?}", negative);
}

#[test]
fn small_radius_is_scaled_up() {
    // A radius of 1 can't span a chord of 10, so the ellipse is scaled to a radius of 5 (a semicircle)
    let segments = arc_to_bezier(Point2D(0.0, 0.0), Point2D(10.0, 0.0), 1.0, 1.0, 0.0, false, true);

    assert!(segments.len() == 2, "{:?}", segments);
    assert!(distance(segments[0].end, Point2D(5.0, 0.0)) > 4.999, "{:?}", segments);
    assert!(distance(segments[0].end, Point2D(5.0, 0.0)) < 5.001, "{:?}", segments);
    assert!(distance(segments[1].end, Point2D(10.0, 0.0)) < 1e-6, "{:?}", segments);
}

#[test]
fn segment_ends_lie_on_circle() {
    let start       = Point2D(30.0, 20.0);
    let end         = Point2D(20.0, 30.0);
    let segments    = arc_to_bezier(start, end, 10.0, 10.0, 0.0, true, false);

    // Large arc from (30, 20) to (20, 30) with radius 10 is centered on (20, 20)
    for segment in segments.iter() {
        let radius = distance(segment.end, Point2D(20.0, 20.0));
        assert!((radius - 10.0).abs() < 1e-6, "Radius {} for {:?}", radius, segments);
    }
}

#[test]
fn rotated_ellipse_reaches_end_point() {
    let start       = Point2D(0.0, 0.0);
    let end         = Point2D(12.0, 7.0);
    let segments    = arc_to_bezier(start, end, 9.0, 4.0, 30.0, false, true);

    assert!(!segments.is_empty());
    assert!(distance(segments[segments.len()-1].end, end) < 1e-6, "{:?}", segments);
}

#[test]
fn segment_counts() {
    assert!(arc_segment_count(0.0) == 1);
    assert!(arc_segment_count(PI/4.0) == 1);
    assert!(arc_segment_count(PI/2.0) == 1);
    assert!(arc_segment_count(PI/2.0 + 1e-9) == 1);
    assert!(arc_segment_count(PI/2.0 + 0.01) == 2);
    assert!(arc_segment_count(-PI) == 2);
    assert!(arc_segment_count(PI + 1e-9) == 2);
    assert!(arc_segment_count(3.0*PI/2.0) == 3);
    assert!(arc_segment_count(-2.0*PI) == 4);
}

#[test]
fn quarter_circle_uses_best_fit_constant() {
    let segments    = arc_to_bezier(Point2D(1.0, 0.0), Point2D(0.0, 1.0), 1.0, 1.0, 0.0, false, true);
    let control1    = segments[0].control1;

    assert!(segments.len() == 1);
    assert!((control1.1 - 0.5519150244935105707).abs() < 1e-9, "{:?}", segments);
}
