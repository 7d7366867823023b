use flo_svg_render::fill::*;
use flo_svg_render::pixel::*;
use flo_svg_render::curves::*;
use flo_svg_render::render::*;

use flo_svg_path::*;

fn black() -> Option<U8RgbaPixel> {
    U8RgbaPixel::from_color(Color::Rgba(0.0, 0.0, 0.0, 1.0))
}

fn draw(control_points: &[Point2D], stroke: Option<U8RgbaPixel>, radius: usize) -> (RgbaFrame, BorderMask) {
    let mut frame   = RgbaFrame::new(40, 40);
    let mut border  = BorderMask::new(40, 40);

    CurveRasterizer::new(&mut frame, &mut border, stroke, radius).draw_curve(control_points);

    (frame, border)
}

#[test]
fn sample_count_is_bounding_box_area() {
    assert!(curve_sample_count(&[Point2D(0.0, 0.0), Point2D(10.0, 5.0)]) == 50);
    assert!(curve_sample_count(&[Point2D(0.0, 0.0), Point2D(10.0, 0.0)]) == 10);
    assert!(curve_sample_count(&[Point2D(3.0, 3.0), Point2D(3.0, 3.0)]) == 1);
    assert!(curve_sample_count(&[Point2D(0.0, 0.0), Point2D(4.0, 8.0), Point2D(2.0, 1.0), Point2D(3.0, 3.0)]) == 32);
}

#[test]
fn huge_sample_counts_saturate() {
    assert!(curve_sample_count(&[Point2D(0.0, 0.0), Point2D(1e10, 1e10)]) == usize::MAX);
    assert!(curve_sample_count(&[Point2D(-1e300, 0.0), Point2D(1e300, 1e300)]) == usize::MAX);
}

#[test]
fn sample_limit_covers_surface_and_stroke() {
    assert!(curve_sample_limit(40, 40, 0) == 41*41);
    assert!(curve_sample_limit(40, 20, 3) == 47*27);
    assert!(curve_sample_limit(usize::MAX, 2, 1) == usize::MAX);
}

#[test]
fn huge_line_is_drawn_quickly() {
    let (frame, border) = draw(&[Point2D(0.0, 0.0), Point2D(1e10, 1e10)], black(), 2);

    // The start of the line is on the surface, the rest only marks clamped pixels on the far edge
    assert!(border.is_border(0, 0));
    assert!(border.is_border(39, 39));
    assert!(frame.get_pixel(0, 0).map(|pixel| pixel.alpha()) == Some(255));
}

#[test]
fn curves_pass_through_end_points() {
    let table   = BinomialTable::for_curves();
    let cubic   = [Point2D(1.0, 2.0), Point2D(5.0, 9.0), Point2D(7.0, -3.0), Point2D(11.0, 4.0)];

    assert!(evaluate_curve(table, &cubic, 0.0) == Point2D(1.0, 2.0));
    assert!(evaluate_curve(table, &cubic, 1.0) == Point2D(11.0, 4.0));
}

#[test]
fn line_midpoint() {
    let table   = BinomialTable::for_curves();
    let mid     = evaluate_curve(table, &[Point2D(0.0, 0.0), Point2D(10.0, 4.0)], 0.5);

    assert!((mid.x() - 5.0).abs() < 1e-9 && (mid.y() - 2.0).abs() < 1e-9, "{:?}", mid);
}

#[test]
fn quadratic_midpoint() {
    let table   = BinomialTable::for_curves();
    let mid     = evaluate_curve(table, &[Point2D(0.0, 0.0), Point2D(5.0, 10.0), Point2D(10.0, 0.0)], 0.5);

    assert!((mid.x() - 5.0).abs() < 1e-9 && (mid.y() - 5.0).abs() < 1e-9, "{:?}", mid);
}

#[test]
fn horizontal_line_is_continuous() {
    let (frame, border) = draw(&[Point2D(5.0, 10.0), Point2D(25.0, 10.0)], black(), 1);

    for x in 5..=25 {
        assert!(border.is_border(x, 10), "Gap at {}", x);
        assert!(frame.get_pixel(x, 10).map(|pixel| pixel.alpha()) == Some(255), "Gap at {}", x);
    }

    assert!(border.count() == 21, "{}", border.count());
}

#[test]
fn border_stays_in_bounding_box() {
    let curves = vec![
        vec![Point2D(5.0, 5.0), Point2D(30.0, 12.0)],
        vec![Point2D(4.0, 30.0), Point2D(20.0, 2.0), Point2D(35.0, 30.0)],
        vec![Point2D(8.0, 8.0), Point2D(8.0, 32.0), Point2D(32.0, 32.0), Point2D(32.0, 8.0)],
        vec![Point2D(10.5, 20.5), Point2D(29.5, 20.5)],
    ];

    for radius in 0..4 {
        for control_points in curves.iter() {
            let (_, border) = draw(control_points, black(), radius);

            let min_x = control_points.iter().map(|p| p.x()).fold(f64::MAX, f64::min).floor() - radius as f64;
            let min_y = control_points.iter().map(|p| p.y()).fold(f64::MAX, f64::min).floor() - radius as f64;
            let max_x = control_points.iter().map(|p| p.x()).fold(f64::MIN, f64::max).ceil() + radius as f64;
            let max_y = control_points.iter().map(|p| p.y()).fold(f64::MIN, f64::max).ceil() + radius as f64;

            assert!(border.count() > 0);
            for (x, y) in border.border_pixels() {
                let (x, y) = (x as f64, y as f64);
                assert!(x >= min_x && x <= max_x && y >= min_y && y <= max_y, "({}, {}) outside of bounds for {:?} (radius {})", x, y, control_points, radius);
            }
        }
    }
}

#[test]
fn border_matches_painted_pixels() {
    let (frame, border) = draw(&[Point2D(4.0, 30.0), Point2D(20.0, 2.0), Point2D(35.0, 30.0)], black(), 3);

    for y in 0..40 {
        for x in 0..40 {
            let painted = frame.get_pixel(x, y).map(|pixel| !pixel.is_transparent()).unwrap_or(false);
            assert!(painted == border.is_border(x, y), "Mismatch at ({}, {})", x, y);
        }
    }
}

#[test]
fn thicker_strokes_cover_more_pixels() {
    let line            = [Point2D(5.0, 20.0), Point2D(35.0, 20.0)];
    let (_, thin)       = draw(&line, black(), 1);
    let (_, thick)      = draw(&line, black(), 3);

    assert!(thick.count() > thin.count());

    // A radius of 3 stamps circles of radius 0, 1 and 2, so the stroke is 5 pixels wide
    for y in 18..=22 {
        assert!(thick.is_border(20, y), "Missing stroke at y={}", y);
    }
    assert!(!thick.is_border(20, 17));
    assert!(!thick.is_border(20, 23));
}

#[test]
fn no_stroke_still_records_border() {
    let (frame, border) = draw(&[Point2D(5.0, 10.0), Point2D(25.0, 10.0)], None, 3);

    assert!(frame.count_pixels(|pixel| !pixel.is_transparent()) == 0);
    assert!(border.count() == 21, "{}", border.count());
}

#[test]
fn points_outside_surface_are_clamped() {
    let (frame, border) = draw(&[Point2D(-10.0, 10.0), Point2D(-10.0, 20.0)], black(), 1);

    assert!(frame.count_pixels(|pixel| !pixel.is_transparent()) == 0);
    for y in 10..=20 {
        assert!(border.is_border(0, y), "Missing clamped border at {}", y);
    }
}

#[test]
fn rasterizer_counts_primitives() {
    let mut frame       = RgbaFrame::new(20, 20);
    let mut border      = BorderMask::new(20, 20);
    let mut rasterizer  = CurveRasterizer::new(&mut frame, &mut border, black(), 1);

    interpret_path("M2 2 L18 2 Q18 18 2 18 Z", PathTransform::identity(), &mut rasterizer).unwrap();

    assert!(rasterizer.num_primitives() == 3);
}
