use super::point::*;

use smallvec::*;

use std::f64::consts::{PI, FRAC_PI_2};

/// Tangent length for a cubic approximation of a quarter circle with the smallest radial error
const QUARTER_CIRCLE_TANGENT: f64 = 0.5519150244935105707;

/// Segment ratios this close to a whole number are treated as that whole number
const SEGMENT_RATIO_EPSILON: f64 = 1e-7;

///
/// One cubic section of an arc (the start point is the end point of the previous section)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CubicSegment {
    pub control1:   Point2D,
    pub control2:   Point2D,
    pub end:        Point2D,
}

///
/// An ellipse found from the endpoint description of an arc
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct CenterParameters {
    center:         Point2D,
    radius_x:       f64,
    radius_y:       f64,
    start_angle:    f64,
    sweep_angle:    f64,
}

///
/// The signed angle between two vectors
///
fn vector_angle(u: (f64, f64), v: (f64, f64)) -> f64 {
    let (ux, uy) = u;
    let (vx, vy) = v;

    let sign    = if ux*vy - uy*vx < 0.0 { -1.0 } else { 1.0 };
    let dot     = (ux*vx + uy*vy).max(-1.0).min(1.0);

    sign * dot.acos()
}

///
/// Finds the center, radii and angles of the ellipse that passes through `start` and `end`
///
/// `half_chord` is the vector from the midpoint of the chord to the start point, in the rotated frame of the ellipse.
/// The radii must already be large enough for the ellipse to span the chord.
///
fn center_parameters(start: Point2D, end: Point2D, radius_x: f64, radius_y: f64, sin_phi: f64, cos_phi: f64, half_chord: (f64, f64), large_arc: bool, sweep: bool) -> CenterParameters {
    let (pxp, pyp)  = half_chord;

    let rx_sq       = radius_x * radius_x;
    let ry_sq       = radius_y * radius_y;
    let pxp_sq      = pxp * pxp;
    let pyp_sq      = pyp * pyp;

    // Rounding can make the radicand slightly negative when the radii have just been scaled up to fit
    let radicand    = (rx_sq*ry_sq - rx_sq*pyp_sq - ry_sq*pxp_sq).max(0.0);
    let radicand    = radicand / (rx_sq*pyp_sq + ry_sq*pxp_sq);
    let radicand    = radicand.sqrt() * if large_arc == sweep { -1.0 } else { 1.0 };

    // Center in the rotated frame, then in the original frame
    let center_xp   = radicand * radius_x / radius_y * pyp;
    let center_yp   = radicand * -radius_y / radius_x * pxp;

    let center_x    = cos_phi*center_xp - sin_phi*center_yp + (start.0 + end.0)/2.0;
    let center_y    = sin_phi*center_xp + cos_phi*center_yp + (start.1 + end.1)/2.0;

    // Angles of the start and end points on the unit circle
    let v1          = ((pxp - center_xp)/radius_x, (pyp - center_yp)/radius_y);
    let v2          = ((-pxp - center_xp)/radius_x, (-pyp - center_yp)/radius_y);

    let start_angle = vector_angle((1.0, 0.0), v1);
    let mut sweep_angle = vector_angle(v1, v2);

    // The direction of the sweep is chosen by the sweep flag
    if !sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0*PI;
    }

    if sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0*PI;
    }

    CenterParameters {
        center:         Point2D(center_x, center_y),
        radius_x:       radius_x,
        radius_y:       radius_y,
        start_angle:    start_angle,
        sweep_angle:    sweep_angle,
    }
}

///
/// Approximates an arc of the unit circle of no more than 90 degrees with a cubic curve
///
fn approximate_unit_arc(start_angle: f64, sweep_angle: f64) -> CubicSegment {
    let tangent = if sweep_angle == FRAC_PI_2 {
        QUARTER_CIRCLE_TANGENT
    } else if sweep_angle == -FRAC_PI_2 {
        -QUARTER_CIRCLE_TANGENT
    } else {
        4.0/3.0 * (sweep_angle/4.0).tan()
    };

    let (y1, x1) = start_angle.sin_cos();
    let (y2, x2) = (start_angle + sweep_angle).sin_cos();

    CubicSegment {
        control1:   Point2D(x1 - y1*tangent, y1 + x1*tangent),
        control2:   Point2D(x2 + y2*tangent, y2 - x2*tangent),
        end:        Point2D(x2, y2),
    }
}

///
/// Number of 90-degree-or-less sections needed to cover a sweep angle
///
pub fn arc_segment_count(sweep_angle: f64) -> usize {
    let ratio   = sweep_angle.abs() / FRAC_PI_2;
    let nearest = ratio.round();
    let ratio   = if (ratio - nearest).abs() < SEGMENT_RATIO_EPSILON { nearest } else { ratio };

    (ratio.ceil() as usize).max(1)
}

///
/// Converts an elliptical arc from the endpoint form used by the SVG 'A' command into a series of cubic bezier sections
///
/// The arc runs from `start` to `end` around an ellipse with radii `radius_x` and `radius_y`, whose x axis is rotated by
/// `x_axis_rotation` degrees. Of the four arcs that fit these constraints, `large_arc` chooses the one that sweeps more than
/// 180 degrees and `sweep` chooses the one that is drawn in the direction of increasing angle. If the radii are too small for
/// any ellipse to pass through both points, they are scaled up until exactly one does.
///
/// No sections are returned if the start and end points are the same, or if either radius is 0.
///
pub fn arc_to_bezier(start: Point2D, end: Point2D, radius_x: f64, radius_y: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool) -> SmallVec<[CubicSegment; 4]> {
    if radius_x == 0.0 || radius_y == 0.0 {
        return smallvec![];
    }

    let (sin_phi, cos_phi) = (x_axis_rotation.to_radians()).sin_cos();

    // Half the chord between the points, rotated into the frame of the ellipse
    let pxp = cos_phi*(start.0 - end.0)/2.0 + sin_phi*(start.1 - end.1)/2.0;
    let pyp = -sin_phi*(start.0 - end.0)/2.0 + cos_phi*(start.1 - end.1)/2.0;

    if pxp == 0.0 && pyp == 0.0 {
        return smallvec![];
    }

    // Scale the radii up if they can't reach between the two points
    let mut radius_x    = radius_x.abs();
    let mut radius_y    = radius_y.abs();
    let lambda          = (pxp*pxp)/(radius_x*radius_x) + (pyp*pyp)/(radius_y*radius_y);

    if lambda > 1.0 {
        radius_x *= lambda.sqrt();
        radius_y *= lambda.sqrt();
    }

    let ellipse = center_parameters(start, end, radius_x, radius_y, sin_phi, cos_phi, (pxp, pyp), large_arc, sweep);

    // Split into sections of at most 90 degrees
    let num_segments    = arc_segment_count(ellipse.sweep_angle);
    let segment_sweep   = ellipse.sweep_angle / (num_segments as f64);

    // Map each section of the unit circle back onto the ellipse
    let to_ellipse = |point: Point2D| {
        let x = point.0 * ellipse.radius_x;
        let y = point.1 * ellipse.radius_y;

        Point2D(cos_phi*x - sin_phi*y + ellipse.center.0, sin_phi*x + cos_phi*y + ellipse.center.1)
    };

    (0..num_segments)
        .map(|idx| approximate_unit_arc(ellipse.start_angle + (idx as f64)*segment_sweep, segment_sweep))
        .map(|segment| CubicSegment {
            control1:   to_ellipse(segment.control1),
            control2:   to_ellipse(segment.control2),
            end:        to_ellipse(segment.end),
        })
        .collect()
}
