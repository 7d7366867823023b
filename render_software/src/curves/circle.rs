use smallvec::*;

///
/// Generates the pixels on the outline of a circle using the midpoint circle algorithm
///
/// A circle of radius 0 is the single center pixel. Points may be generated more than once, and may be outside of
/// any surface the circle is drawn on.
///
pub fn circle_outline(center_x: i64, center_y: i64, radius: i64) -> SmallVec<[(i64, i64); 64]> {
    let mut points = smallvec![
        (center_x, center_y + radius),
        (center_x, center_y - radius),
        (center_x + radius, center_y),
        (center_x - radius, center_y),
    ];

    let mut decision    = 1 - radius;
    let mut delta_x     = 1;
    let mut delta_y     = -2 * radius;
    let mut x           = 0;
    let mut y           = radius;

    // Walk one octant, reflecting each point into the other seven
    while x < y {
        if decision >= 0 {
            y           -= 1;
            delta_y     += 2;
            decision    += delta_y;
        }

        x           += 1;
        delta_x     += 2;
        decision    += delta_x;

        points.extend_from_slice(&[
            (center_x + x, center_y + y),
            (center_x - x, center_y + y),
            (center_x + x, center_y - y),
            (center_x - x, center_y - y),
            (center_x + y, center_y + x),
            (center_x - y, center_y + x),
            (center_x + y, center_y - x),
            (center_x - y, center_y - x),
        ]);
    }

    points
}
