use super::command::*;

///
/// Generates the path for an ellipse centered at `(center_x, center_y)`
///
/// The ellipse is described as two half-ellipse arcs, starting and finishing at its leftmost point
///
pub fn ellipse_path(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(center_x - radius_x, center_y),
        PathCommand::arc_to(radius_x, radius_y, 0.0, true, true, center_x + radius_x, center_y),
        PathCommand::arc_to(radius_x, radius_y, 0.0, true, true, center_x - radius_x, center_y),
    ]
}

///
/// Generates the path for a circle centered at `(center_x, center_y)`
///
#[inline]
pub fn circle_path(center_x: f64, center_y: f64, radius: f64) -> Vec<PathCommand> {
    ellipse_path(center_x, center_y, radius, radius)
}
