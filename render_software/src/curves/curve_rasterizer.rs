use super::circle::*;
use super::binomial::*;

use crate::fill::*;
use crate::pixel::*;
use crate::render::*;

use flo_svg_path::*;

use std::convert::{TryFrom};

///
/// Evaluates the bezier curve with the specified control points at a position `t` (0-1) along it
///
/// Lines have 2 control points, quadratic curves 3 and cubic curves 4.
///
pub fn evaluate_curve(binomials: &BinomialTable, control_points: &[Point2D], t: f64) -> Point2D {
    let degree = control_points.len().saturating_sub(1);

    control_points.iter()
        .enumerate()
        .fold(Point2D::origin(), |point, (idx, control_point)| {
            let weight = (binomials.coefficient(degree, idx as isize) as f64) * (1.0-t).powi((degree - idx) as i32) * t.powi(idx as i32);

            point + (*control_point * weight)
        })
}

///
/// The number of steps to take along a curve, which is proportional to the area of its bounding box
///
/// Curves with no width or height are treated as being one pixel wide or high, so there's always at least one step.
/// The count saturates at `usize::MAX` for very large curves.
///
pub fn curve_sample_count(control_points: &[Point2D]) -> usize {
    if control_points.is_empty() {
        return 1;
    }

    let (min_x, min_y, max_x, max_y) = control_points.iter()
        .fold((f64::MAX, f64::MAX, f64::MIN, f64::MIN), |(min_x, min_y, max_x, max_y), point| {
            (min_x.min(point.x()), min_y.min(point.y()), max_x.max(point.x()), max_y.max(point.y()))
        });

    // Float to integer casts saturate, and NaN becomes 0
    let width   = ((max_x - min_x).round() as usize).max(1);
    let height  = ((max_y - min_y).round() as usize).max(1);

    width.saturating_mul(height)
}

///
/// The most samples worth taking along a single curve on a surface of the specified size
///
/// This is the number of pixels in the surface grown by the stroke radius on every side: any stamp outside this
/// area paints nothing and only marks a border pixel clamped to the edge. Curves whose bounding box is larger than
/// this are sampled more sparsely.
///
pub fn curve_sample_limit(surface_width: usize, surface_height: usize, stroke_radius: usize) -> usize {
    let margin  = stroke_radius.saturating_mul(2).saturating_add(1);
    let width   = surface_width.saturating_add(margin);
    let height  = surface_height.saturating_add(margin);

    width.saturating_mul(height)
}

///
/// Draws the strokes of path primitives on to a surface, recording where they were drawn in a border mask
///
/// The stroke is made by stamping circles of every radius from 0 up to (but not including) the stroke radius at
/// evenly spaced points along each curve. The point at the center of each stamp is always recorded in the border
/// mask, moved on to the surface if it's outside, so shapes with no visible stroke can still be filled.
///
pub struct CurveRasterizer<'a, TSurface>
where
    TSurface: RasterSurface,
{
    surface:        &'a mut TSurface,
    border:         &'a mut BorderMask,
    binomials:      &'a BinomialTable,
    stroke:         Option<U8RgbaPixel>,
    stroke_radius:  usize,
    num_primitives: usize,
}

impl<'a, TSurface> CurveRasterizer<'a, TSurface>
where
    TSurface: RasterSurface,
{
    ///
    /// Creates a rasterizer that draws on a surface with a particular stroke
    ///
    /// The stroke is not drawn if its colour is `None`, but the border mask is still updated.
    ///
    pub fn new(surface: &'a mut TSurface, border: &'a mut BorderMask, stroke: Option<U8RgbaPixel>, stroke_radius: usize) -> CurveRasterizer<'a, TSurface> {
        CurveRasterizer {
            surface:        surface,
            border:         border,
            binomials:      BinomialTable::for_curves(),
            stroke:         stroke,
            stroke_radius:  stroke_radius,
            num_primitives: 0,
        }
    }

    ///
    /// The number of primitives that have been drawn by this rasterizer
    ///
    #[inline]
    pub fn num_primitives(&self) -> usize {
        self.num_primitives
    }

    ///
    /// Stamps the stroke at a single point
    ///
    fn stamp(&mut self, x: i64, y: i64) {
        // Stamps too far from the surface can't paint anything (and would overflow when offset by the radius)
        let reach = i64::try_from(self.stroke_radius).unwrap_or(i64::MAX);
        let max_x = (self.surface.width() as i64).saturating_add(reach);
        let max_y = (self.surface.height() as i64).saturating_add(reach);

        if x < -reach || y < -reach || x > max_x || y > max_y {
            self.border.mark_clamped(x, y);
            return;
        }

        for radius in 0..reach {
            for (pos_x, pos_y) in circle_outline(x, y, radius) {
                if pos_x < 0 || pos_y < 0 {
                    continue;
                }

                let (pos_x, pos_y) = (pos_x as usize, pos_y as usize);
                if pos_x >= self.surface.width() || pos_y >= self.surface.height() {
                    continue;
                }

                if let Some(stroke) = self.stroke {
                    self.surface.blend_pixel(pos_x, pos_y, stroke);
                    self.border.mark(pos_x as i64, pos_y as i64);
                }
            }
        }

        self.border.mark_clamped(x, y);
    }

    ///
    /// Draws the bezier curve (or line) described by a set of control points
    ///
    pub fn draw_curve(&mut self, control_points: &[Point2D]) {
        let limit       = curve_sample_limit(self.surface.width(), self.surface.height(), self.stroke_radius);
        let num_samples = curve_sample_count(control_points).min(limit);

        for sample in 0..=num_samples {
            let t       = (sample as f64) / (num_samples as f64);
            let point   = evaluate_curve(self.binomials, control_points, t);

            self.stamp(point.x().round() as i64, point.y().round() as i64);
        }
    }
}

impl<'a, TSurface> PrimitiveTarget for CurveRasterizer<'a, TSurface>
where
    TSurface: RasterSurface,
{
    fn draw_primitive(&mut self, primitive: &PathPrimitive) {
        self.num_primitives += 1;
        self.draw_curve(&primitive.control_points());
    }
}
