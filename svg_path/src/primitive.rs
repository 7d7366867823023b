use super::point::*;

use smallvec::*;

///
/// A drawable section of a path, in the coordinates of the surface it's being drawn on
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathPrimitive {
    /// Straight line between two points
    Line(Point2D, Point2D),

    /// Quadratic bezier curve (start, control point, end)
    Quadratic(Point2D, Point2D, Point2D),

    /// Cubic bezier curve (start, control point 1, control point 2, end)
    Cubic(Point2D, Point2D, Point2D, Point2D),
}

impl PathPrimitive {
    ///
    /// The control points of this primitive, from the start point to the end point (2 for lines, 3 for quadratic curves and 4 for cubic curves)
    ///
    pub fn control_points(&self) -> SmallVec<[Point2D; 4]> {
        match self {
            PathPrimitive::Line(p0, p1)             => smallvec![*p0, *p1],
            PathPrimitive::Quadratic(p0, c, p1)     => smallvec![*p0, *c, *p1],
            PathPrimitive::Cubic(p0, c1, c2, p1)    => smallvec![*p0, *c1, *c2, *p1],
        }
    }

    #[inline]
    pub fn start_point(&self) -> Point2D {
        match self {
            PathPrimitive::Line(p0, _)          => *p0,
            PathPrimitive::Quadratic(p0, _, _)  => *p0,
            PathPrimitive::Cubic(p0, _, _, _)   => *p0,
        }
    }

    #[inline]
    pub fn end_point(&self) -> Point2D {
        match self {
            PathPrimitive::Line(_, p1)          => *p1,
            PathPrimitive::Quadratic(_, _, p1)  => *p1,
            PathPrimitive::Cubic(_, _, _, p1)   => *p1,
        }
    }

    ///
    /// Maps every control point of this primitive through a transform
    ///
    /// Bezier curves are preserved by this kind of transformation, so this is the same as transforming every point on the curve
    ///
    pub fn transform(&self, transform: &PathTransform) -> PathPrimitive {
        let t = |point: &Point2D| transform.apply(*point);

        match self {
            PathPrimitive::Line(p0, p1)             => PathPrimitive::Line(t(p0), t(p1)),
            PathPrimitive::Quadratic(p0, c, p1)     => PathPrimitive::Quadratic(t(p0), t(c), t(p1)),
            PathPrimitive::Cubic(p0, c1, c2, p1)    => PathPrimitive::Cubic(t(p0), t(c1), t(c2), t(p1)),
        }
    }
}

///
/// Maps the coordinates used in a path (the user space of the document) onto the pixels of a surface
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathTransform {
    pub scale_x:    f64,
    pub scale_y:    f64,
    pub offset_x:   f64,
    pub offset_y:   f64,
}

impl Default for PathTransform {
    fn default() -> PathTransform {
        PathTransform::identity()
    }
}

impl PathTransform {
    ///
    /// A transform that leaves path coordinates unchanged
    ///
    pub fn identity() -> PathTransform {
        PathTransform { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }

    ///
    /// Creates a transform that maps the rectangle `(min_x, min_y)-(min_x+width, min_y+height)` onto a surface of a particular size
    ///
    pub fn from_view_box(min_x: f64, min_y: f64, width: f64, height: f64, surface_width: usize, surface_height: usize) -> PathTransform {
        PathTransform {
            scale_x:    (surface_width as f64) / width,
            scale_y:    (surface_height as f64) / height,
            offset_x:   min_x,
            offset_y:   min_y,
        }
    }

    ///
    /// Maps a point in path coordinates to a point on the surface
    ///
    #[inline]
    pub fn apply(&self, point: Point2D) -> Point2D {
        Point2D((point.0 - self.offset_x) * self.scale_x, (point.1 - self.offset_y) * self.scale_y)
    }

    ///
    /// The amount that lengths that have no direction (stroke widths) are scaled by
    ///
    /// This is the geometric mean of the horizontal and vertical scale factors, so the area covered by a
    /// stroke scales in proportion to the area of the surface
    ///
    #[inline]
    pub fn length_scale(&self) -> f64 {
        (self.scale_x * self.scale_y).abs().sqrt()
    }
}

///
/// Trait implemented by things that can draw the primitives generated by a path
///
pub trait PrimitiveTarget {
    ///
    /// Draws a primitive (coordinates are in surface space)
    ///
    fn draw_primitive(&mut self, primitive: &PathPrimitive);
}

impl PrimitiveTarget for Vec<PathPrimitive> {
    #[inline]
    fn draw_primitive(&mut self, primitive: &PathPrimitive) {
        self.push(*primitive);
    }
}

impl<'a, TTarget> PrimitiveTarget for &'a mut TTarget
where
    TTarget: PrimitiveTarget,
{
    #[inline]
    fn draw_primitive(&mut self, primitive: &PathPrimitive) {
        (**self).draw_primitive(primitive)
    }
}
