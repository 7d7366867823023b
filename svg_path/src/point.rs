use std::ops::*;

///
/// A 2D coordinate
///
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D(pub f64, pub f64);

impl Point2D {
    ///
    /// The origin point
    ///
    #[inline]
    pub fn origin() -> Point2D {
        Point2D(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Reflects the point `other` through this point (so the result is as far from this point as `other`, but in the opposite direction)
    ///
    /// This is how the implicit control point of the smooth curve commands is calculated
    ///
    #[inline]
    pub fn reflect(&self, other: Point2D) -> Point2D {
        Point2D(2.0*self.0 - other.0, 2.0*self.1 - other.1)
    }
}

impl Add<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: f64) -> Point2D {
        Point2D(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point2D {
        Point2D(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    #[inline]
    fn from(point: Point2D) -> (f64, f64) {
        (point.0, point.1)
    }
}
