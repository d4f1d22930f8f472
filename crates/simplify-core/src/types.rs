// File: crates/simplify-core/src/types.rs
// Summary: Shared value types (2-D sample point).

/// A single sample of a series. `x` is usually a timestamp-like value,
/// `y` the sampled value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }

    pub const fn to_xy(self) -> (f64, f64) { (self.x, self.y) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self { (p.x, p.y) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversions() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
        let t: (f64, f64) = p.into();
        assert_eq!(t, (1.5, -2.0));
        assert_eq!(p.to_xy(), t);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(0.0, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }
}
