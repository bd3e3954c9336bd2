use serde::{Deserialize, Serialize};

/// A 2-D point in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn div_scalar(&self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add_sub() {
        let a = Point::new(5.0, 7.0);
        let b = Point::new(2.0, 3.0);
        assert_eq!(a.add(&b), Point::new(7.0, 10.0));
        assert_eq!(a.sub(&b), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_point_div_scalar() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.div_scalar(2.0), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Point::ZERO, Point::default());
    }
}
