//! Point types for sketched curves.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point in axis coordinates.
///
/// Inputs are usually normalised to roughly [-1, 1] by the capture layer,
/// but nothing here depends on that.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of the 3D cross product)
    #[inline]
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of this point as a vector from the origin
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

/// Kind of a point of interest on a curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    /// A local maximum
    Maxima,
    /// A local minimum
    Minima,
    /// A synthesized centre point used by symmetry analysis.
    /// Never present on input curves.
    VirtualCentre,
}

impl PointType {
    /// Lower-case name as it appears in feature specifications
    pub fn name(&self) -> &'static str {
        match self {
            PointType::Maxima => "maxima",
            PointType::Minima => "minima",
            PointType::VirtualCentre => "virtual centre",
        }
    }

    /// Parse a point type name from a specification
    pub fn from_name(name: &str) -> Option<PointType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "maxima" => Some(PointType::Maxima),
            "minima" => Some(PointType::Minima),
            _ => None,
        }
    }
}

/// A significant point on a curve, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Location of the point
    pub point: Point,
    /// What kind of point this is
    pub point_type: PointType,
}

impl PointOfInterest {
    /// Create a new point of interest
    #[inline]
    pub fn new(point: Point, point_type: PointType) -> Self {
        Self { point, point_type }
    }

    /// X coordinate of the underlying point
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Y coordinate of the underlying point
    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(b - a, Point::new(2.0, -3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
    }

    #[test]
    fn test_cross_sign() {
        let right = Point::new(1.0, 0.0);
        let up = Point::new(0.0, 1.0);
        assert_relative_eq!(right.cross(&up), 1.0);
        assert_relative_eq!(up.cross(&right), -1.0);
    }

    #[test]
    fn test_point_type_names() {
        assert_eq!(PointType::from_name("maxima"), Some(PointType::Maxima));
        assert_eq!(PointType::from_name(" MINIMA "), Some(PointType::Minima));
        assert_eq!(PointType::from_name("saddle"), None);
        assert_eq!(PointType::Maxima.name(), "maxima");
    }
}
