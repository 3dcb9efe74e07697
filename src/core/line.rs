//! Curves and whole sketched answers.

use serde::{Deserialize, Serialize};

use super::point::{Point, PointOfInterest};

/// A single sketched curve: a polyline plus its points of interest.
///
/// Points of interest are expected in ascending x order and within the
/// x-span of the polyline. Lines are built once and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    points: Vec<Point>,
    points_of_interest: Vec<PointOfInterest>,
}

impl Line {
    /// Create a line from its sampled points and points of interest
    pub fn new(points: Vec<Point>, points_of_interest: Vec<PointOfInterest>) -> Self {
        Self {
            points,
            points_of_interest,
        }
    }

    /// The sampled polyline points
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The points of interest, in ascending x order
    #[inline]
    pub fn points_of_interest(&self) -> &[PointOfInterest] {
        &self.points_of_interest
    }

    /// Number of sampled points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the line has no sampled points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Locations of the points of interest, without their tags
    pub fn poi_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points_of_interest.iter().map(|poi| poi.point)
    }
}

/// A whole sketched answer: one or more curves, in the order drawn.
///
/// The capture layer orders lines left to right by their leading x
/// coordinate; the matcher takes that order as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Input {
    lines: Vec<Line>,
}

impl Input {
    /// Create an input from its curves
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Create an input holding a single curve
    pub fn of_line(line: Line) -> Self {
        Self { lines: vec![line] }
    }

    /// The curves of this input
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointType;

    #[test]
    fn test_line_accessors() {
        let line = Line::new(
            vec![Point::new(-1.0, 1.0), Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            vec![PointOfInterest::new(Point::new(0.0, 0.0), PointType::Minima)],
        );
        assert_eq!(line.len(), 3);
        assert!(!line.is_empty());
        assert_eq!(line.points_of_interest().len(), 1);
        assert_eq!(line.poi_points().next(), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_input_of_line() {
        let line = Line::new(vec![Point::new(0.0, 0.0)], vec![]);
        let input = Input::of_line(line);
        assert_eq!(input.lines().len(), 1);
    }
}
