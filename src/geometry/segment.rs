//! Directed line segments, half-lines and full lines.
//!
//! A [`Segment`] is the basic building block of sector regions. It can be:
//! - closed: both endpoints bound the segment,
//! - open at one end: a half-line from `start` through `end`,
//! - open at both ends: a full line through `start` and `end`.
//!
//! Open segments carry a [`Side`] marking which half-plane counts as
//! inside. All tests resolve ties (points exactly on the segment) as
//! inside, so sector boundaries belong to both neighbouring sectors.

use crate::core::{Line, Point, PointOfInterest};

/// Which side of a directed segment counts as inside.
///
/// Left is the anti-clockwise side when looking from `start` towards
/// `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The anti-clockwise side
    Left,
    /// The clockwise side
    Right,
}

/// Where another segment crosses this one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionParam {
    /// Parameter along the crossing segment, 0 at its start, 1 at its end
    pub t: f64,
    /// Whether the crossing segment points into this segment's inside
    pub inside: bool,
}

/// A directed segment with an optional inside half-plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    side: Option<Side>,
    open_both_ends: bool,
}

impl Segment {
    /// A closed segment between two points
    pub fn closed(start: Point, end: Point) -> Self {
        Segment {
            start,
            end,
            side: None,
            open_both_ends: false,
        }
    }

    /// A half-line from `origin` in `direction`, with the given inside side
    pub fn open_one_end(origin: Point, direction: Point, side: Side) -> Self {
        Segment {
            start: origin,
            end: origin + direction,
            side: Some(side),
            open_both_ends: false,
        }
    }

    /// A half-line from `origin` in `direction`, with the side containing
    /// `origin + inside` marked as inside
    pub fn open_one_end_towards(origin: Point, direction: Point, inside: Point) -> Self {
        let mut segment = Segment {
            start: origin,
            end: origin + direction,
            side: Some(Side::Left),
            open_both_ends: false,
        };
        if !segment.inside(origin + inside) {
            segment.side = Some(Side::Right);
        }
        segment
    }

    /// A full line through `origin` in `direction`, with the given inside side
    pub fn open_both_ends(origin: Point, direction: Point, side: Side) -> Self {
        Segment {
            start: origin,
            end: origin + direction,
            side: Some(side),
            open_both_ends: true,
        }
    }

    /// Start point of this segment
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point of this segment
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Is this point on the inside of this segment?
    ///
    /// Inside means on the marked side (anti-clockwise for closed
    /// segments) and within the region bounded by the perpendiculars at
    /// whichever ends are closed. Points exactly on a boundary count as
    /// inside.
    pub fn inside(&self, p: Point) -> bool {
        let end_prime = self.end - self.start;
        let p_prime = p - self.start;
        if !self.is_on_inside(end_prime, p_prime) {
            return false;
        }

        // Project onto the segment direction and check the parameter range
        let t = p_prime.dot(&end_prime) / end_prime.length_squared();
        (self.open_both_ends || t >= 0.0) && (self.side.is_some() || t <= 1.0)
    }

    /// Side test relative to `start`; `end_prime` and `p_prime` have had
    /// `start` subtracted already.
    fn is_on_inside(&self, end_prime: Point, p_prime: Point) -> bool {
        let cross = end_prime.cross(&p_prime);
        match self.side {
            None | Some(Side::Left) => cross >= 0.0,
            Some(Side::Right) => cross <= 0.0,
        }
    }

    /// Where does `other` cross this segment?
    ///
    /// Returns the parameter along `other`, or `None` when the segments
    /// are parallel or the crossing falls outside either segment's valid
    /// parameter range.
    pub fn intersection_param(&self, other: &Segment) -> Option<IntersectionParam> {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let (x3, y3) = (other.start.x, other.start.y);
        let (x4, y4) = (other.end.x, other.end.y);

        let det = (x4 - x3) * (y1 - y2) - (x1 - x2) * (y4 - y3);
        if det == 0.0 {
            // Parallel
            return None;
        }

        let t = ((y3 - y4) * (x1 - x3) + (x4 - x3) * (y1 - y3)) / det;
        if (!self.open_both_ends && t < 0.0) || (self.side.is_none() && t > 1.0) {
            return None;
        }

        let u = ((y1 - y2) * (x1 - x3) + (x2 - x1) * (y1 - y3)) / det;
        if (!other.open_both_ends && u < 0.0) || (other.side.is_none() && u > 1.0) {
            return None;
        }

        let inside = self.is_on_inside(self.end - self.start, other.end - self.start);
        Some(IntersectionParam { t: u, inside })
    }

    /// Does `other` cross this segment at all?
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection_param(other).is_some()
    }

    /// The point at parameter `t` on this segment
    pub fn at_parameter(&self, t: f64) -> Point {
        Point::new(
            self.start.x * (1.0 - t) + self.end.x * t,
            self.start.y * (1.0 - t) + self.end.y * t,
        )
    }

    /// Clip a polyline to the inside of this segment.
    ///
    /// Discontinuities are joined with straight lines, so clipping a sine
    /// wave against the x-axis gives a half-rectified wave. Points of
    /// interest outside the region are dropped.
    pub fn clip_line(&self, line: &Line) -> Line {
        let mut points: Vec<Point> = Vec::new();
        let mut last_point: Option<Point> = None;
        for &point in line.points() {
            if let Some(last) = last_point {
                let line_segment = Segment::closed(last, point);
                if let Some(clipped) = self.clip_segment(&line_segment) {
                    if points.last() != Some(&clipped.start) {
                        points.push(clipped.start);
                    }
                    if points.last() != Some(&clipped.end) {
                        points.push(clipped.end);
                    }
                }
            }
            last_point = Some(point);
        }

        let points_of_interest: Vec<PointOfInterest> = line
            .points_of_interest()
            .iter()
            .filter(|poi| self.inside(poi.point))
            .copied()
            .collect();

        Line::new(points, points_of_interest)
    }

    /// Clip a segment to the inside of this segment, or `None` when it is
    /// fully outside.
    fn clip_segment(&self, segment: &Segment) -> Option<Segment> {
        let param = match self.intersection_param(segment) {
            Some(param) => param,
            None => {
                return if self.inside(segment.start) {
                    Some(*segment)
                } else {
                    None
                };
            }
        };

        let p = segment.at_parameter(param.t);

        if param.inside {
            if self.inside(segment.start) {
                // Both ends inside, nothing to clip
                Some(*segment)
            } else {
                Some(Segment::closed(p, segment.end))
            }
        } else {
            Some(Segment::closed(segment.start, p))
        }
    }
}
