//! Sector regions of the graph plane.
//!
//! A [`Sector`] is a region such as "above the x axis" or "the top right
//! quadrant", defined as the intersection of the inside half-planes of a
//! list of [`Segment`]s. An empty segment list means the whole plane.

use crate::core::{Line, Point};

use super::segment::{IntersectionParam, Segment};

/// How a whole line relates to a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intersection {
    /// Every point of the line is inside and no edge crosses the boundary
    Inside,
    /// Some of the line is inside, or it crosses the boundary
    Intersects,
    /// The line is entirely outside
    Outside,
}

/// A named region bounded by segments.
#[derive(Clone, Debug)]
pub struct Sector {
    name: String,
    segments: Vec<Segment>,
}

impl Sector {
    pub(crate) fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Sector {
            name: name.into(),
            segments,
        }
    }

    /// Name of this sector as used in feature specifications
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Does this sector contain the point? Boundaries count as inside.
    pub fn contains(&self, p: Point) -> bool {
        self.segments.iter().all(|segment| segment.inside(p))
    }

    /// Does the segment cross this sector's boundary?
    fn boundary_crosses(&self, s: &Segment) -> bool {
        self.segments.iter().any(|segment| segment.intersects(s))
    }

    /// Classify a whole line against this sector.
    pub fn intersects(&self, line: &Line) -> Intersection {
        let mut all_inside = true;
        let mut some_inside = false;
        let mut any_intersections = false;
        let mut last_point: Option<Point> = None;
        for &point in line.points() {
            if self.contains(point) {
                some_inside = true;
            } else {
                all_inside = false;
            }
            if let Some(last) = last_point {
                any_intersections |= self.boundary_crosses(&Segment::closed(last, point));
            }
            last_point = Some(point);
        }
        if all_inside && !any_intersections {
            Intersection::Inside
        } else if some_inside || any_intersections {
            Intersection::Intersects
        } else {
            Intersection::Outside
        }
    }

    /// Parameters along `line_segment` of every crossing of this sector's
    /// boundary, sorted and deduplicated.
    pub fn intersection_params(&self, line_segment: &Segment) -> Vec<IntersectionParam> {
        let mut params: Vec<IntersectionParam> = self
            .segments
            .iter()
            .filter_map(|segment| segment.intersection_param(line_segment))
            .collect();
        params.sort_by(|a, b| a.t.total_cmp(&b.t));
        params.dedup();
        params
    }

    /// Clip a line to the part inside this sector, joining discontinuities
    /// with straight lines.
    pub fn clip(&self, line: &Line) -> Line {
        let mut result = line.clone();
        for segment in &self.segments {
            result = segment.clip_line(&result);
        }
        result
    }
}
