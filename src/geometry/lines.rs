//! Utility functions on whole polylines.

use crate::core::{Line, Point, PointOfInterest};

use super::sector::Sector;
use super::segment::{Segment, Side};

const UP: Point = Point { x: 0.0, y: 1.0 };

/// Axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Split a line into sub-lines at the x coordinates of the given points.
///
/// Adjacent sub-lines share the split point. Splitting 1--2--A--3--B--4
/// on A and B gives 1--2--A, A--3--B and B--4.
pub fn split_on_points(line: &Line, split_points: &[PointOfInterest]) -> Vec<Line> {
    let mut lines = Vec::with_capacity(split_points.len() + 1);
    let mut remainder = line.clone();
    for point in split_points {
        let x = point.x();
        let left = left_of_x(x).clip(&remainder);
        remainder = right_of_x(x).clip(&remainder);
        lines.push(left);
    }
    lines.push(remainder);
    lines
}

/// The signed size of a line's bounding box.
///
/// Width and height carry the sign of the line's direction of travel: a
/// component is positive when the line starts on the low side of the
/// bounding box centre along that axis.
pub fn size_of(line: &Line) -> Point {
    if line.is_empty() {
        return Point::new(0.0, 0.0);
    }

    let bounds = bounding_rect(line);

    let centre_x = (bounds.right + bounds.left) / 2.0;
    let centre_y = (bounds.top + bounds.bottom) / 2.0;

    let diff_x = bounds.right - bounds.left;
    let diff_y = bounds.top - bounds.bottom;

    let start = line.points()[0];
    let x = if start.x < centre_x { diff_x } else { -diff_x };
    let y = if start.y < centre_y { diff_y } else { -diff_y };

    Point::new(x, y)
}

/// Do these lines have pairwise disjoint x spans?
///
/// True means the set of lines is single-valued in x, so a line can be
/// picked out unambiguously by position.
pub fn no_horizontal_overlap(lines: &[Line]) -> bool {
    let mut runs: Vec<(f64, f64)> = Vec::with_capacity(lines.len());
    for line in lines {
        let span = horizontal_span(line);
        for existing in &runs {
            if span.0 <= existing.1 && span.1 >= existing.0 {
                return false;
            }
        }
        runs.push(span);
    }
    true
}

/// All points where two polylines cross.
///
/// Recursive subdivision with bounding box pruning; duplicate points
/// (shared subdivision endpoints) are removed.
pub fn find_intersections(line_a: &Line, line_b: &Line) -> Vec<Point> {
    if line_a.len() < 2 || line_b.len() < 2 {
        return vec![];
    }
    let mut found = Vec::new();
    find_intersections_into(line_a, line_b, &mut found);
    found
}

fn find_intersections_into(line_a: &Line, line_b: &Line, found: &mut Vec<Point>) {
    if line_a.len() == 2 && line_b.len() == 2 {
        let a = line_to_segment(line_a);
        let b = line_to_segment(line_b);
        if let Some(param) = a.intersection_param(&b) {
            let point = b.at_parameter(param.t);
            if !found.contains(&point) {
                found.push(point);
            }
        }
        return;
    }

    for sub_a in split_in_half(line_a) {
        for sub_b in split_in_half(line_b) {
            if bounding_intersects(&sub_a, &sub_b) {
                find_intersections_into(&sub_a, &sub_b, found);
            }
        }
    }
}

/// The median point of a list, averaging the middle two when even.
pub fn centre_of_points(points: &[Point]) -> Point {
    if points.len() % 2 == 0 {
        let centre1 = points[points.len() / 2 - 1];
        let centre2 = points[points.len() / 2];
        (centre1 + centre2) * 0.5
    } else {
        points[points.len() / 2]
    }
}

/// The bounding rectangle of a line.
pub fn bounding_rect(line: &Line) -> Rect {
    let mut rect = Rect {
        left: f64::MAX,
        right: -f64::MAX,
        top: -f64::MAX,
        bottom: f64::MAX,
    };
    for p in line.points() {
        rect.left = rect.left.min(p.x);
        rect.right = rect.right.max(p.x);
        rect.top = rect.top.max(p.y);
        rect.bottom = rect.bottom.min(p.y);
    }
    rect
}

fn left_of_x(x: f64) -> Sector {
    Sector::new(
        format!("leftOfX={}", x),
        vec![Segment::open_both_ends(Point::new(x, 0.0), UP, Side::Left)],
    )
}

fn right_of_x(x: f64) -> Sector {
    Sector::new(
        format!("rightOfX={}", x),
        vec![Segment::open_both_ends(Point::new(x, 0.0), UP, Side::Right)],
    )
}

fn horizontal_span(line: &Line) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = -f64::MAX;
    for p in line.points() {
        min = min.min(p.x);
        max = max.max(p.x);
    }
    (min, max)
}

fn bounding_intersects(sub_a: &Line, sub_b: &Line) -> bool {
    let a = bounding_rect(sub_a);
    let b = bounding_rect(sub_b);
    a.left <= b.right && a.right >= b.left && a.top >= b.bottom && a.bottom <= b.top
}

/// Split in half at the midpoint, sharing it, dropping points of
/// interest. Two-point lines are returned unchanged.
fn split_in_half(line: &Line) -> Vec<Line> {
    let points = line.points();
    if points.len() == 2 {
        return vec![line.clone()];
    }
    let half = points.len() / 2;
    vec![
        Line::new(points[..=half].to_vec(), vec![]),
        Line::new(points[half..].to_vec(), vec![]),
    ]
}

fn line_to_segment(line: &Line) -> Segment {
    Segment::closed(line.points()[0], line.points()[1])
}
