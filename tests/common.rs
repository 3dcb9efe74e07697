//! Test utilities shared by the integration suites.
//!
//! Helpers here mimic how a sketching client would submit an answer:
//! curves are sampled as evenly spaced polylines and local extrema are
//! tagged as points of interest.

#![allow(dead_code)]

use sketch_mark::core::{Input, Line, Point, PointOfInterest, PointType};

/// Sample `f` at 100 evenly spaced x values and tag local extrema.
pub fn sampled<F: Fn(f64) -> f64>(f: F, min_x: f64, max_x: f64) -> Line {
    let n = 100;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let x = min_x + (max_x - min_x) * i as f64 / (n - 1) as f64;
            Point::new(x, f(x))
        })
        .collect();
    with_extrema(points)
}

/// Build a line from raw points, tagging strict local extrema as maxima/minima.
pub fn with_extrema(points: Vec<Point>) -> Line {
    let mut pois = Vec::new();
    for window in points.windows(3) {
        let (before, here, after) = (window[0], window[1], window[2]);
        if here.y > before.y && here.y > after.y {
            pois.push(PointOfInterest::new(here, PointType::Maxima));
        } else if here.y < before.y && here.y < after.y {
            pois.push(PointOfInterest::new(here, PointType::Minima));
        }
    }
    Line::new(points, pois)
}

/// Single-curve input.
pub fn input_of(line: Line) -> Input {
    Input::of_line(line)
}

/// Multi-curve input.
pub fn input_of_lines(lines: Vec<Line>) -> Input {
    Input::new(lines)
}
