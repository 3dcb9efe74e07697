//! The `slope:` clause: the steepness of a line at its start and end.
//!
//! The slope is measured over the bounding box of a handful of points at
//! the relevant end. An aspect ratio beyond the configured threshold
//! makes the line flat or steep; anything in between is just positive or
//! negative.

use crate::config::MarkerConfig;
use crate::core::Line;
use crate::geometry::size_of;

use super::error::SpecError;

/// Which end of the line a slope expectation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Start,
    End,
}

impl Position {
    const ALL: [Position; 2] = [Position::Start, Position::End];

    fn name(self) -> &'static str {
        match self {
            Position::Start => "start",
            Position::End => "end",
        }
    }

    fn from_name(name: &str) -> Option<Position> {
        match name {
            "start" => Some(Position::Start),
            "end" => Some(Position::End),
            _ => None,
        }
    }
}

/// The shape of a slope measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slope {
    /// Nearly vertical, going upwards.
    Up,
    /// Between up and flat.
    Positive,
    /// Nearly horizontal.
    Flat,
    /// Between flat and down.
    Negative,
    /// Nearly vertical, going downwards.
    Down,
}

impl Slope {
    fn name(self) -> &'static str {
        match self {
            Slope::Up => "up",
            Slope::Positive => "positive",
            Slope::Flat => "flat",
            Slope::Negative => "negative",
            Slope::Down => "down",
        }
    }

    fn from_name(name: &str) -> Option<Slope> {
        match name {
            "up" => Some(Slope::Up),
            "positive" => Some(Slope::Positive),
            "flat" => Some(Slope::Flat),
            "negative" => Some(Slope::Negative),
            "down" => Some(Slope::Down),
            _ => None,
        }
    }
}

/// Parsed `slope:` clause data.
#[derive(Clone, Debug)]
pub struct SlopeClause {
    expected: Vec<(Position, Slope)>,
}

impl SlopeClause {
    /// Parse a comma-separated list of `position=slope` expectations.
    pub fn parse(data: &str) -> Result<Self, SpecError> {
        let mut expected: Vec<(Position, Slope)> = Vec::new();
        for item in data.split(',') {
            let mut parts = item.split('=');
            let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(SpecError::malformed(
                    "slope",
                    format!("incorrect number of parts in: {}", item.trim()),
                ));
            };

            let position = Position::from_name(&left.trim().to_lowercase()).ok_or_else(|| {
                SpecError::malformed("slope", format!("unknown position: {}", left.trim()))
            })?;
            let slope = Slope::from_name(&right.trim().to_lowercase()).ok_or_else(|| {
                SpecError::malformed("slope", format!("unknown slope: {}", right.trim()))
            })?;

            if expected.iter().any(|&(p, _)| p == position) {
                return Err(SpecError::malformed(
                    "slope",
                    format!("duplicate position: {}", position.name()),
                ));
            }
            expected.push((position, slope));
        }
        Ok(SlopeClause { expected })
    }

    /// Does every expected end of this line have the expected slope?
    pub fn test(&self, line: &Line, config: &MarkerConfig) -> bool {
        self.expected
            .iter()
            .all(|&(position, slope)| slope_at(line, position, config) == slope)
    }

    /// Describe both ends of a line as clause data.
    pub fn generate(line: &Line, config: &MarkerConfig) -> String {
        Position::ALL
            .iter()
            .map(|&position| {
                format!("{}={}", position.name(), slope_at(line, position, config).name())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Measure the slope over a few points at one end of the line.
fn slope_at(line: &Line, position: Position, config: &MarkerConfig) -> Slope {
    let points = line.points();
    let desired = config.number_of_points_at_ends.min(points.len());
    let section = match position {
        Position::Start => &points[..desired],
        Position::End => &points[points.len() - desired..],
    };
    slope_of(&Line::new(section.to_vec(), vec![]), config)
}

fn slope_of(line: &Line, config: &MarkerConfig) -> Slope {
    let size = size_of(line);

    // Leftward travel would flip the sign, which is not what we are
    // measuring here.
    let width = size.x.abs();
    let height = size.y;

    let high_if_flat = width / height;
    if high_if_flat.abs() > config.slope_threshold {
        return Slope::Flat;
    }

    let high_if_steep = height / width;
    if high_if_steep > 0.0 {
        if high_if_steep.abs() > config.slope_threshold {
            Slope::Up
        } else {
            Slope::Positive
        }
    } else if high_if_steep.abs() > config.slope_threshold {
        Slope::Down
    } else {
        Slope::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    fn line_of(points: &[(f64, f64)]) -> Line {
        Line::new(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            vec![],
        )
    }

    fn sampled<F: Fn(f64) -> f64>(f: F, min_x: f64, max_x: f64) -> Line {
        let n = 100;
        let points = (0..n)
            .map(|i| {
                let x = min_x + (max_x - min_x) * i as f64 / (n - 1) as f64;
                Point::new(x, f(x))
            })
            .collect();
        Line::new(points, vec![])
    }

    #[test]
    fn test_slope_measurement() {
        let config = MarkerConfig::default();
        let cases = [
            (line_of(&[(0.0, 0.0), (10.0, 100.0)]), Slope::Up),
            (line_of(&[(10.0, 0.0), (15.0, -50.0)]), Slope::Down),
            (line_of(&[(0.0, 0.0), (100.0, -5.0)]), Slope::Flat),
            (line_of(&[(0.0, 0.0), (-100.0, -5.0)]), Slope::Flat),
            (line_of(&[(0.0, 0.0), (100.0, 100.0)]), Slope::Positive),
            (line_of(&[(0.0, 0.0), (100.0, -100.0)]), Slope::Negative),
        ];
        for (line, slope) in cases {
            assert_eq!(slope_of(&line, &config), slope);
        }
    }

    #[test]
    fn test_inverse_of_x() {
        let config = MarkerConfig::default();
        let start = SlopeClause::parse("start=down").unwrap();
        let end = SlopeClause::parse("end = flat").unwrap();

        let inverse = sampled(|x| 1.0 / x, 0.001, 15.0);
        assert!(start.test(&inverse, &config));
        assert!(end.test(&inverse, &config));

        let straight = sampled(|x| 16.0 - x, 0.001, 15.0);
        assert!(!start.test(&straight, &config));
        assert!(!end.test(&straight, &config));
    }

    #[test]
    fn test_both_ends_in_one_clause() {
        let config = MarkerConfig::default();
        let clause = SlopeClause::parse("start=down, end = flat").unwrap();
        assert!(clause.test(&sampled(|x| 1.0 / x, 0.001, 15.0), &config));
        assert!(!clause.test(&sampled(|x| 16.0 - x, 0.001, 15.0), &config));
    }

    #[test]
    fn test_generate_round_trips() {
        let config = MarkerConfig::default();
        let data = SlopeClause::generate(&sampled(|x| 1.0 / x, 0.01, 10.0), &config);
        assert_eq!(data, "start=down, end=flat");

        let clause = SlopeClause::parse(&data).unwrap();
        assert!(clause.test(&sampled(|x| 0.5 / x, 0.001, 10.0), &config));
    }

    #[test]
    fn test_vertical_line_is_down() {
        let config = MarkerConfig::default();
        let line = line_of(&[(1.0, 0.0), (1.0, -1.0), (1.0, -2.0), (1.0, -3.0), (1.0, -4.0)]);
        assert!(SlopeClause::generate(&line, &config).contains("down"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SlopeClause::parse("one=two=three").is_err());
        assert!(SlopeClause::parse("middle=flat").is_err());
        assert!(SlopeClause::parse("start=wibbly").is_err());
        assert!(SlopeClause::parse("start=up, start=down").is_err());
    }
}
