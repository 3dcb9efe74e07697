//! The `points:` and `has-points:` clauses: expected turning points.
//!
//! Both expect points of interest of given types in given sectors.
//! `points:` requires an exact match in order along the line;
//! `has-points:` only requires each expectation to be met somewhere.

use log::debug;

use crate::core::{Line, PointOfInterest, PointType};
use crate::geometry::{names, SectorId, SectorRegistry};

use super::error::SpecError;

/// Parsed `points:` or `has-points:` clause data.
#[derive(Clone, Debug)]
pub struct PointsClause {
    expected: Vec<(PointType, SectorId)>,
    ordered: bool,
}

impl PointsClause {
    /// Parse a comma-separated list of `type (at|on|in) sector` items.
    /// Unordered clauses collapse duplicate items.
    pub fn parse(data: &str, ordered: bool, registry: &SectorRegistry) -> Result<Self, SpecError> {
        let tag = if ordered { "points" } else { "has-points" };
        let mut expected: Vec<(PointType, SectorId)> = Vec::new();
        for item in data.split(',') {
            let item = item.trim();
            let (type_part, sector_part) = split_point_item(item).ok_or_else(|| {
                SpecError::malformed(tag, format!("incorrect number of point parts in: {}", item))
            })?;

            let point_type = PointType::from_name(&type_part.trim().to_lowercase())
                .ok_or_else(|| {
                    SpecError::malformed(tag, format!("unknown point type: {}", type_part.trim()))
                })?;
            let sector = registry
                .by_name(sector_part.trim())
                .ok_or_else(|| SpecError::UnknownSector(sector_part.trim().to_string()))?;

            let pair = (point_type, sector);
            if ordered || !expected.contains(&pair) {
                expected.push(pair);
            }
        }
        Ok(PointsClause { expected, ordered })
    }

    pub fn test(&self, line: &Line, registry: &SectorRegistry) -> bool {
        let actual = line.points_of_interest();
        if self.ordered {
            actual.len() == self.expected.len()
                && self
                    .expected
                    .iter()
                    .zip(actual)
                    .all(|(&expected, point)| point_matches(expected, point, registry))
        } else {
            self.expected.iter().all(|&expected| {
                actual
                    .iter()
                    .any(|point| point_matches(expected, point, registry))
            })
        }
    }

    /// Describe a line's points of interest as clause data. Unordered
    /// clauses drop repeats.
    pub fn generate(line: &Line, ordered: bool, registry: &SectorRegistry) -> String {
        let mut pairs: Vec<(PointType, SectorId)> = Vec::new();
        for point in line.points_of_interest() {
            let Some(sector) = registry.classify(point.point) else {
                debug!("point of interest {:?} is outside every sector", point.point);
                continue;
            };
            let pair = (point.point_type, sector);
            if ordered || !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }

        pairs
            .iter()
            .map(|&(point_type, sector)| {
                let name = registry.name(sector);
                let preposition = if name == names::ORIGIN {
                    "at"
                } else if name.starts_with('+') || name.starts_with('-') {
                    "on"
                } else {
                    "in"
                };
                format!("{} {} {}", point_type.name(), preposition, name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn point_matches(
    expected: (PointType, SectorId),
    actual: &PointOfInterest,
    registry: &SectorRegistry,
) -> bool {
    let (point_type, sector) = expected;
    if point_type != actual.point_type {
        return false;
    }
    registry.by_name(names::ANY) == Some(sector)
        || registry.classify_all(actual.point).contains(sector)
}

/// Split a point item on its single preposition. More or fewer than one
/// preposition is a parse error.
fn split_point_item(item: &str) -> Option<(&str, &str)> {
    let mut split = None;
    let mut count = 0;
    for delimiter in [" at ", " on ", " in "] {
        for (position, _) in item.match_indices(delimiter) {
            count += 1;
            split = Some((position, delimiter.len()));
        }
    }
    let (position, len) = split?;
    if count != 1 {
        return None;
    }
    Some((&item[..position], &item[position + len..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerConfig;
    use crate::core::Point;

    fn registry() -> SectorRegistry {
        SectorRegistry::new(&MarkerConfig::default()).unwrap()
    }

    fn wave() -> Line {
        Line::new(
            vec![
                Point::new(-2.0, 0.0),
                Point::new(-1.0, 1.0),
                Point::new(0.0, 0.0),
                Point::new(1.0, -1.0),
                Point::new(2.0, 0.0),
            ],
            vec![
                PointOfInterest::new(Point::new(-1.0, 1.0), PointType::Maxima),
                PointOfInterest::new(Point::new(1.0, -1.0), PointType::Minima),
            ],
        )
    }

    #[test]
    fn test_ordered_match() {
        let registry = registry();
        let clause =
            PointsClause::parse("maxima in topLeft, minima in bottomRight", true, &registry)
                .unwrap();
        assert!(clause.test(&wave(), &registry));

        let wrong_order =
            PointsClause::parse("minima in bottomRight, maxima in topLeft", true, &registry)
                .unwrap();
        assert!(!wrong_order.test(&wave(), &registry));
    }

    #[test]
    fn test_ordered_requires_exact_count() {
        let registry = registry();
        let clause = PointsClause::parse("maxima in topLeft", true, &registry).unwrap();
        assert!(!clause.test(&wave(), &registry));
    }

    #[test]
    fn test_unordered_match() {
        let registry = registry();
        let clause =
            PointsClause::parse("minima in bottomRight, maxima in topLeft", false, &registry)
                .unwrap();
        assert!(clause.test(&wave(), &registry));

        // Extra points of interest are fine for has-points.
        let just_one = PointsClause::parse("maxima in topLeft", false, &registry).unwrap();
        assert!(just_one.test(&wave(), &registry));

        let missing = PointsClause::parse("minima in topLeft", false, &registry).unwrap();
        assert!(!missing.test(&wave(), &registry));
    }

    #[test]
    fn test_any_sector_matches_anywhere() {
        let registry = registry();
        let clause =
            PointsClause::parse("maxima in any, minima in any", true, &registry).unwrap();
        assert!(clause.test(&wave(), &registry));
    }

    #[test]
    fn test_generate() {
        let registry = registry();
        assert_eq!(
            PointsClause::generate(&wave(), true, &registry),
            "maxima in topLeft, minima in bottomRight"
        );
    }

    #[test]
    fn test_generate_prepositions() {
        let registry = registry();
        let line = Line::new(
            vec![Point::new(-1.0, -1.0), Point::new(0.0, 0.0), Point::new(1.0, -1.0)],
            vec![PointOfInterest::new(Point::new(0.0, 0.0), PointType::Maxima)],
        );
        assert_eq!(PointsClause::generate(&line, true, &registry), "maxima at origin");

        let on_axis = Line::new(
            vec![Point::new(2.0, 1.0), Point::new(3.0, 0.0), Point::new(4.0, 1.0)],
            vec![PointOfInterest::new(Point::new(3.0, 0.0), PointType::Minima)],
        );
        assert_eq!(PointsClause::generate(&on_axis, true, &registry), "minima on +Xaxis");
    }

    #[test]
    fn test_unordered_generate_dedupes() {
        let registry = registry();
        let line = Line::new(
            vec![],
            vec![
                PointOfInterest::new(Point::new(1.0, 1.0), PointType::Maxima),
                PointOfInterest::new(Point::new(2.0, 2.0), PointType::Maxima),
            ],
        );
        assert_eq!(
            PointsClause::generate(&line, false, &registry),
            "maxima in topRight"
        );
    }

    #[test]
    fn test_parse_errors() {
        let registry = registry();
        assert!(PointsClause::parse("maxima topLeft", true, &registry).is_err());
        assert!(PointsClause::parse("maxima in topLeft on x", true, &registry).is_err());
        assert!(PointsClause::parse("wibble in topLeft", true, &registry).is_err());
        assert!(matches!(
            PointsClause::parse("maxima in nowhere", true, &registry),
            Err(SpecError::UnknownSector(_))
        ));
    }
}
