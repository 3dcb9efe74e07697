//! The `intersects:` clause: where two named lines must cross.
//!
//! The clause names two lines and either the ordered list of sectors
//! their crossings fall in, or `nowhere`. Names bind through the
//! [`Context`](super::Context), so `A to B at origin` holds if any
//! assignment of lines to A and B crosses at the origin.

use log::debug;

use crate::core::Input;
use crate::geometry::{find_intersections, SectorId, SectorRegistry};

use super::context::Context;
use super::error::SpecError;

/// Parsed `intersects:` clause data.
#[derive(Clone, Debug)]
pub struct IntersectsClause {
    line_a: String,
    line_b: String,
    sectors: Vec<SectorId>,
}

impl IntersectsClause {
    /// Parse `name to name (at|in|on <sectors> | nowhere)`.
    pub fn parse(data: &str, registry: &SectorRegistry) -> Result<Self, SpecError> {
        let malformed = || {
            SpecError::malformed("intersects", format!("not an intersection: {}", data.trim()))
        };

        let (line_a, rest) = take_name(data.trim()).ok_or_else(malformed)?;
        let (keyword, rest) = take_name(rest).ok_or_else(malformed)?;
        if keyword != "to" {
            return Err(malformed());
        }
        let (line_b, rest) = take_name(rest).ok_or_else(malformed)?;

        let sectors = if rest.trim_end() == "nowhere" {
            vec![]
        } else {
            let list = ["at", "in", "on"]
                .iter()
                .find_map(|p| rest.strip_prefix(p))
                .ok_or_else(malformed)?;
            registry.from_list(list, false)?
        };

        Ok(IntersectsClause {
            line_a: line_a.to_string(),
            line_b: line_b.to_string(),
            sectors,
        })
    }

    /// Narrow the context to assignments under which the two named
    /// lines cross in exactly the expected sectors.
    pub fn test(
        &self,
        input: &Input,
        context: &Context,
        registry: &SectorRegistry,
    ) -> Option<Context> {
        context.make_new_context(
            |assignment| {
                let line_a = &input.lines()[assignment[&self.line_a]];
                let line_b = &input.lines()[assignment[&self.line_b]];
                intersection_sectors(line_a, line_b, registry) == self.sectors
            },
            &[&self.line_a, &self.line_b],
        )
    }

    /// Describe every pair of lines in an input, under standard names.
    pub fn generate(input: &Input, registry: &SectorRegistry) -> Vec<String> {
        let lines = input.lines();
        let mut output = Vec::new();
        for i in 0..lines.len() {
            for j in i + 1..lines.len() {
                let sectors = intersection_sectors(&lines[i], &lines[j], registry);
                output.push(serialize(
                    &Context::standard_line_name(i),
                    &Context::standard_line_name(j),
                    &sectors,
                    registry,
                ));
            }
        }
        output
    }
}

fn serialize(line_a: &str, line_b: &str, sectors: &[SectorId], registry: &SectorRegistry) -> String {
    if sectors.is_empty() {
        format!("{} to {} nowhere", line_a, line_b)
    } else {
        let names: Vec<&str> = sectors.iter().map(|&id| registry.name(id)).collect();
        format!("{} to {} at {}", line_a, line_b, names.join(", "))
    }
}

/// The sectors where two lines cross, in discovery order.
fn intersection_sectors(
    line_a: &crate::core::Line,
    line_b: &crate::core::Line,
    registry: &SectorRegistry,
) -> Vec<SectorId> {
    find_intersections(line_a, line_b)
        .into_iter()
        .filter_map(|point| {
            let sector = registry.classify(point);
            if sector.is_none() {
                debug!("intersection {:?} is outside every sector", point);
            }
            sector
        })
        .collect()
}

/// Take a leading alphabetic name off the front of a string.
fn take_name(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some((&s[..end], s[end..].trim_start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerConfig;
    use crate::core::{Line, Point};

    fn registry() -> SectorRegistry {
        SectorRegistry::new(&MarkerConfig::default()).unwrap()
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

    fn crossing_input() -> Input {
        Input::new(vec![
            sampled(|x| x, -5.0, 5.0),
            sampled(|x| -x, -5.0, 5.0),
        ])
    }

    #[test]
    fn test_crossing_at_origin() {
        let registry = registry();
        let input = crossing_input();
        let clause = IntersectsClause::parse("a to b at origin", &registry).unwrap();
        let narrowed = clause.test(&input, &Context::new(&input), &registry);
        // Both orders of (a, b) work.
        assert_eq!(narrowed.unwrap().assignments().len(), 2);
    }

    #[test]
    fn test_nowhere() {
        let registry = registry();
        let input = Input::new(vec![
            sampled(|x| x, 0.1, 5.0),
            sampled(|x| x + 3.0, 0.1, 5.0),
        ]);
        let clause = IntersectsClause::parse("a to b nowhere", &registry).unwrap();
        assert!(clause.test(&input, &Context::new(&input), &registry).is_some());

        let crossing = crossing_input();
        assert!(clause.test(&crossing, &Context::new(&crossing), &registry).is_none());
    }

    #[test]
    fn test_wrong_sector_fails() {
        let registry = registry();
        let input = crossing_input();
        let clause = IntersectsClause::parse("a to b at topRight", &registry).unwrap();
        assert!(clause.test(&input, &Context::new(&input), &registry).is_none());
    }

    #[test]
    fn test_names_narrow_consistently() {
        let registry = registry();
        // y = x crosses both others; the others never cross.
        let input = Input::new(vec![
            sampled(|x| x, -5.0, 5.0),
            sampled(|x| -x, -5.0, 5.0),
            sampled(|x| -x + 4.0, -5.0, 5.0),
        ]);
        let context = Context::new(&input);
        let first = IntersectsClause::parse("p to q at origin", &registry).unwrap();
        let narrowed = first.test(&input, &context, &registry).unwrap();
        let second = IntersectsClause::parse("q to r nowhere", &registry).unwrap();
        let narrowed = second.test(&input, &narrowed, &registry).unwrap();
        // p must be y = x, q must be y = -x, r the remaining line.
        assert_eq!(narrowed.assignments().len(), 1);
        assert_eq!(narrowed.assignments()[0]["p"], 0);
        assert_eq!(narrowed.assignments()[0]["q"], 1);
        assert_eq!(narrowed.assignments()[0]["r"], 2);
    }

    #[test]
    fn test_generate_all_pairs() {
        let registry = registry();
        let input = Input::new(vec![
            sampled(|x| x, -5.0, 5.0),
            sampled(|x| -x, -5.0, 5.0),
            sampled(|x| x - 100.0, -5.0, 5.0),
        ]);
        let generated = IntersectsClause::generate(&input, &registry);
        assert_eq!(
            generated,
            vec![
                "A to B at origin".to_string(),
                "A to C nowhere".to_string(),
                "B to C nowhere".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        let registry = registry();
        assert!(IntersectsClause::parse("a b at origin", &registry).is_err());
        assert!(IntersectsClause::parse("a to b somewhere", &registry).is_err());
        assert!(IntersectsClause::parse("1 to 2 nowhere", &registry).is_err());
        assert!(matches!(
            IntersectsClause::parse("a to b at wibble", &registry),
            Err(SpecError::UnknownSector(_))
        ));
    }
}
