//! Feature specifications: parsing, matching and generation.
//!
//! This module provides:
//! - [`Features`]: the entry point, wiring clauses to configuration
//! - [`Matcher`]: a compiled specification that tests inputs
//! - [`Context`]: name-to-line bindings threaded between clauses
//! - one module per clause kind (`through:`, `slope:`, `symmetry:`,
//!   `points:`, `has-points:`, `curves:`, `intersects:`)
//!
//! A specification is one clause per line. Line clauses carry an
//! optional selector (`line: 2;` or `match: A;`); without one (or with
//! an explicit `any:`) they match if any line does. A specification that never mentions a specific line
//! gets an implicit `curves: 1` so stray extra lines fail it.

mod context;
mod curves;
mod error;
mod intersections;
mod points;
mod sectors;
mod selectors;
mod slope;
mod symmetry;

pub use context::{Assignment, Context};
pub use curves::CurvesClause;
pub use error::SpecError;
pub use intersections::IntersectsClause;
pub use points::PointsClause;
pub use sectors::ThroughClause;
pub use selectors::Selector;
pub use slope::SlopeClause;
pub use symmetry::{SymmetryClause, SymmetryType};

use log::debug;

use crate::config::MarkerConfig;
use crate::core::{Input, Line};
use crate::geometry::{no_horizontal_overlap, SectorRegistry, UnknownSector};

/// The clause catalog: matches inputs against specifications and
/// generates specifications from exemplars.
pub struct Features {
    config: MarkerConfig,
    registry: SectorRegistry,
}

impl Features {
    /// Build the feature catalog for a configuration.
    pub fn new(config: MarkerConfig) -> Result<Self, UnknownSector> {
        let registry = SectorRegistry::new(&config)?;
        Ok(Features { config, registry })
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    pub fn registry(&self) -> &SectorRegistry {
        &self.registry
    }

    /// Compile a specification into a matcher.
    ///
    /// The specification is split into items on newlines; trailing empty
    /// lines are ignored, anything else unrecognised is an error.
    pub fn matcher(&self, spec: &str) -> Result<Matcher<'_>, SpecError> {
        let mut items: Vec<&str> = spec.split('\n').collect();
        while items.last() == Some(&"") {
            items.pop();
        }

        let mut clauses = items
            .iter()
            .map(|item| self.parse_item(item.trim()))
            .collect::<Result<Vec<Clause>, SpecError>>()?;

        if !clauses.iter().any(|clause| clause.line_aware) {
            clauses.push(Clause {
                tagged: "curves: 1 (implicitly)".to_string(),
                line_aware: false,
                kind: ClauseKind::Curves(CurvesClause::one_curve_only()),
            });
        }

        Ok(Matcher {
            features: self,
            clauses,
        })
    }

    /// Generate a specification matching this input.
    ///
    /// A single line gets bare line clauses. Multiple lines get `line:`
    /// selectors when their x spans are disjoint, since position then
    /// picks the line unambiguously, and `match:` selectors otherwise.
    pub fn generate(&self, input: &Input) -> String {
        let mut output: Vec<String> = Vec::new();
        let lines = input.lines();

        if lines.len() == 1 {
            output.extend(self.generate_line(&lines[0]));
        } else {
            let disjoint = no_horizontal_overlap(lines);
            for (i, line) in lines.iter().enumerate() {
                let selector = if disjoint {
                    Selector::Nth(i + 1)
                } else {
                    Selector::Named(Context::standard_line_name(i))
                };
                for item in self.generate_line(line) {
                    output.push(format!("{}{}", selector.tagged(), item));
                }
            }
        }

        if let Some(count) = CurvesClause::generate(input) {
            output.push(format!("curves: {}", count));
        }
        for item in IntersectsClause::generate(input, &self.registry) {
            output.push(format!("intersects: {}", item));
        }

        output.join("\n")
    }

    /// Every line clause matching this line, tagged.
    fn generate_line(&self, line: &Line) -> Vec<String> {
        let mut items = vec![
            ThroughClause::generate(line, &self.registry),
            SlopeClause::generate(line, &self.config),
            SymmetryClause::generate(line, &self.config, &self.registry).unwrap_or_default(),
            PointsClause::generate(line, true, &self.registry),
            PointsClause::generate(line, false, &self.registry),
        ];
        let tags = ["through", "slope", "symmetry", "points", "has-points"];
        items
            .drain(..)
            .zip(tags)
            .filter(|(item, _)| !item.is_empty())
            .map(|(item, tag)| format!("{}: {}", tag, item))
            .collect()
    }

    fn parse_item(&self, item: &str) -> Result<Clause, SpecError> {
        if let Some(data) = item.strip_prefix("curves:") {
            return Ok(Clause {
                tagged: tagged("curves", data),
                line_aware: true,
                kind: ClauseKind::Curves(CurvesClause::parse(data)?),
            });
        }
        if let Some(data) = item.strip_prefix("intersects:") {
            return Ok(Clause {
                tagged: tagged("intersects", data),
                line_aware: true,
                kind: ClauseKind::Intersects(IntersectsClause::parse(data, &self.registry)?),
            });
        }

        if let Some(data) = item.strip_prefix("line:") {
            let (selector, rest) = Selector::parse_nth(data)?;
            return self.selected_clause(selector, rest);
        }
        if let Some(data) = item.strip_prefix("match:") {
            let (selector, rest) = Selector::parse_named(data)?;
            return self.selected_clause(selector, rest);
        }
        if let Some(data) = item.strip_prefix("any:") {
            return self.selected_clause(Selector::Any, data.trim_start());
        }

        self.selected_clause(Selector::Any, item)
    }

    fn selected_clause(&self, selector: Selector, item: &str) -> Result<Clause, SpecError> {
        let (tag, clause) = self.parse_line_item(item)?;
        let data = item[tag.len() + 1..].trim();
        Ok(Clause {
            tagged: format!("{}{}: {}", selector.tagged(), tag, data),
            line_aware: selector != Selector::Any,
            kind: ClauseKind::Selected { selector, clause },
        })
    }

    fn parse_line_item(&self, item: &str) -> Result<(&'static str, LineClause), SpecError> {
        if let Some(data) = item.strip_prefix("through:") {
            let clause = ThroughClause::parse(data, &self.registry)?;
            return Ok(("through", LineClause::Through(clause)));
        }
        if let Some(data) = item.strip_prefix("slope:") {
            return Ok(("slope", LineClause::Slope(SlopeClause::parse(data)?)));
        }
        if let Some(data) = item.strip_prefix("symmetry:") {
            return Ok(("symmetry", LineClause::Symmetry(SymmetryClause::parse(data)?)));
        }
        if let Some(data) = item.strip_prefix("points:") {
            let clause = PointsClause::parse(data, true, &self.registry)?;
            return Ok(("points", LineClause::Points(clause)));
        }
        if let Some(data) = item.strip_prefix("has-points:") {
            let clause = PointsClause::parse(data, false, &self.registry)?;
            return Ok(("has-points", LineClause::Points(clause)));
        }
        Err(SpecError::UnknownClause(item.to_string()))
    }
}

fn tagged(tag: &str, data: &str) -> String {
    format!("{}: {}", tag, data.trim())
}

/// A compiled specification.
pub struct Matcher<'a> {
    features: &'a Features,
    clauses: Vec<Clause>,
}

impl Matcher<'_> {
    /// The clauses this input fails, as tagged specification items.
    /// Empty means the input matches.
    ///
    /// One context is threaded through all clauses, so name bindings
    /// accumulate; a failing clause leaves the context as it was.
    pub fn failing_specs(&self, input: &Input) -> Vec<String> {
        let mut failed = Vec::new();
        let mut context = Context::new(input);
        for clause in &self.clauses {
            match clause.test(input, &context, self.features) {
                Some(next) => context = next,
                None => failed.push(clause.tagged.clone()),
            }
        }
        failed
    }

    /// Does this input satisfy every clause?
    pub fn matches(&self, input: &Input) -> bool {
        let failing = self.failing_specs(input);
        if !failing.is_empty() {
            debug!("failed specs: {:?}", failing);
        }
        failing.is_empty()
    }
}

struct Clause {
    tagged: String,
    line_aware: bool,
    kind: ClauseKind,
}

enum ClauseKind {
    Curves(CurvesClause),
    Intersects(IntersectsClause),
    Selected {
        selector: Selector,
        clause: LineClause,
    },
}

enum LineClause {
    Through(ThroughClause),
    Slope(SlopeClause),
    Symmetry(SymmetryClause),
    Points(PointsClause),
}

impl Clause {
    fn test(&self, input: &Input, context: &Context, features: &Features) -> Option<Context> {
        match &self.kind {
            ClauseKind::Curves(clause) => {
                if clause.test(input) {
                    Some(context.clone())
                } else {
                    None
                }
            }
            ClauseKind::Intersects(clause) => clause.test(input, context, &features.registry),
            ClauseKind::Selected { selector, clause } => {
                selector.select(input, context, |line| clause.test(line, features))
            }
        }
    }
}

impl LineClause {
    fn test(&self, line: &Line, features: &Features) -> bool {
        match self {
            LineClause::Through(clause) => clause.test(line, &features.registry),
            LineClause::Slope(clause) => clause.test(line, &features.config),
            LineClause::Symmetry(clause) => {
                clause.test(line, &features.config, &features.registry)
            }
            LineClause::Points(clause) => clause.test(line, &features.registry),
        }
    }
}
