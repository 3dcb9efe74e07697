//! Line selectors: which line of the input a clause applies to.
//!
//! `line: 2; ...` picks the second line by drawing order. `match: A; ...`
//! binds a name Prolog-style through the [`Context`], so several clauses
//! can constrain the same unknown line. A clause with no selector matches
//! if any line does.

use crate::core::{Input, Line};

use super::context::Context;
use super::error::SpecError;

/// How a line clause picks its line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// No selector: any line may match.
    Any,
    /// A specific line, 1-based in drawing order.
    Nth(usize),
    /// A named line bound through the context.
    Named(String),
}

impl Selector {
    /// The selector prefix as it appears in a specification item.
    pub fn tagged(&self) -> String {
        match self {
            Selector::Any => String::new(),
            Selector::Nth(n) => format!("line: {}; ", n),
            Selector::Named(name) => format!("match: {}; ", name),
        }
    }

    /// Parse `<n>; <rest>` after a `line:` tag. The number is 1-based
    /// and must not have a leading zero.
    pub fn parse_nth(data: &str) -> Result<(Selector, &str), SpecError> {
        let data = data.trim_start();
        let digits = data
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(data.len());
        if digits == 0 || data.starts_with('0') {
            return Err(SpecError::malformed(
                "line",
                format!("not a line number: {}", data),
            ));
        }
        let n: usize = data[..digits]
            .parse()
            .map_err(|_| SpecError::malformed("line", format!("not a line number: {}", data)))?;
        let rest = data[digits..]
            .strip_prefix(';')
            .ok_or_else(|| SpecError::malformed("line", format!("missing ';' in: {}", data)))?;
        Ok((Selector::Nth(n), rest.trim_start()))
    }

    /// Parse `<name>; <rest>` after a `match:` tag.
    pub fn parse_named(data: &str) -> Result<(Selector, &str), SpecError> {
        let data = data.trim_start();
        let letters = data
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(data.len());
        if letters == 0 {
            return Err(SpecError::malformed(
                "match",
                format!("not a line name: {}", data),
            ));
        }
        let rest = data[letters..]
            .strip_prefix(';')
            .ok_or_else(|| SpecError::malformed("match", format!("missing ';' in: {}", data)))?;
        Ok((Selector::Named(data[..letters].to_string()), rest.trim_start()))
    }

    /// Apply a line test through this selector, narrowing the context
    /// where names are involved.
    pub fn select<F>(&self, input: &Input, context: &Context, test: F) -> Option<Context>
    where
        F: Fn(&Line) -> bool,
    {
        match self {
            Selector::Any => {
                if input.lines().iter().any(test) {
                    Some(context.clone())
                } else {
                    None
                }
            }
            Selector::Nth(n) => {
                let lines = input.lines();
                if *n > lines.len() {
                    return None;
                }
                if test(&lines[n - 1]) {
                    Some(context.clone())
                } else {
                    None
                }
            }
            Selector::Named(name) => context.make_new_context(
                |assignment| test(&input.lines()[assignment[name]]),
                &[name],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    fn input_of_heights(heights: &[f64]) -> Input {
        Input::new(
            heights
                .iter()
                .map(|&y| Line::new(vec![Point::new(0.0, y), Point::new(1.0, y)], vec![]))
                .collect(),
        )
    }

    #[test]
    fn test_parse_nth() {
        let (selector, rest) = Selector::parse_nth(" 2; through: topLeft").unwrap();
        assert_eq!(selector, Selector::Nth(2));
        assert_eq!(rest, "through: topLeft");

        assert!(Selector::parse_nth("0; x").is_err());
        assert!(Selector::parse_nth("two; x").is_err());
        assert!(Selector::parse_nth("2 x").is_err());
    }

    #[test]
    fn test_parse_named() {
        let (selector, rest) = Selector::parse_named("A; slope: end=flat").unwrap();
        assert_eq!(selector, Selector::Named("A".to_string()));
        assert_eq!(rest, "slope: end=flat");

        assert!(Selector::parse_named("1; x").is_err());
    }

    #[test]
    fn test_any_selects_any_line() {
        let input = input_of_heights(&[1.0, 2.0]);
        let context = Context::new(&input);
        assert!(Selector::Any
            .select(&input, &context, |line| line.points()[0].y == 2.0)
            .is_some());
        assert!(Selector::Any
            .select(&input, &context, |line| line.points()[0].y == 3.0)
            .is_none());
    }

    #[test]
    fn test_nth_selects_one_line() {
        let input = input_of_heights(&[1.0, 2.0]);
        let context = Context::new(&input);
        let second = Selector::Nth(2);
        assert!(second
            .select(&input, &context, |line| line.points()[0].y == 2.0)
            .is_some());
        assert!(second
            .select(&input, &context, |line| line.points()[0].y == 1.0)
            .is_none());
        // Out of range is a failure, not an error.
        assert!(Selector::Nth(3)
            .select(&input, &context, |_| true)
            .is_none());
    }

    #[test]
    fn test_named_narrows_context() {
        let input = input_of_heights(&[1.0, 2.0, 3.0]);
        let context = Context::new(&input);
        let selector = Selector::Named("A".to_string());
        let narrowed = selector
            .select(&input, &context, |line| line.points()[0].y > 1.0)
            .unwrap();
        assert_eq!(narrowed.assignments().len(), 2);

        let narrowed = selector
            .select(&input, &narrowed, |line| line.points()[0].y > 2.0)
            .unwrap();
        assert_eq!(narrowed.assignments().len(), 1);
        assert_eq!(narrowed.assignments()[0]["A"], 2);
    }
}
