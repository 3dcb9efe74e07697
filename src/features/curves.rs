//! The `curves:` clause: how many lines the sketch must contain.

use crate::core::Input;

use super::error::SpecError;

/// Parsed `curves:` clause data.
#[derive(Clone, Copy, Debug)]
pub struct CurvesClause {
    count: usize,
}

impl CurvesClause {
    pub fn parse(data: &str) -> Result<Self, SpecError> {
        let count = data
            .trim()
            .parse()
            .map_err(|_| SpecError::malformed("curves", format!("not a number: {}", data.trim())))?;
        Ok(CurvesClause { count })
    }

    /// The implicit single-curve requirement added to specifications
    /// that never mention a specific line.
    pub fn one_curve_only() -> Self {
        CurvesClause { count: 1 }
    }

    pub fn test(&self, input: &Input) -> bool {
        input.lines().len() == self.count
    }

    /// Describe an input's curve count, or `None` for a single curve
    /// where the count goes without saying.
    pub fn generate(input: &Input) -> Option<String> {
        if input.lines().len() < 2 {
            None
        } else {
            Some(input.lines().len().to_string())
        }
    }
}
