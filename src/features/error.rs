//! Errors raised while parsing feature specifications.

use crate::geometry::UnknownSector;

/// A feature specification that could not be parsed.
///
/// Parse failure is distinct from non-match: a specification either
/// parses into a matcher or is rejected whole with one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A specification line whose tag is not recognised
    UnknownClause(String),
    /// A sector name that is not in the catalog
    UnknownSector(String),
    /// A recognised clause whose data does not parse
    Malformed {
        /// The clause tag
        tag: &'static str,
        /// What was wrong
        detail: String,
    },
}

impl SpecError {
    pub(crate) fn malformed(tag: &'static str, detail: impl Into<String>) -> Self {
        SpecError::Malformed {
            tag,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecError::UnknownClause(item) => write!(f, "Unknown feature: {}", item),
            SpecError::UnknownSector(name) => write!(f, "{} is not a valid sector", name),
            SpecError::Malformed { tag, detail } => {
                write!(f, "Malformed {} clause: {}", tag, detail)
            }
        }
    }
}

impl std::error::Error for SpecError {}

impl From<UnknownSector> for SpecError {
    fn from(err: UnknownSector) -> Self {
        SpecError::UnknownSector(err.0)
    }
}
