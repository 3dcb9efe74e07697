//! Marker configuration.
//!
//! All tolerances and thresholds used by the feature matchers live in
//! [`MarkerConfig`]. Every field has a default, so a partial YAML file
//! (or none at all) works.

mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tuning knobs for matching sketched graphs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Gradient above which a line section counts as steep (or below
    /// whose reciprocal it counts as flat)
    #[serde(default = "defaults::slope_threshold")]
    pub slope_threshold: f64,

    /// How many points at each end of a line slope analysis looks at
    #[serde(default = "defaults::number_of_points_at_ends")]
    pub number_of_points_at_ends: usize,

    /// Maximum relative size difference for two line sections to count
    /// as mirror images
    #[serde(default = "defaults::symmetry_similarity")]
    pub symmetry_similarity: f64,

    /// Half-width of the strip around an axis that counts as on the axis
    #[serde(default = "defaults::axis_slop")]
    pub axis_slop: f64,

    /// Half-diagonal of the diamond that counts as at the origin
    #[serde(default = "defaults::origin_slop")]
    pub origin_slop: f64,

    /// Half-diagonal of the larger diamond used when checking odd
    /// functions pass through their centre
    #[serde(default = "defaults::relaxed_origin_slop")]
    pub relaxed_origin_slop: f64,

    /// Sector names used for classification, in priority order
    #[serde(default = "defaults::ordered_sectors")]
    pub ordered_sectors: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            slope_threshold: defaults::slope_threshold(),
            number_of_points_at_ends: defaults::number_of_points_at_ends(),
            symmetry_similarity: defaults::symmetry_similarity(),
            axis_slop: defaults::axis_slop(),
            origin_slop: defaults::origin_slop(),
            relaxed_origin_slop: defaults::relaxed_origin_slop(),
            ordered_sectors: defaults::ordered_sectors(),
        }
    }
}

impl MarkerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: MarkerConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tolerances make sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slope_threshold <= 0.0 {
            return Err(ConfigError::Validation(
                "slope_threshold must be positive".to_string(),
            ));
        }
        if self.number_of_points_at_ends == 0 {
            return Err(ConfigError::Validation(
                "number_of_points_at_ends must be at least 1".to_string(),
            ));
        }
        if self.symmetry_similarity <= 0.0 || self.symmetry_similarity >= 1.0 {
            return Err(ConfigError::Validation(
                "symmetry_similarity must be between 0 and 1".to_string(),
            ));
        }
        for (name, value) in [
            ("axis_slop", self.axis_slop),
            ("origin_slop", self.origin_slop),
            ("relaxed_origin_slop", self.relaxed_origin_slop),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be positive",
                    name
                )));
            }
        }
        if self.ordered_sectors.is_empty() {
            return Err(ConfigError::Validation(
                "ordered_sectors must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File I/O error
    Io(String),
    /// YAML parsing error
    Parse(String),
    /// Values out of range
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Validation(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = MarkerConfig::default();
        assert_relative_eq!(config.slope_threshold, 4.0);
        assert_relative_eq!(config.axis_slop, 0.02);
        assert_eq!(config.number_of_points_at_ends, 5);
        assert_eq!(config.ordered_sectors.len(), 13);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = MarkerConfig::from_yaml("slope_threshold: 8.0").unwrap();
        assert_relative_eq!(config.slope_threshold, 8.0);
        assert_relative_eq!(config.symmetry_similarity, 0.4);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = MarkerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = MarkerConfig::from_yaml(&yaml).unwrap();
        assert_relative_eq!(parsed.origin_slop, config.origin_slop);
        assert_eq!(parsed.ordered_sectors, config.ordered_sectors);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(MarkerConfig::from_yaml("axis_slop: -0.5").is_err());
        assert!(MarkerConfig::from_yaml("symmetry_similarity: 2.0").is_err());
        assert!(MarkerConfig::from_yaml("ordered_sectors: []").is_err());
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        match MarkerConfig::from_yaml("slope_threshold: [oops") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
