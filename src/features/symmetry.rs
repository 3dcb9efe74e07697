//! The `symmetry:` clause: reflection or rotation symmetry of a line.
//!
//! The line is split into sub-lines at its points of interest (with a
//! virtual centre inserted when there is an even number of them, so the
//! split always has a middle). Working outwards from the centre, each
//! sub-line's bounding box is compared against its mirror: matching
//! heights mean the pair looks odd, opposite heights mean it looks even.
//!
//! Even and odd are the axis-aligned forms; symmetric and antisymmetric
//! are the same shapes anywhere in the plane.

use crate::config::MarkerConfig;
use crate::core::{Line, PointOfInterest, PointType};
use crate::geometry::{centre_of_points, names, size_of, split_on_points, SectorRegistry};

use super::error::SpecError;

/// The symmetry of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryType {
    None,
    /// Rotational symmetry about the origin.
    Odd,
    /// Reflective symmetry about the y axis.
    Even,
    /// Reflective symmetry about some vertical axis.
    Symmetric,
    /// Rotational symmetry about some point.
    Antisymmetric,
}

impl SymmetryType {
    pub fn name(self) -> &'static str {
        match self {
            SymmetryType::None => "none",
            SymmetryType::Odd => "odd",
            SymmetryType::Even => "even",
            SymmetryType::Symmetric => "symmetric",
            SymmetryType::Antisymmetric => "antisymmetric",
        }
    }

    fn from_name(name: &str) -> Option<SymmetryType> {
        match name {
            "none" => Some(SymmetryType::None),
            "odd" => Some(SymmetryType::Odd),
            "even" => Some(SymmetryType::Even),
            "symmetric" => Some(SymmetryType::Symmetric),
            "antisymmetric" => Some(SymmetryType::Antisymmetric),
            _ => None,
        }
    }
}

/// Parsed `symmetry:` clause data.
#[derive(Clone, Debug)]
pub struct SymmetryClause {
    expected: SymmetryType,
}

impl SymmetryClause {
    pub fn parse(data: &str) -> Result<Self, SpecError> {
        let expected = SymmetryType::from_name(&data.trim().to_lowercase()).ok_or_else(|| {
            SpecError::malformed("symmetry", format!("unknown symmetry: {}", data.trim()))
        })?;
        Ok(SymmetryClause { expected })
    }

    pub fn test(&self, line: &Line, config: &MarkerConfig, registry: &SectorRegistry) -> bool {
        symmetry_of_line(line, config, registry) == self.expected
    }

    /// Describe a line's symmetry as clause data, or `None` for a line
    /// with no symmetry.
    pub fn generate(
        line: &Line,
        config: &MarkerConfig,
        registry: &SectorRegistry,
    ) -> Option<String> {
        match symmetry_of_line(line, config, registry) {
            SymmetryType::None => None,
            symmetry => Some(symmetry.name().to_string()),
        }
    }
}

/// Work out the symmetry of a line.
pub(crate) fn symmetry_of_line(
    line: &Line,
    config: &MarkerConfig,
    registry: &SectorRegistry,
) -> SymmetryType {
    if line.is_empty() {
        return SymmetryType::None;
    }

    let mut points: Vec<PointOfInterest> = line.points_of_interest().to_vec();
    if points.len() % 2 == 0 {
        let centre = if points.is_empty() {
            centre_of_points(line.points())
        } else {
            centre_of_points(&points.iter().map(|p| p.point).collect::<Vec<_>>())
        };
        let middle = points.len() / 2;
        points.insert(middle, PointOfInterest::new(centre, PointType::VirtualCentre));
    }

    let sub_lines = split_on_points(line, &points);

    let mut symmetric = true;
    let mut antisymmetric = true;

    let size = sub_lines.len() / 2;
    for i in 0..size {
        let left_size = size_of(&sub_lines[size - i - 1]);
        let right_size = size_of(&sub_lines[size + i]);

        let x_difference = (right_size.x - left_size.x) / right_size.x;
        let y_difference_odd = (right_size.y - left_size.y) / right_size.y;
        let y_difference_even = (right_size.y + left_size.y) / right_size.y;

        if x_difference.abs() < config.symmetry_similarity {
            if right_size.y == 0.0 && left_size.y == 0.0 {
                continue;
            }
            if y_difference_odd.abs() < config.symmetry_similarity {
                // Matching heights: an odd-looking pair.
                symmetric = false;
                continue;
            }
            if y_difference_even.abs() < config.symmetry_similarity {
                // Opposite heights: an even-looking pair.
                antisymmetric = false;
                continue;
            }
        }
        symmetric = false;
        antisymmetric = false;
        break;
    }

    let centre = points[points.len() / 2];
    let near_origin = registry
        .by_name(names::RELAXED_ORIGIN)
        .map(|id| registry.sector(id).contains(centre.point))
        .unwrap_or(false);

    if antisymmetric && near_origin {
        SymmetryType::Odd
    } else if symmetric && centre.x().abs() < config.axis_slop {
        SymmetryType::Even
    } else if symmetric {
        SymmetryType::Symmetric
    } else if antisymmetric {
        SymmetryType::Antisymmetric
    } else {
        SymmetryType::None
    }
}
