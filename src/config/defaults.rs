//! Default value functions for serde deserialization.

use crate::geometry::names;

pub fn slope_threshold() -> f64 {
    4.0
}

pub fn number_of_points_at_ends() -> usize {
    5
}

pub fn symmetry_similarity() -> f64 {
    0.4
}

pub fn axis_slop() -> f64 {
    0.02
}

pub fn origin_slop() -> f64 {
    0.05
}

pub fn relaxed_origin_slop() -> f64 {
    0.1
}

pub fn ordered_sectors() -> Vec<String> {
    [
        names::ORIGIN,
        names::POSITIVE_X_AXIS,
        names::POSITIVE_Y_AXIS,
        names::NEGATIVE_X_AXIS,
        names::NEGATIVE_Y_AXIS,
        names::TOP_RIGHT,
        names::TOP_LEFT,
        names::BOTTOM_LEFT,
        names::BOTTOM_RIGHT,
        names::TOP_RIGHT_SLOP,
        names::TOP_LEFT_SLOP,
        names::BOTTOM_LEFT_SLOP,
        names::BOTTOM_RIGHT_SLOP,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
