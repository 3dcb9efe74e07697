//! The `through:` clause: an ordered path of sectors a line must follow.
//!
//! The matcher works out every sector the line might be passing through
//! at each stage (getting close to an axis may or may not count as
//! touching it) and then checks the expected path threads through those
//! possibility sets in order. Crossing an axis is irreversible though:
//! once both sides of an axis show up in a possibility set, neither side
//! alone can explain the position, so both are removed and only the axis
//! remains.

use std::collections::VecDeque;

use log::debug;

use crate::core::{Line, Point};
use crate::geometry::{names, IntersectionParam, SectorId, SectorRegistry, SectorSet, Segment};

use super::error::SpecError;

/// Parsed `through:` clause data.
#[derive(Clone, Debug)]
pub struct ThroughClause {
    expected: Vec<SectorId>,
}

impl ThroughClause {
    /// Parse a comma-separated sector path, inserting slop sectors so a
    /// path may graze an axis between quadrants.
    pub fn parse(data: &str, registry: &SectorRegistry) -> Result<Self, SpecError> {
        let expected = registry.from_list(data, true)?;
        Ok(ThroughClause { expected })
    }

    /// Does this line's sector path match the expected path?
    pub fn test(&self, line: &Line, registry: &SectorRegistry) -> bool {
        let actual = sector_sets_of_line(line, registry);
        debug!(
            "line passed through sectors: {:?}",
            sector_set_names(&actual, registry)
        );
        self.matches(&actual)
    }

    /// Dynamic programming match of the expected path against the
    /// possibility sets.
    ///
    /// Conceptually this is a grid of booleans, expected sectors down,
    /// actual sets across, true where the set contains the sector. A
    /// match is a path of trues from the top left to the bottom right
    /// moving only right, down, or diagonally down-right: every actual
    /// set must be explained by an expected sector and the expected
    /// sectors must be used in order. Only the previous row is kept.
    fn matches(&self, actual: &[SectorSet]) -> bool {
        // One phantom column on the left anchors the start.
        let n = actual.len();
        let mut matches = vec![false; n + 1];
        matches[0] = true;

        for &expected in &self.expected {
            let mut next = vec![false; n + 1];
            for j in 0..n {
                if actual[j].contains(expected) {
                    next[j + 1] = matches[j] || matches[j + 1] || next[j];
                }
            }
            matches = next;
        }

        matches[n]
    }

    /// The sector path of a line as specification data: the
    /// highest-priority sector of each possibility set, consecutive
    /// duplicates collapsed.
    pub fn generate(line: &Line, registry: &SectorRegistry) -> String {
        let sets = sector_sets_of_line(line, registry);

        let mut output: Vec<SectorId> = Vec::new();
        for set in sets {
            let first = registry.ordered().iter().copied().find(|&id| set.contains(id));
            if let Some(id) = first {
                if output.last() != Some(&id) {
                    output.push(id);
                }
            }
        }

        output
            .iter()
            .map(|&id| registry.name(id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Pairs of sectors that cannot legitimately appear in one possibility
/// set: being on both sides of an axis means the axis was crossed.
fn invalid_sector_pairs(registry: &SectorRegistry) -> Vec<(SectorId, SectorId)> {
    [
        (names::TOP_RIGHT, names::BOTTOM_RIGHT),
        (names::TOP_LEFT, names::BOTTOM_LEFT),
        (names::TOP_RIGHT, names::TOP_LEFT),
        (names::BOTTOM_RIGHT, names::BOTTOM_LEFT),
        (names::POSITIVE_X_AXIS, names::NEGATIVE_X_AXIS),
        (names::POSITIVE_Y_AXIS, names::NEGATIVE_Y_AXIS),
    ]
    .iter()
    .filter_map(|&(a, b)| Some((registry.by_name(a)?, registry.by_name(b)?)))
    .collect()
}

/// The ordered possibility sets a line passes through: one set per
/// boundary-crossing group along each polyline segment, plus one per
/// vertex.
pub(crate) fn sector_sets_of_line(line: &Line, registry: &SectorRegistry) -> Vec<SectorSet> {
    let invalid = invalid_sector_pairs(registry);
    let mut output: Vec<SectorSet> = Vec::new();

    let mut last_point: Option<Point> = None;
    for &point in line.points() {
        if let Some(last) = last_point {
            classify_line_segment(&mut output, Segment::closed(last, point), registry, &invalid);
        }

        push_sector_set(&mut output, registry.classify_all(point), &invalid);

        last_point = Some(point);
    }

    output
}

/// Append a possibility set, removing invalid pairs and collapsing
/// consecutive duplicates. Emptied sets are dropped.
fn push_sector_set(output: &mut Vec<SectorSet>, mut sectors: SectorSet, invalid: &[(SectorId, SectorId)]) {
    let original = sectors;
    for &(a, b) in invalid {
        if original.contains(a) && original.contains(b) {
            sectors.remove(a);
            sectors.remove(b);
        }
    }

    if output.is_empty() || (output.last() != Some(&sectors) && !sectors.is_empty()) {
        output.push(sectors);
    }
}

/// Sweep one polyline segment through every ordered sector's boundary,
/// recording the set of sectors occupied between each group of
/// simultaneous crossings.
fn classify_line_segment(
    output: &mut Vec<SectorSet>,
    line_segment: Segment,
    registry: &SectorRegistry,
    invalid: &[(SectorId, SectorId)],
) {
    let ordered = registry.ordered();

    let mut params: Vec<VecDeque<IntersectionParam>> = ordered
        .iter()
        .map(|&id| registry.sector(id).intersection_params(&line_segment).into())
        .collect();

    let mut inside: Vec<bool> = ordered
        .iter()
        .map(|&id| registry.sector(id).contains(line_segment.start()))
        .collect();

    while let Some(index) = lowest_index(&params) {
        let Some(intersection) = params[index].pop_front() else {
            break;
        };
        inside[index] = intersection.inside;
        let t = intersection.t;

        // Pull in every other crossing at the same parameter so a vertex
        // on several boundaries flips them as one.
        while let Some(next_index) = lowest_index(&params) {
            if params[next_index].front().map(|p| p.t) != Some(t) {
                break;
            }
            if let Some(next) = params[next_index].pop_front() {
                inside[next_index] = next.inside;
            }
        }

        let set: SectorSet = ordered
            .iter()
            .zip(&inside)
            .filter(|&(_, &is_inside)| is_inside)
            .map(|(&id, _)| id)
            .collect();

        push_sector_set(output, set, invalid);
    }
}

/// Index of the queue whose front crossing has the lowest parameter.
fn lowest_index(params: &[VecDeque<IntersectionParam>]) -> Option<usize> {
    let mut index = None;
    let mut min_param = f64::MAX;
    for (i, queue) in params.iter().enumerate() {
        if let Some(front) = queue.front() {
            if front.t < min_param {
                index = Some(i);
                min_param = front.t;
            }
        }
    }
    index
}

fn sector_set_names(sets: &[SectorSet], registry: &SectorRegistry) -> Vec<Vec<String>> {
    sets.iter()
        .map(|set| set.iter().map(|id| registry.name(id).to_string()).collect())
        .collect()
}
