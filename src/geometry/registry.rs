//! The sector catalog: construction, interning and classification.
//!
//! A [`SectorRegistry`] owns every named sector, built once from the
//! configured tolerances. Sectors are referred to by interned
//! [`SectorId`]s so that equality is a tag comparison, and groups of
//! sectors are [`SectorSet`] bitmasks over the catalog. Registries are
//! plain owned values; independent matchers can each hold their own.

use crate::config::MarkerConfig;
use crate::core::Point;

use super::segment::{Segment, Side};
use super::sector::Sector;

/// Sector name constants as used in feature specifications.
pub mod names {
    pub const ORIGIN: &str = "origin";
    pub const RELAXED_ORIGIN: &str = "relaxedOrigin";
    pub const POSITIVE_X_AXIS: &str = "+Xaxis";
    pub const NEGATIVE_X_AXIS: &str = "-Xaxis";
    pub const POSITIVE_Y_AXIS: &str = "+Yaxis";
    pub const NEGATIVE_Y_AXIS: &str = "-Yaxis";
    pub const TOP_LEFT: &str = "topLeft";
    pub const TOP_RIGHT: &str = "topRight";
    pub const BOTTOM_LEFT: &str = "bottomLeft";
    pub const BOTTOM_RIGHT: &str = "bottomRight";
    pub const TOP_LEFT_SLOP: &str = "topLeftSlop";
    pub const TOP_RIGHT_SLOP: &str = "topRightSlop";
    pub const BOTTOM_LEFT_SLOP: &str = "bottomLeftSlop";
    pub const BOTTOM_RIGHT_SLOP: &str = "bottomRightSlop";
    pub const LEFT_HALF: &str = "left";
    pub const RIGHT_HALF: &str = "right";
    pub const TOP_HALF: &str = "top";
    pub const BOTTOM_HALF: &str = "bottom";
    pub const ANY: &str = "any";
}

/// Interned handle to a sector in a [`SectorRegistry`].
///
/// Ids are only meaningful against the registry that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectorId(u8);

/// A set of sectors, stored as a bitmask over the registry catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectorSet(u32);

impl SectorSet {
    /// The empty set
    pub const EMPTY: SectorSet = SectorSet(0);

    /// Add a sector to the set
    #[inline]
    pub fn insert(&mut self, id: SectorId) {
        self.0 |= 1 << id.0;
    }

    /// Remove a sector from the set
    #[inline]
    pub fn remove(&mut self, id: SectorId) {
        self.0 &= !(1 << id.0);
    }

    /// Is the sector in the set?
    #[inline]
    pub fn contains(&self, id: SectorId) -> bool {
        self.0 & (1 << id.0) != 0
    }

    /// Is the set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of sectors in the set
    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the sector ids in the set, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = SectorId> + '_ {
        let bits = self.0;
        (0..32u8).filter(move |i| bits & (1 << i) != 0).map(SectorId)
    }
}

impl FromIterator<SectorId> for SectorSet {
    fn from_iter<T: IntoIterator<Item = SectorId>>(iter: T) -> Self {
        let mut set = SectorSet::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Error for a sector name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSector(pub String);

impl std::fmt::Display for UnknownSector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a valid sector", self.0)
    }
}

impl std::error::Error for UnknownSector {}

const ORIGIN_POINT: Point = Point { x: 0.0, y: 0.0 };
const LEFT: Point = Point { x: -1.0, y: 0.0 };
const RIGHT: Point = Point { x: 1.0, y: 0.0 };
const UP: Point = Point { x: 0.0, y: 1.0 };
const DOWN: Point = Point { x: 0.0, y: -1.0 };

/// Owns the sector catalog and the priority-ordered classification list.
#[derive(Clone, Debug)]
pub struct SectorRegistry {
    catalog: Vec<Sector>,
    ordered: Vec<SectorId>,
}

impl SectorRegistry {
    /// Build the catalog from the configured tolerances.
    ///
    /// Fails when the configured priority list names a sector that is not
    /// in the catalog.
    pub fn new(config: &MarkerConfig) -> Result<Self, UnknownSector> {
        let axis_slop = config.axis_slop;
        let catalog = vec![
            Sector::new(names::ORIGIN, diamond(config.origin_slop)),
            Sector::new(names::RELAXED_ORIGIN, diamond(config.relaxed_origin_slop)),
            Sector::new(names::POSITIVE_X_AXIS, sloppy_axis(UP, DOWN, RIGHT, axis_slop)),
            Sector::new(names::NEGATIVE_X_AXIS, sloppy_axis(DOWN, UP, LEFT, axis_slop)),
            Sector::new(names::POSITIVE_Y_AXIS, sloppy_axis(LEFT, RIGHT, UP, axis_slop)),
            Sector::new(names::NEGATIVE_Y_AXIS, sloppy_axis(RIGHT, LEFT, DOWN, axis_slop)),
            Sector::new(names::TOP_LEFT, sloppy_quadrant(LEFT, UP, axis_slop)),
            Sector::new(names::TOP_RIGHT, sloppy_quadrant(RIGHT, UP, axis_slop)),
            Sector::new(names::BOTTOM_LEFT, sloppy_quadrant(LEFT, DOWN, axis_slop)),
            Sector::new(names::BOTTOM_RIGHT, sloppy_quadrant(RIGHT, DOWN, axis_slop)),
            Sector::new(names::TOP_LEFT_SLOP, centered_quadrant(LEFT, UP)),
            Sector::new(names::TOP_RIGHT_SLOP, centered_quadrant(RIGHT, UP)),
            Sector::new(names::BOTTOM_LEFT_SLOP, centered_quadrant(LEFT, DOWN)),
            Sector::new(names::BOTTOM_RIGHT_SLOP, centered_quadrant(RIGHT, DOWN)),
            Sector::new(names::LEFT_HALF, centered_half(UP)),
            Sector::new(names::RIGHT_HALF, centered_half(DOWN)),
            Sector::new(names::TOP_HALF, centered_half(RIGHT)),
            Sector::new(names::BOTTOM_HALF, centered_half(LEFT)),
            Sector::new(names::ANY, vec![]),
        ];

        let mut registry = SectorRegistry {
            catalog,
            ordered: vec![],
        };
        registry.ordered = config
            .ordered_sectors
            .iter()
            .map(|name| registry.by_name(name).ok_or_else(|| UnknownSector(name.clone())))
            .collect::<Result<_, _>>()?;
        Ok(registry)
    }

    /// Look up a sector id by name
    pub fn by_name(&self, name: &str) -> Option<SectorId> {
        self.catalog
            .iter()
            .position(|sector| sector.name() == name)
            .map(|i| SectorId(i as u8))
    }

    /// The sector behind an id
    #[inline]
    pub fn sector(&self, id: SectorId) -> &Sector {
        &self.catalog[id.0 as usize]
    }

    /// The name of a sector
    #[inline]
    pub fn name(&self, id: SectorId) -> &str {
        self.catalog[id.0 as usize].name()
    }

    /// The priority-ordered classification list
    #[inline]
    pub fn ordered(&self) -> &[SectorId] {
        &self.ordered
    }

    /// All ordered sectors that contain this point
    pub fn classify_all(&self, point: Point) -> SectorSet {
        self.ordered
            .iter()
            .copied()
            .filter(|&id| self.sector(id).contains(point))
            .collect()
    }

    /// The highest-priority ordered sector containing this point.
    ///
    /// The default ordered list covers the whole plane, so this only
    /// returns `None` under a custom list with gaps.
    pub fn classify(&self, point: Point) -> Option<SectorId> {
        self.ordered
            .iter()
            .copied()
            .find(|&id| self.sector(id).contains(point))
    }

    /// Parse a comma-separated list of sector names.
    ///
    /// With `with_slop`, the matching slop quadrant is inserted between
    /// adjacent entries whenever either neighbour is that quadrant, so a
    /// path through a quadrant may graze the neighbouring axis region.
    pub fn from_list(&self, csv: &str, with_slop: bool) -> Result<Vec<SectorId>, UnknownSector> {
        let ids = csv
            .split(',')
            .map(|name| {
                let name = name.trim();
                self.by_name(name).ok_or_else(|| UnknownSector(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if with_slop {
            Ok(self.add_slop(ids))
        } else {
            Ok(ids)
        }
    }

    /// Insert slop quadrants between adjacent sector pairs.
    fn add_slop(&self, ids: Vec<SectorId>) -> Vec<SectorId> {
        if ids.len() < 2 {
            return ids;
        }

        let quadrants = [
            (names::TOP_LEFT, names::TOP_LEFT_SLOP),
            (names::TOP_RIGHT, names::TOP_RIGHT_SLOP),
            (names::BOTTOM_LEFT, names::BOTTOM_LEFT_SLOP),
            (names::BOTTOM_RIGHT, names::BOTTOM_RIGHT_SLOP),
        ];

        let mut result = Vec::with_capacity(ids.len() * 2);
        for window in ids.windows(2) {
            let (current, next) = (window[0], window[1]);
            result.push(current);
            for &(quadrant, slop) in &quadrants {
                if self.name(current) == quadrant || self.name(next) == quadrant {
                    if let Some(slop_id) = self.by_name(slop) {
                        result.push(slop_id);
                    }
                }
            }
        }
        result.push(ids[ids.len() - 1]);
        result
    }
}

/// A quadrant-like infinite sector from `origin` between two axes.
fn quadrant(origin: Point, axis1: Point, axis2: Point) -> Vec<Segment> {
    vec![
        Segment::open_one_end_towards(origin, axis1, axis2),
        Segment::open_one_end_towards(origin, axis2, axis1),
    ]
}

/// A quadrant with its vertex exactly at the origin.
fn centered_quadrant(axis1: Point, axis2: Point) -> Vec<Segment> {
    quadrant(ORIGIN_POINT, axis1, axis2)
}

/// A quadrant with its vertex pushed away from both axes by the axis slop,
/// so points close to an axis fall to the axis sectors.
fn sloppy_quadrant(axis1: Point, axis2: Point, axis_slop: f64) -> Vec<Segment> {
    let axis1_scaled = axis1 * axis_slop;
    let axis2_scaled = axis2 * axis_slop;
    let shifted_origin = axis1_scaled + axis2_scaled;
    quadrant(shifted_origin, axis1_scaled, axis2_scaled)
}

/// A strip around half of an axis: between `left` and `right` scaled by
/// the axis slop, extending to infinity in the direction of `axis`.
fn sloppy_axis(left: Point, right: Point, axis: Point, axis_slop: f64) -> Vec<Segment> {
    let left_scaled = left * axis_slop;
    let right_scaled = right * axis_slop;
    vec![
        Segment::closed(left_scaled, right_scaled),
        Segment::open_one_end(left_scaled, axis, Side::Right),
        Segment::open_one_end(right_scaled, axis, Side::Left),
    ]
}

/// A diamond centred on the origin with the given half-diagonal.
fn diamond(size: f64) -> Vec<Segment> {
    let corners = [
        Point::new(size, 0.0),
        Point::new(0.0, size),
        Point::new(-size, 0.0),
        Point::new(0.0, -size),
    ];
    (0..corners.len())
        .map(|i| Segment::closed(corners[i], corners[(i + 1) % corners.len()]))
        .collect()
}

/// The half-plane to the left of the line through the origin along `axis`.
fn centered_half(axis: Point) -> Vec<Segment> {
    vec![Segment::open_both_ends(ORIGIN_POINT, axis, Side::Left)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerConfig;

    fn registry() -> SectorRegistry {
        SectorRegistry::new(&MarkerConfig::default()).unwrap()
    }

    #[test]
    fn test_catalog_lookup() {
        let registry = registry();
        assert!(registry.by_name("topRight").is_some());
        assert!(registry.by_name("nonsense").is_none());
        let id = registry.by_name("origin").unwrap();
        assert_eq!(registry.name(id), "origin");
    }

    #[test]
    fn test_default_ordered_list() {
        let registry = registry();
        let names: Vec<&str> = registry.ordered().iter().map(|&id| registry.name(id)).collect();
        assert_eq!(
            names,
            vec![
                "origin",
                "+Xaxis",
                "+Yaxis",
                "-Xaxis",
                "-Yaxis",
                "topRight",
                "topLeft",
                "bottomLeft",
                "bottomRight",
                "topRightSlop",
                "topLeftSlop",
                "bottomLeftSlop",
                "bottomRightSlop",
            ]
        );
    }

    #[test]
    fn test_classify_priority() {
        let registry = registry();
        // The origin wins over the axes and quadrants.
        let at_origin = registry.classify(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(registry.name(at_origin), "origin");
        // On the positive x axis, outside the origin diamond.
        let on_axis = registry.classify(Point::new(0.5, 0.0)).unwrap();
        assert_eq!(registry.name(on_axis), "+Xaxis");
        // Deep in a quadrant.
        let in_quadrant = registry.classify(Point::new(0.5, 0.5)).unwrap();
        assert_eq!(registry.name(in_quadrant), "topRight");
    }

    #[test]
    fn test_classify_all_axis_point_is_in_both_neighbouring_slops() {
        let registry = registry();
        let set = registry.classify_all(Point::new(0.5, 0.0));
        let names: Vec<&str> = set.iter().map(|id| registry.name(id)).collect();
        assert!(names.contains(&"+Xaxis"));
        assert!(names.contains(&"topRightSlop"));
        assert!(names.contains(&"bottomRightSlop"));
        assert!(!names.contains(&"topRight"));
    }

    #[test]
    fn test_from_list_with_slop() {
        let registry = registry();
        let ids = registry
            .from_list("bottomLeft, +Yaxis, bottomRight", true)
            .unwrap();
        let names: Vec<&str> = ids.iter().map(|&id| registry.name(id)).collect();
        assert_eq!(
            names,
            vec![
                "bottomLeft",
                "bottomLeftSlop",
                "+Yaxis",
                "bottomRightSlop",
                "bottomRight",
            ]
        );
    }

    #[test]
    fn test_from_list_without_slop() {
        let registry = registry();
        let ids = registry.from_list("origin, topRight", false).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(registry.from_list("origin, nowhere", false).is_err());
    }

    #[test]
    fn test_sector_set_operations() {
        let registry = registry();
        let a = registry.by_name("origin").unwrap();
        let b = registry.by_name("topRight").unwrap();
        let mut set = SectorSet::EMPTY;
        assert!(set.is_empty());
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
        assert!(set.contains(a));
        set.remove(a);
        assert!(!set.contains(a));
        assert!(set.contains(b));
    }
}
