//! Geometric primitives and the sector model.
//!
//! This module provides:
//! - [`Segment`]: directed segments, half-lines and full lines
//! - [`Sector`]: named plane regions bounded by segments
//! - [`SectorRegistry`]: the interned sector catalog and classification
//! - [`lines`]: utilities on whole polylines

pub mod lines;
mod registry;
mod sector;
mod segment;

pub use lines::{bounding_rect, centre_of_points, find_intersections, no_horizontal_overlap, size_of, split_on_points, Rect};
pub use registry::{names, SectorId, SectorRegistry, SectorSet, UnknownSector};
pub use sector::{Intersection, Sector};
pub use segment::{IntersectionParam, Segment, Side};
