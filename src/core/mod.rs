//! Core types for the sketch-mark feature library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point`]: 2D point in axis coordinates
//! - [`PointOfInterest`] and [`PointType`]: tagged significant points
//! - [`Line`]: a sketched curve (polyline + points of interest)
//! - [`Input`]: a whole sketched answer (one or more curves)

mod line;
mod point;

pub use line::{Input, Line};
pub use point::{Point, PointOfInterest, PointType};
