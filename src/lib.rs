//! # sketch-mark: graph sketch auto-marking
//!
//! A feature engine for marking free-hand graph sketches: does a sketched
//! curve satisfy a teacher-authored textual specification, and conversely,
//! what specification describes this exemplar sketch?
//!
//! ## Features
//!
//! - **Clause mini-language**: `through:`, `slope:`, `symmetry:`, `points:`,
//!   `has-points:`, `curves:` and `intersects:` clauses, with `line:` and
//!   `match:` selectors for multi-curve sketches
//! - **Sector model**: named plane regions with configurable tolerances,
//!   so a wobbly sketch can graze an axis without failing
//! - **Name binding**: `match: A;` clauses bind lines Prolog-style and
//!   narrow the candidate bindings as clauses are evaluated
//! - **Reverse generation**: build a specification from a model answer
//!
//! ## Quick Start
//!
//! ```rust
//! use sketch_mark::{Features, MarkerConfig};
//! use sketch_mark::core::{Input, Line, Point};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let features = Features::new(MarkerConfig::default())?;
//! let matcher = features.matcher("through: bottomLeft, origin, topRight")?;
//!
//! // A sketch of y = x.
//! let points = (0..100)
//!     .map(|i| {
//!         let x = -1.0 + i as f64 * (2.0 / 99.0);
//!         Point::new(x, x)
//!     })
//!     .collect();
//! let sketch = Input::of_line(Line::new(points, vec![]));
//!
//! assert!(matcher.matches(&sketch));
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinates
//!
//! Sketches arrive normalised to roughly [-1, 1] on both axes by the
//! capture layer, with the y axis pointing up. The tolerances in
//! [`MarkerConfig`] are expressed in these normalised units.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types (Point, Line, Input, points of interest)
//! - [`geometry`]: Segments, sectors and polyline utilities
//! - [`config`]: Configuration types and YAML loading
//! - [`features`]: Clause parsing, matching and generation
//!
//! ## Data Flow
//!
//! ```text
//!   sketch capture (external)          specification text
//!            │                                 │
//!            ▼                                 ▼
//!     ┌─────────────┐                  ┌──────────────┐
//!     │    Input    │                  │   Features   │
//!     │ (Lines +    │                  │  .matcher()  │
//!     │  extrema)   │                  └──────┬───────┘
//!     └──────┬──────┘                         │
//!            │                                ▼
//!            │                         ┌──────────────┐
//!            └────────────────────────►│   Matcher    │──► pass / failing
//!                                      │ (clauses +   │    clause texts
//!                                      │  Context)    │
//!                                      └──────────────┘
//! ```

pub mod config;
pub mod core;
pub mod features;
pub mod geometry;

// Re-export main types at crate root
pub use config::{ConfigError, MarkerConfig};
pub use crate::core::{Input, Line, Point, PointOfInterest, PointType};
pub use features::{Context, Features, Matcher, SpecError};
pub use geometry::{SectorId, SectorRegistry, SectorSet, UnknownSector};
