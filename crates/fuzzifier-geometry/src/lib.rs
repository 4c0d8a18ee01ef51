//! Planar geometry for Fuzzifier.
//!
//! Convex polygon construction (disks, buffered segments, triangles),
//! convex clipping, area and distance queries.

pub use fuzzifier_core as core;

pub mod polygon;
pub mod shapes;

// Re-export key types for convenience.
pub use polygon::ConvexPolygon;
pub use shapes::{buffered_segment, disk, wedge};

use fuzzifier_core::types::Position;
use glam::DVec2;

/// Convert a core position into a glam vector.
pub fn to_vec(p: &Position) -> DVec2 {
    DVec2::new(p.x(), p.y())
}
