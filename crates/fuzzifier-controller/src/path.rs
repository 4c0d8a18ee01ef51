//! Collision path prediction.
//!
//! An asteroid's course is extrapolated linearly over a fixed horizon. The
//! swept capsule is clipped against a disk around the ship; any overlap is a
//! predicted collision, and the time to reach it is estimated from the
//! asteroid's speed. Screen wraparound is not modelled.

use std::collections::HashMap;

use fuzzifier_core::constants::{PATH_HORIZON_SECS, QUARTER_CIRCLE_SEGMENTS, SHIP_COLLISION_RADIUS};
use fuzzifier_core::views::{AsteroidData, ShipData};
use fuzzifier_core::AsteroidId;
use fuzzifier_geometry::{buffered_segment, disk, to_vec, ConvexPolygon};

/// Predicted path of one asteroid relative to the ship.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPath {
    /// Region swept by the asteroid over the horizon. None for a zero-radius asteroid.
    pub swept: Option<ConvexPolygon>,
    /// Overlap of the swept region with the ship disk.
    pub region: Option<ConvexPolygon>,
    /// Area of `region`, 0 when there is no overlap.
    pub area: f64,
    /// Seconds until the asteroid reaches `region`. None without a collision
    /// or when the asteroid is not moving.
    pub time_to_impact: Option<f64>,
}

impl CollisionPath {
    pub fn collides(&self) -> bool {
        self.region.is_some()
    }
}

/// Computes and caches collision paths keyed by asteroid ID.
///
/// Entries are overwritten when the same ID is predicted again and otherwise
/// left in place.
#[derive(Debug, Clone)]
pub struct PathPredictor {
    horizon: f64,
    ship_radius: f64,
    quarter_segments: usize,
    paths: HashMap<AsteroidId, CollisionPath>,
}

impl Default for PathPredictor {
    fn default() -> Self {
        Self {
            horizon: PATH_HORIZON_SECS,
            ship_radius: SHIP_COLLISION_RADIUS,
            quarter_segments: QUARTER_CIRCLE_SEGMENTS,
            paths: HashMap::new(),
        }
    }
}

impl PathPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predict the path of `asteroid`, store it under `id`, and return it.
    pub fn predict(&mut self, asteroid: &AsteroidData, ship: &ShipData, id: AsteroidId) -> &CollisionPath {
        let path = self.compute(asteroid, ship);
        log::debug!(
            "path {id}: collides={} area={:.1} tti={:?}",
            path.collides(),
            path.area,
            path.time_to_impact
        );
        self.paths.insert(id, path);
        &self.paths[&id]
    }

    fn compute(&self, asteroid: &AsteroidData, ship: &ShipData) -> CollisionPath {
        let start = to_vec(&asteroid.position);
        let end = to_vec(&asteroid.position.advanced(&asteroid.velocity, self.horizon));

        let swept = buffered_segment(start, end, asteroid.radius, self.quarter_segments);
        let ship_disk = disk(to_vec(&ship.position), self.ship_radius, self.quarter_segments);
        let region = match (&swept, &ship_disk) {
            (Some(s), Some(d)) => s.intersection(d),
            _ => None,
        };

        let area = region.as_ref().map_or(0.0, ConvexPolygon::area);
        let speed = asteroid.velocity.speed();
        let time_to_impact = match &region {
            Some(r) if speed > 0.0 => Some(r.distance_to(start) / speed),
            _ => None,
        };

        CollisionPath {
            swept,
            region,
            area,
            time_to_impact,
        }
    }

    pub fn get(&self, id: AsteroidId) -> Option<&CollisionPath> {
        self.paths.get(&id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
