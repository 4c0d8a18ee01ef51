//! Shoot planner: turn toward a target, lead it, and decide when to fire.

use fuzzifier_core::constants::*;
use fuzzifier_core::types::heading_error;
use fuzzifier_core::views::{AsteroidData, ShipData};
use fuzzifier_core::AsteroidId;

/// In-flight shots: asteroid ID and the bullet's remaining travel time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotMemory {
    shots: Vec<(AsteroidId, f64)>,
}

impl ShotMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shot at `id`. Returns false, changing nothing, if a shot at
    /// `id` is already in flight.
    pub fn register(&mut self, id: AsteroidId, travel_time: f64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.shots.push((id, travel_time));
        true
    }

    pub fn contains(&self, id: AsteroidId) -> bool {
        self.shots.iter().any(|(i, _)| *i == id)
    }

    /// Remaining travel time of the shot at `id`.
    pub fn remaining(&self, id: AsteroidId) -> Option<f64> {
        self.shots.iter().find(|(i, _)| *i == id).map(|(_, t)| *t)
    }

    /// Count down every shot by `dt`, dropping those that have arrived.
    pub fn advance(&mut self, dt: f64) {
        for (_, remaining) in &mut self.shots {
            *remaining -= dt;
        }
        self.shots.retain(|(_, remaining)| *remaining > 0.0);
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

/// What the shoot planner wants this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShootDecision {
    /// Requested turn rate in degrees per second (unclamped).
    pub turn_rate: f64,
    pub fire: bool,
}

/// Aims at one asteroid at a time and remembers what it has shot at.
#[derive(Debug, Clone, Default)]
pub struct ShootPlanner {
    memory: ShotMemory,
}

impl ShootPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory(&self) -> &ShotMemory {
        &self.memory
    }

    /// Plan a shot at `asteroid`.
    ///
    /// Returns None while a shot at `id` is still in flight. Far off target
    /// the ship turns at full rate; inside the coarse window it aims at the
    /// lead point and fires once within the fine tolerance.
    pub fn plan(&mut self, ship: &ShipData, asteroid: &AsteroidData, id: AsteroidId) -> Option<ShootDecision> {
        if self.memory.contains(id) {
            return None;
        }

        let Some(bearing) = ship.position.bearing_to(&asteroid.position) else {
            return Some(ShootDecision::default());
        };
        let error = heading_error(bearing, ship.heading);

        if error.abs() > COARSE_AIM_TOLERANCE {
            return Some(ShootDecision {
                turn_rate: MAX_TURN_RATE.copysign(error),
                fire: false,
            });
        }

        let distance = ship.position.distance_to(&asteroid.position);
        let travel_time = distance / BULLET_SPEED;
        let lead = asteroid
            .position
            .advanced(&asteroid.velocity, travel_time * LEAD_OVERSHOOT);
        let lead_error = ship
            .position
            .bearing_to(&lead)
            .map_or(error, |b| heading_error(b, ship.heading));

        let tolerance = if asteroid.size > 1 {
            FINE_AIM_TOLERANCE_LARGE
        } else {
            FINE_AIM_TOLERANCE_SMALL
        };

        if lead_error.abs() <= tolerance {
            if !self.memory.register(id, travel_time) {
                return None;
            }
            log::debug!("fire at {id}: lead error {lead_error:.2}, travel {travel_time:.3}s");
            return Some(ShootDecision {
                turn_rate: lead_error,
                fire: true,
            });
        }

        Some(ShootDecision {
            turn_rate: lead_error,
            fire: false,
        })
    }

    /// Advance in-flight shots by one tick.
    pub fn advance(&mut self, dt: f64) {
        self.memory.advance(dt);
    }
}
