//! Dodge planner: pick the nearest in-range threat and push away from it.
//!
//! Thrust and turn come from the kinematic relation vf² = vi² + 2·a·d, with
//! the asteroid's speed as vf and the ship's as vi, damped and scaled to the
//! platform limits. The sign is corrected from the ship's facing and the
//! quadrant the asteroid approaches from.

use fuzzifier_core::constants::*;
use fuzzifier_core::control::sanitize;
use fuzzifier_core::enums::{Facing, Quadrant};
use fuzzifier_core::views::{AsteroidData, MineData, ShipData};
use fuzzifier_core::AsteroidId;
use fuzzifier_threat::ThreatReport;

use crate::path::PathPredictor;

/// What the dodge planner reacted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeTarget {
    Asteroid(AsteroidId),
    /// The nearest mine.
    Mine,
}

/// Avoidance command for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DodgeResponse {
    pub thrust: f64,
    pub turn_rate: f64,
    pub target: DodgeTarget,
    /// Predicted seconds to impact, when the path predictor found a collision.
    pub time_to_impact: Option<f64>,
}

/// Thrust and turn rate away from one object, both clamped.
pub fn evasion(ship: &ShipData, object: &AsteroidData) -> (f64, f64) {
    if object.distance <= 0.0 {
        return (0.0, 0.0);
    }
    let accel =
        (object.velocity.speed_squared() - ship.velocity.speed_squared()) / (2.0 * object.distance);

    let mut thrust = sanitize(MAX_THRUST * accel / DODGE_THRUST_DAMPING, MAX_THRUST);
    let mut turn = sanitize(MAX_TURN_RATE * accel / DODGE_TURN_DAMPING, MAX_TURN_RATE);

    let quadrant = Quadrant::of(object.vector_to_ship.x, object.vector_to_ship.y);
    if Facing::from_heading(ship.heading).flips(quadrant) {
        thrust = -thrust;
        turn = -turn;
    }
    (thrust, turn)
}

#[derive(Debug, Clone)]
pub struct DodgePlanner {
    range: f64,
    candidates: usize,
    paths: PathPredictor,
}

impl Default for DodgePlanner {
    fn default() -> Self {
        Self {
            range: DODGE_RANGE,
            candidates: DODGE_CANDIDATES,
            paths: PathPredictor::new(),
        }
    }
}

impl DodgePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    pub fn paths(&self) -> &PathPredictor {
        &self.paths
    }

    /// The asteroid to dodge: the nearest of the first few proximity entries
    /// that is within range and ranked as a threat.
    pub fn select(&self, report: &ThreatReport) -> Option<AsteroidId> {
        report
            .proximity
            .closest(self.candidates)
            .iter()
            .find(|&&(id, distance)| distance <= self.range && report.threats.is_threat(id))
            .map(|&(id, _)| id)
    }

    /// Plan a dodge against the selected asteroid, if any.
    pub fn plan(
        &mut self,
        ship: &ShipData,
        asteroids: &[AsteroidData],
        report: &ThreatReport,
    ) -> Option<DodgeResponse> {
        let id = self.select(report)?;
        let asteroid = asteroids.get(id)?;
        let time_to_impact = self.paths.predict(asteroid, ship, id).time_to_impact;
        let (thrust, turn_rate) = evasion(ship, asteroid);
        log::debug!("dodge {id}: thrust {thrust:.1}, turn {turn_rate:.1}, tti {time_to_impact:?}");
        Some(DodgeResponse {
            thrust,
            turn_rate,
            target: DodgeTarget::Asteroid(id),
            time_to_impact,
        })
    }

    /// Evade a mine inside dodge range when its threat score clears the cut-off.
    pub fn plan_mine(
        &self,
        ship: &ShipData,
        mine: &MineData,
        score: Option<f64>,
    ) -> Option<DodgeResponse> {
        if mine.distance > self.range || score.map_or(true, |s| s < THREAT_CUTOFF) {
            return None;
        }
        let (thrust, turn_rate) = evasion(ship, &mine.mask());
        Some(DodgeResponse {
            thrust,
            turn_rate,
            target: DodgeTarget::Mine,
            time_to_impact: None,
        })
    }
}
