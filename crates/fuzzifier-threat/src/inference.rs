//! Mamdani fuzzy inference for asteroid threat level.
//!
//! Two inputs (distance, approach angle) and one output (threat level in
//! [-1, 1]). AND is `min`, implication clips the consequent with `min`,
//! aggregation is `max`, and the crisp result is the centroid of the
//! aggregated output. Pure data in, pure data out: the same configuration and
//! inputs always give the same bits back.

use fuzzifier_core::config::{FuzzyConfig, Triangle};
use fuzzifier_core::constants::{ANGLE_UNIVERSE, DISTANCE_UNIVERSE, THREAT_UNIVERSE};
use fuzzifier_core::enums::{AngleTerm, DistanceTerm, ThreatTerm};

use crate::membership::{triangular, Universe};

/// Fixed output membership functions.
const THREAT_LOW: Triangle = [-1.0, -1.0, 0.0];
const THREAT_MEDIUM: Triangle = [-1.0, 0.0, 1.0];
const THREAT_HIGH: Triangle = [0.0, 1.0, 1.0];

/// The full rule base: one rule per distance × angle combination.
pub const RULES: [(DistanceTerm, AngleTerm, ThreatTerm); 9] = [
    (DistanceTerm::Far, AngleTerm::Acute, ThreatTerm::Low),
    (DistanceTerm::Far, AngleTerm::Right, ThreatTerm::Low),
    (DistanceTerm::Far, AngleTerm::Obtuse, ThreatTerm::Low),
    (DistanceTerm::Near, AngleTerm::Acute, ThreatTerm::High),
    (DistanceTerm::Near, AngleTerm::Right, ThreatTerm::Medium),
    (DistanceTerm::Near, AngleTerm::Obtuse, ThreatTerm::Medium),
    (DistanceTerm::Close, AngleTerm::Acute, ThreatTerm::High),
    (DistanceTerm::Close, AngleTerm::Right, ThreatTerm::High),
    (DistanceTerm::Close, AngleTerm::Obtuse, ThreatTerm::Medium),
];

/// Consequent of the rule for one distance/angle combination.
pub fn consequent(distance: DistanceTerm, angle: AngleTerm) -> ThreatTerm {
    RULES
        .iter()
        .find(|(d, a, _)| *d == distance && *a == angle)
        .map(|(_, _, t)| *t)
        .unwrap_or(ThreatTerm::Low)
}

fn threat_triangle(term: ThreatTerm) -> &'static Triangle {
    match term {
        ThreatTerm::Low => &THREAT_LOW,
        ThreatTerm::Medium => &THREAT_MEDIUM,
        ThreatTerm::High => &THREAT_HIGH,
    }
}

/// Firing strength of each output term for one input pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Activation {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Activation {
    pub fn get(&self, term: ThreatTerm) -> f64 {
        match term {
            ThreatTerm::Low => self.low,
            ThreatTerm::Medium => self.medium,
            ThreatTerm::High => self.high,
        }
    }

    fn raise(&mut self, term: ThreatTerm, strength: f64) {
        let slot = match term {
            ThreatTerm::Low => &mut self.low,
            ThreatTerm::Medium => &mut self.medium,
            ThreatTerm::High => &mut self.high,
        };
        *slot = slot.max(strength);
    }
}

/// Threat fuzzy inference system built from a validated configuration.
#[derive(Debug, Clone)]
pub struct ThreatFis {
    config: FuzzyConfig,
    distance_universe: Universe,
    angle_universe: Universe,
    output_universe: Universe,
    /// Output term memberships sampled over `output_universe`, indexed low/medium/high.
    output_terms: [Vec<f64>; 3],
}

impl ThreatFis {
    pub fn new(config: FuzzyConfig) -> Self {
        let output_universe = Universe::new(THREAT_UNIVERSE);
        let output_terms = ThreatTerm::ALL.map(|t| output_universe.sample(threat_triangle(t)));
        Self {
            config,
            distance_universe: Universe::new(DISTANCE_UNIVERSE),
            angle_universe: Universe::new(ANGLE_UNIVERSE),
            output_universe,
            output_terms,
        }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Rule firing strengths for a crisp input pair, after clipping the
    /// inputs to their universes.
    pub fn activation(&self, distance: f64, angle: f64) -> Activation {
        let d = self.distance_universe.clip(distance);
        let a = self.angle_universe.clip(angle);

        let mut activation = Activation::default();
        for (d_term, a_term, t_term) in RULES {
            let mu_d = triangular(d, self.config.distance(d_term));
            let mu_a = triangular(a, self.config.angle(a_term));
            activation.raise(t_term, mu_d.min(mu_a));
        }
        activation
    }

    /// Crisp threat level in [-1, 1], or None when no rule fires.
    pub fn evaluate(&self, distance: f64, angle: f64) -> Option<f64> {
        if distance.is_nan() || angle.is_nan() {
            return None;
        }
        let activation = self.activation(distance, angle);

        let aggregated: Vec<f64> = (0..self.output_universe.points().len())
            .map(|i| {
                ThreatTerm::ALL
                    .iter()
                    .enumerate()
                    .map(|(k, &term)| activation.get(term).min(self.output_terms[k][i]))
                    .fold(0.0, f64::max)
            })
            .collect();

        centroid(self.output_universe.points(), &aggregated)
    }
}

/// Centroid of a piecewise-linear membership curve.
///
/// Each segment between samples is integrated exactly as a rectangle,
/// triangle or trapezoid. Returns None when the curve encloses no area.
pub fn centroid(x: &[f64], mfx: &[f64]) -> Option<f64> {
    let mut sum_moment_area = 0.0;
    let mut sum_area = 0.0;

    for i in 1..x.len().min(mfx.len()) {
        let (x1, x2) = (x[i - 1], x[i]);
        let (y1, y2) = (mfx[i - 1], mfx[i]);
        if (y1 == 0.0 && y2 == 0.0) || x1 == x2 {
            continue;
        }
        let width = x2 - x1;
        let (moment, area) = if y1 == y2 {
            (0.5 * (x1 + x2), width * y1)
        } else if y1 == 0.0 {
            (2.0 / 3.0 * width + x1, 0.5 * width * y2)
        } else if y2 == 0.0 {
            (1.0 / 3.0 * width + x1, 0.5 * width * y1)
        } else {
            (
                (2.0 / 3.0 * width * (y2 + 0.5 * y1)) / (y1 + y2) + x1,
                0.5 * width * (y1 + y2),
            )
        };
        sum_moment_area += moment * area;
        sum_area += area;
    }

    if sum_area <= 0.0 {
        return None;
    }
    Some(sum_moment_area / sum_area)
}
