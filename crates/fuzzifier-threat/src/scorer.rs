//! Threat scorer: ranks asteroids by fuzzy threat level and collects the
//! proximity set.
//!
//! Scoring is a pure function of the views for one tick. Large fields fan out
//! over rayon; results are gathered back in asteroid-index order before any
//! ranking, so the parallel and sequential paths agree exactly.

use rayon::prelude::*;

use fuzzifier_core::config::FuzzyConfig;
use fuzzifier_core::constants::{
    MAX_THREATS, PARALLEL_SCORING_THRESHOLD, PROXIMITY_RANGE, THREAT_CUTOFF, THREAT_DISTANCE_CLAMP,
};
use fuzzifier_core::views::{AsteroidData, MineData};
use fuzzifier_core::AsteroidId;

use crate::inference::ThreatFis;

/// Ranked threats for one tick: scores at or above the cut-off, highest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatMap {
    entries: Vec<(AsteroidId, f64)>,
}

impl ThreatMap {
    /// Keep scores ≥ the cut-off, rank by (score desc, index asc), cap the count.
    pub fn from_scores(scores: impl IntoIterator<Item = (AsteroidId, Option<f64>)>) -> Self {
        let mut entries: Vec<(AsteroidId, f64)> = scores
            .into_iter()
            .filter_map(|(id, score)| score.map(|s| (id, s)))
            .filter(|&(_, s)| s >= THREAT_CUTOFF)
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(MAX_THREATS);
        Self { entries }
    }

    /// Build directly from known scores, ranked but not filtered.
    pub fn from_entries(mut entries: Vec<(AsteroidId, f64)>) -> Self {
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        Self { entries }
    }

    pub fn get(&self, id: AsteroidId) -> Option<f64> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, s)| *s)
    }

    /// Whether `id` is ranked with a score at or above the cut-off.
    pub fn is_threat(&self, id: AsteroidId) -> bool {
        self.get(id).is_some_and(|s| s >= THREAT_CUTOFF)
    }

    /// Highest-ranked threat.
    pub fn top(&self) -> Option<(AsteroidId, f64)> {
        self.entries.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AsteroidId, f64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Asteroids within a distance threshold, nearest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximitySet {
    threshold: f64,
    entries: Vec<(AsteroidId, f64)>,
}

impl ProximitySet {
    /// Keep distances ≤ `threshold`, sorted by (distance, index).
    pub fn from_distances(
        distances: impl IntoIterator<Item = (AsteroidId, f64)>,
        threshold: f64,
    ) -> Self {
        let mut entries: Vec<(AsteroidId, f64)> = distances
            .into_iter()
            .filter(|&(_, d)| d <= threshold)
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        Self { threshold, entries }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn nearest(&self) -> Option<(AsteroidId, f64)> {
        self.entries.first().copied()
    }

    /// The `n` nearest entries.
    pub fn closest(&self, n: usize) -> &[(AsteroidId, f64)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, id: AsteroidId) -> Option<f64> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AsteroidId, f64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the planners need from one scoring pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatReport {
    pub threats: ThreatMap,
    pub proximity: ProximitySet,
    /// Nearest asteroid overall, regardless of range.
    pub nearest: Option<(AsteroidId, f64)>,
}

/// Scores asteroids with the threat FIS.
#[derive(Debug, Clone)]
pub struct ThreatScorer {
    fis: ThreatFis,
    proximity_range: f64,
    parallel_threshold: usize,
}

impl ThreatScorer {
    pub fn new(config: FuzzyConfig) -> Self {
        Self {
            fis: ThreatFis::new(config),
            proximity_range: PROXIMITY_RANGE,
            parallel_threshold: PARALLEL_SCORING_THRESHOLD,
        }
    }

    pub fn with_proximity_range(mut self, range: f64) -> Self {
        self.proximity_range = range;
        self
    }

    /// Asteroid count at which scoring fans out. 0 always fans out;
    /// `usize::MAX` never does.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn fis(&self) -> &ThreatFis {
        &self.fis
    }

    /// Threat level of one asteroid, None when no rule fires.
    pub fn score_asteroid(&self, asteroid: &AsteroidData) -> Option<f64> {
        self.fis
            .evaluate(asteroid.distance.min(THREAT_DISTANCE_CLAMP), asteroid.angle)
    }

    /// Threat level of a mine, scored as a stationary asteroid.
    pub fn score_mine(&self, mine: &MineData) -> Option<f64> {
        self.score_asteroid(&mine.mask())
    }

    /// Score every asteroid and build the threat map and proximity set.
    pub fn score(&self, asteroids: &[AsteroidData]) -> ThreatReport {
        let scores: Vec<Option<f64>> = if asteroids.len() >= self.parallel_threshold {
            asteroids
                .par_iter()
                .map(|a| self.score_asteroid(a))
                .collect()
        } else {
            asteroids.iter().map(|a| self.score_asteroid(a)).collect()
        };

        let threats = ThreatMap::from_scores(scores.into_iter().enumerate());
        let proximity = ProximitySet::from_distances(
            asteroids.iter().map(|a| a.distance).enumerate(),
            self.proximity_range,
        );
        let nearest = asteroids
            .iter()
            .map(|a| a.distance)
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        log::debug!(
            "scored {} asteroids: {} threats, {} in proximity",
            asteroids.len(),
            threats.len(),
            proximity.len()
        );

        ThreatReport {
            threats,
            proximity,
            nearest,
        }
    }
}
