//! Threat evaluation for Fuzzifier.
//!
//! Implements the fuzzy inference system that rates asteroids by collision
//! risk, and the scorer that ranks threats and builds the proximity set.

pub mod inference;
pub mod membership;
pub mod scorer;

pub use fuzzifier_core as core;
pub use inference::ThreatFis;
pub use scorer::{ProximitySet, ThreatMap, ThreatReport, ThreatScorer};

#[cfg(test)]
mod tests;
