//! Offline breakpoint nudging.
//!
//! An actor proposes a bounded random move, a fixed critic scales it, and the
//! move is applied to one randomly chosen breakpoint if it keeps the triangle
//! ordered. Nothing here learns; it only perturbs a configuration file
//! between runs.

use rand::seq::SliceRandom;
use rand::Rng;

use fuzzifier_core::config::{Breakpoint, FuzzyConfig};

/// Largest move the actor proposes, either direction.
const ACTOR_RANGE: f64 = 5.0;

/// Critic scaling applied to every proposal.
const CRITIC_FACTOR: f64 = 0.5;

/// Draws tried before giving up on an unorderable move.
const MAX_ATTEMPTS: usize = 16;

pub struct Actor;

impl Actor {
    pub fn suggest(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(-ACTOR_RANGE..ACTOR_RANGE)
    }
}

pub struct Critic;

impl Critic {
    pub fn evaluate(&self, action: f64) -> f64 {
        action * CRITIC_FACTOR
    }
}

/// One applied adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuneStep {
    pub breakpoint: Breakpoint,
    pub before: f64,
    pub after: f64,
}

/// Nudge one breakpoint. Returns None when no valid move was found.
pub fn step(config: &mut FuzzyConfig, rng: &mut impl Rng) -> Option<TuneStep> {
    let (actor, critic) = (Actor, Critic);
    let breakpoints = FuzzyConfig::breakpoints();

    for _ in 0..MAX_ATTEMPTS {
        let breakpoint = *breakpoints.choose(rng)?;
        let before = config.get(breakpoint).ok()?;
        let delta = critic.evaluate(actor.suggest(rng));
        match config.adjust(breakpoint, delta) {
            Ok(after) => {
                return Some(TuneStep {
                    breakpoint,
                    before,
                    after,
                })
            }
            Err(err) => log::debug!("rejected move of {delta:.3}: {err}"),
        }
    }
    None
}
