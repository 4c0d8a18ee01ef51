//! Merges planner proposals into one control tuple.

use serde::{Deserialize, Serialize};

use fuzzifier_core::constants::DODGE_TURN_WEIGHT;
use fuzzifier_core::control::ControlOutput;

use crate::dodge::DodgeResponse;
use crate::shoot::ShootDecision;

/// How the shoot and dodge turn requests combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnMerge {
    /// A dodge in progress replaces the shoot turn entirely.
    #[default]
    DodgeOverride,
    /// Always add the shoot turn and the weighted dodge turn.
    Sum,
}

/// Combine this tick's proposals. Thrust comes only from the dodge, fire only
/// from the shot. The result is clamped with NaN zeroed.
pub fn merge(
    policy: TurnMerge,
    shoot: Option<&ShootDecision>,
    dodge: Option<&DodgeResponse>,
) -> ControlOutput {
    let shoot_turn = shoot.map_or(0.0, |s| s.turn_rate);
    let dodge_turn = dodge.map_or(0.0, |d| d.turn_rate * DODGE_TURN_WEIGHT);

    let turn_rate = match (policy, dodge) {
        (TurnMerge::DodgeOverride, Some(_)) => dodge_turn,
        _ => shoot_turn + dodge_turn,
    };

    ControlOutput {
        thrust: dodge.map_or(0.0, |d| d.thrust),
        turn_rate,
        fire: shoot.is_some_and(|s| s.fire),
        drop_mine: false,
    }
    .sanitized()
}
