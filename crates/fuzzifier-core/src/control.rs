//! Control tuple returned to the host every tick.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_THRUST, MAX_TURN_RATE};

/// The host's per-tick control input. `Default` is the neutral no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlOutput {
    pub thrust: f64,
    /// Degrees per second, positive is counter-clockwise.
    pub turn_rate: f64,
    pub fire: bool,
    pub drop_mine: bool,
}

/// Replace NaN with 0 and clamp into [-limit, limit]. Infinities clamp.
pub fn sanitize(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}

impl ControlOutput {
    /// Clamp thrust and turn rate to platform limits, zeroing NaN.
    pub fn sanitized(self) -> Self {
        Self {
            thrust: sanitize(self.thrust, MAX_THRUST),
            turn_rate: sanitize(self.turn_rate, MAX_TURN_RATE),
            ..self
        }
    }

    pub fn as_tuple(&self) -> (f64, f64, bool, bool) {
        (self.thrust, self.turn_rate, self.fire, self.drop_mine)
    }
}
