//! Raw per-tick records supplied by the host simulation.
//!
//! Records are deserialized once at the boundary and validated in one place,
//! so the rest of the controller can assume finite, well-formed data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Position, Velocity};

/// A record field that failed validation.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("{record} {index}: field `{field}` is not finite")]
    NonFinite {
        record: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("{record} {index}: radius {radius} is negative")]
    NegativeRadius {
        record: &'static str,
        index: usize,
        radius: f64,
    },
}

/// Ship state as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub position: Position,
    pub velocity: Velocity,
    /// Heading in degrees, counter-clockwise from +x.
    pub heading: f64,
    pub radius: f64,
}

/// Asteroid state as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    /// Size class, 1 (smallest) to 4.
    pub size: u8,
}

/// Mine state as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineRecord {
    pub position: Position,
    /// Seconds until detonation.
    pub remaining_time: f64,
}

/// Everything the host hands the controller for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFrame {
    pub ship: ShipRecord,
    #[serde(default)]
    pub asteroids: Vec<AsteroidRecord>,
    #[serde(default)]
    pub mines: Vec<MineRecord>,
}

fn check_finite(
    value: f64,
    record: &'static str,
    index: usize,
    field: &'static str,
) -> Result<(), RecordError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RecordError::NonFinite {
            record,
            index,
            field,
        })
    }
}

fn check_radius(radius: f64, record: &'static str, index: usize) -> Result<(), RecordError> {
    check_finite(radius, record, index, "radius")?;
    if radius < 0.0 {
        return Err(RecordError::NegativeRadius {
            record,
            index,
            radius,
        });
    }
    Ok(())
}

impl ShipRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        check_finite(self.position.x(), "ship", 0, "position.x")?;
        check_finite(self.position.y(), "ship", 0, "position.y")?;
        check_finite(self.velocity.x, "ship", 0, "velocity.x")?;
        check_finite(self.velocity.y, "ship", 0, "velocity.y")?;
        check_finite(self.heading, "ship", 0, "heading")?;
        check_radius(self.radius, "ship", 0)
    }
}

impl AsteroidRecord {
    pub fn validate(&self, index: usize) -> Result<(), RecordError> {
        check_finite(self.position.x(), "asteroid", index, "position.x")?;
        check_finite(self.position.y(), "asteroid", index, "position.y")?;
        check_finite(self.velocity.x, "asteroid", index, "velocity.x")?;
        check_finite(self.velocity.y, "asteroid", index, "velocity.y")?;
        check_radius(self.radius, "asteroid", index)
    }
}

impl MineRecord {
    pub fn validate(&self, index: usize) -> Result<(), RecordError> {
        check_finite(self.position.x(), "mine", index, "position.x")?;
        check_finite(self.position.y(), "mine", index, "position.y")?;
        check_finite(self.remaining_time, "mine", index, "remaining_time")
    }
}

impl GameFrame {
    /// Validate every record in the frame, reporting the first bad field.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.ship.validate()?;
        for (i, asteroid) in self.asteroids.iter().enumerate() {
            asteroid.validate(i)?;
        }
        for (i, mine) in self.mines.iter().enumerate() {
            mine.validate(i)?;
        }
        Ok(())
    }
}
