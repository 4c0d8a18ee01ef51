//! Enumeration types used throughout the controller.

use serde::{Deserialize, Serialize};

/// Behavior an action queue entry asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Shoot,
    Dodge,
}

/// Coarse direction the ship is facing, derived from its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Up,
    Left,
    Down,
}

impl Facing {
    /// Bucket a heading in degrees. Headings outside [0, 360) are wrapped first.
    pub fn from_heading(heading_deg: f64) -> Self {
        let h = crate::types::normalize_heading(heading_deg);
        if (45.0..135.0).contains(&h) {
            Facing::Up
        } else if (135.0..225.0).contains(&h) {
            Facing::Left
        } else if (225.0..315.0).contains(&h) {
            Facing::Down
        } else {
            Facing::Right
        }
    }

    /// Whether a response toward an object in `quadrant` must be mirrored.
    pub fn flips(self, quadrant: Quadrant) -> bool {
        use Quadrant::*;
        match self {
            Facing::Up => matches!(quadrant, Third | Fourth),
            Facing::Down => matches!(quadrant, First | Second),
            Facing::Left => matches!(quadrant, First | Fourth),
            Facing::Right => matches!(quadrant, Second | Third),
        }
    }
}

/// Cartesian quadrant of a vector. Points on an axis fall into the quadrant
/// on their negative side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub fn of(x: f64, y: f64) -> Self {
        match (x > 0.0, y > 0.0) {
            (true, true) => Quadrant::First,
            (true, false) => Quadrant::Fourth,
            (false, true) => Quadrant::Second,
            (false, false) => Quadrant::Third,
        }
    }
}

/// Linguistic terms for the distance input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceTerm {
    Close,
    Near,
    Far,
}

impl DistanceTerm {
    pub const ALL: [DistanceTerm; 3] = [DistanceTerm::Close, DistanceTerm::Near, DistanceTerm::Far];

    pub fn name(self) -> &'static str {
        match self {
            DistanceTerm::Close => "close",
            DistanceTerm::Near => "near",
            DistanceTerm::Far => "far",
        }
    }
}

/// Linguistic terms for the angle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleTerm {
    Acute,
    Right,
    Obtuse,
}

impl AngleTerm {
    pub const ALL: [AngleTerm; 3] = [AngleTerm::Acute, AngleTerm::Right, AngleTerm::Obtuse];

    pub fn name(self) -> &'static str {
        match self {
            AngleTerm::Acute => "acute",
            AngleTerm::Right => "right",
            AngleTerm::Obtuse => "obtuse",
        }
    }
}

/// Linguistic terms for the threat-level output, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatTerm {
    Low,
    Medium,
    High,
}

impl ThreatTerm {
    pub const ALL: [ThreatTerm; 3] = [ThreatTerm::Low, ThreatTerm::Medium, ThreatTerm::High];
}
