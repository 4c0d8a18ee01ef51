//! Fundamental geometric types.
//!
//! Angles are in degrees, measured counter-clockwise from +x, matching the
//! host simulation's heading convention.

use serde::{Deserialize, Serialize};

/// 2D position in map units. Immutable once built; replace it, never mutate it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    x: f64,
    y: f64,
}

/// 2D velocity in map units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Vector pointing from `self` to `other`.
    pub fn vector_to(&self, other: &Position) -> Velocity {
        Velocity::new(other.x - self.x, other.y - self.y)
    }

    /// Bearing to another position in degrees, [0, 360).
    /// Returns None for coincident points.
    pub fn bearing_to(&self, other: &Position) -> Option<f64> {
        self.vector_to(other).direction()
    }

    /// Position reached after moving along `velocity` for `secs`.
    pub fn advanced(&self, velocity: &Velocity, secs: f64) -> Position {
        Position::new(self.x + velocity.x * secs, self.y + velocity.y * secs)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity from a speed and a heading in degrees.
    pub fn from_polar(speed: f64, heading_deg: f64) -> Self {
        let rad = heading_deg.to_radians();
        Self::new(speed * rad.cos(), speed * rad.sin())
    }

    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn speed_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: &Velocity) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Direction of the vector in degrees, [0, 360). None for the zero vector.
    pub fn direction(&self) -> Option<f64> {
        if self.is_zero() {
            return None;
        }
        Some(normalize_heading(self.y.atan2(self.x).to_degrees()))
    }

    /// Unsigned angle to another vector in degrees, [0, 180].
    ///
    /// cosθ = (v·w) / (|v||w|). Zero-length vectors have no direction, so the
    /// angle is reported as 0.
    pub fn angle_between(&self, other: &Velocity) -> f64 {
        let norms = self.speed() * other.speed();
        if norms == 0.0 || !norms.is_finite() {
            return 0.0;
        }
        let cos = (self.dot(other) / norms).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

impl From<[f64; 2]> for Position {
    fn from(v: [f64; 2]) -> Self {
        Position::new(v[0], v[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl From<[f64; 2]> for Velocity {
    fn from(v: [f64; 2]) -> Self {
        Velocity::new(v[0], v[1])
    }
}

impl From<Velocity> for [f64; 2] {
    fn from(v: Velocity) -> Self {
        [v.x, v.y]
    }
}

/// Wrap a heading into [0, 360).
pub fn normalize_heading(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to` in degrees, [-180, 180).
///
/// Both headings are brought into a common range first, so bearings on either
/// side of the 0/360 seam compare correctly (355 → 5 is +10).
pub fn heading_error(to: f64, from: f64) -> f64 {
    let error = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    if error >= 180.0 {
        error - 360.0
    } else {
        error
    }
}
