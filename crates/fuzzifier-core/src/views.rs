//! Typed views derived from host records.
//!
//! Views are rebuilt every tick and never persisted. Relative quantities
//! (vector to ship, distance, approach angle) are computed once here so the
//! scorer and planners read them instead of re-deriving them.

use crate::records::{AsteroidRecord, GameFrame, MineRecord, ShipRecord};
use crate::types::{normalize_heading, Position, Velocity};

/// View over the ship record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipData {
    pub position: Position,
    pub velocity: Velocity,
    /// Heading in degrees, [0, 360).
    pub heading: f64,
    pub radius: f64,
}

impl ShipData {
    pub fn new(ship: &ShipRecord) -> Self {
        Self {
            position: ship.position,
            velocity: ship.velocity,
            heading: normalize_heading(ship.heading),
            radius: ship.radius,
        }
    }
}

/// View over one asteroid relative to the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidData {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub size: u8,
    /// Vector from the asteroid to the ship.
    pub vector_to_ship: Velocity,
    /// Distance between asteroid and ship centers.
    pub distance: f64,
    /// Angle between `vector_to_ship` and the asteroid velocity, [0, 180].
    /// 0 means the asteroid is heading straight at the ship.
    pub angle: f64,
}

impl AsteroidData {
    pub fn new(asteroid: &AsteroidRecord, ship: &ShipData) -> Self {
        let vector_to_ship = asteroid.position.vector_to(&ship.position);
        Self {
            position: asteroid.position,
            velocity: asteroid.velocity,
            radius: asteroid.radius,
            size: asteroid.size,
            vector_to_ship,
            distance: vector_to_ship.speed(),
            angle: vector_to_ship.angle_between(&asteroid.velocity),
        }
    }
}

/// View over one mine relative to the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MineData {
    pub position: Position,
    pub remaining_time: f64,
    pub vector_to_ship: Velocity,
    pub distance: f64,
}

impl MineData {
    pub fn new(mine: &MineRecord, ship: &ShipData) -> Self {
        let vector_to_ship = mine.position.vector_to(&ship.position);
        Self {
            position: mine.position,
            remaining_time: mine.remaining_time,
            vector_to_ship,
            distance: vector_to_ship.speed(),
        }
    }

    /// Present the mine as a stationary asteroid so it can be scored like one.
    pub fn mask(&self) -> AsteroidData {
        AsteroidData {
            position: self.position,
            velocity: Velocity::ZERO,
            radius: 0.0,
            size: 1,
            vector_to_ship: self.vector_to_ship,
            distance: self.distance,
            angle: 0.0,
        }
    }
}

/// All views for one tick.
#[derive(Debug, Clone)]
pub struct FrameView {
    pub ship: ShipData,
    pub asteroids: Vec<AsteroidData>,
    pub mines: Vec<MineData>,
}

impl FrameView {
    pub fn new(frame: &GameFrame) -> Self {
        let ship = ShipData::new(&frame.ship);
        let asteroids = frame
            .asteroids
            .iter()
            .map(|a| AsteroidData::new(a, &ship))
            .collect();
        let mines = frame.mines.iter().map(|m| MineData::new(m, &ship)).collect();
        Self {
            ship,
            asteroids,
            mines,
        }
    }

    /// Mine closest to the ship, if any.
    pub fn nearest_mine(&self) -> Option<&MineData> {
        self.mines
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
