//! Seeded synthetic asteroid fields for replay.
//!
//! Asteroids drift in straight lines around a stationary ship; the ship keeps
//! its starting heading. Same seed, same frames.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fuzzifier_core::constants::{DT, MAP_SIZE};
use fuzzifier_core::records::{AsteroidRecord, GameFrame, MineRecord, ShipRecord};
use fuzzifier_core::types::{Position, Velocity};

/// Parameters for one synthetic run.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub seed: u64,
    pub frames: usize,
    pub asteroids: usize,
    pub mines: usize,
    pub max_speed: f64,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            seed: 42,
            frames: 300,
            asteroids: 12,
            mines: 0,
            max_speed: 180.0,
        }
    }
}

fn random_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(rng.gen_range(0.0..MAP_SIZE.0), rng.gen_range(0.0..MAP_SIZE.1))
}

/// Generate `spec.frames` consecutive frames.
pub fn generate(spec: &FieldSpec) -> Vec<GameFrame> {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);

    let ship = ShipRecord {
        position: Position::new(MAP_SIZE.0 * 0.5, MAP_SIZE.1 * 0.5),
        velocity: Velocity::ZERO,
        heading: rng.gen_range(0.0..360.0),
        radius: 20.0,
    };

    let mut asteroids: Vec<AsteroidRecord> = (0..spec.asteroids)
        .map(|_| {
            let size = rng.gen_range(1..=4u8);
            AsteroidRecord {
                position: random_position(&mut rng),
                velocity: Velocity::from_polar(
                    rng.gen_range(0.0..spec.max_speed),
                    rng.gen_range(0.0..360.0),
                ),
                radius: 8.0 * size as f64,
                size,
            }
        })
        .collect();

    let mut mines: Vec<MineRecord> = (0..spec.mines)
        .map(|_| MineRecord {
            position: random_position(&mut rng),
            remaining_time: rng.gen_range(1.0..3.0),
        })
        .collect();

    let mut frames = Vec::with_capacity(spec.frames);
    for _ in 0..spec.frames {
        frames.push(GameFrame {
            ship: ship.clone(),
            asteroids: asteroids.clone(),
            mines: mines.clone(),
        });
        for a in &mut asteroids {
            a.position = a.position.advanced(&a.velocity, DT);
        }
        for m in &mut mines {
            m.remaining_time -= DT;
        }
        mines.retain(|m| m.remaining_time > 0.0);
    }
    frames
}
