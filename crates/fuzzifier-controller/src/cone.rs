//! Forward firing cone: asteroids already roughly in front of the ship.

use fuzzifier_core::constants::{FIRING_CONE_ANGLE, FIRING_CONE_LENGTH};
use fuzzifier_core::views::{AsteroidData, ShipData};
use fuzzifier_core::AsteroidId;
use fuzzifier_geometry::{to_vec, wedge, ConvexPolygon};

pub fn firing_cone(ship: &ShipData) -> Option<ConvexPolygon> {
    wedge(
        to_vec(&ship.position),
        ship.heading,
        FIRING_CONE_ANGLE,
        FIRING_CONE_LENGTH,
    )
}

/// Indices, ascending, of asteroids whose centers lie in the firing cone.
pub fn asteroids_in_cone(ship: &ShipData, asteroids: &[AsteroidData]) -> Vec<AsteroidId> {
    let Some(cone) = firing_cone(ship) else {
        return Vec::new();
    };
    asteroids
        .iter()
        .enumerate()
        .filter(|(_, a)| cone.contains(to_vec(&a.position)))
        .map(|(i, _)| i)
        .collect()
}
