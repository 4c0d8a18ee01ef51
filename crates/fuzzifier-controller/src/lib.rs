//! Per-tick decision making for Fuzzifier.
//!
//! Collision path prediction, the shoot and dodge planners, the forward
//! firing cone, the action queue and the arbitrator that merges planner
//! proposals into one control tuple. `Controller` ties them together.

pub mod actions;
pub mod arbiter;
pub mod cone;
pub mod controller;
pub mod dodge;
pub mod path;
pub mod shoot;

pub use fuzzifier_core as core;
pub use controller::{Controller, ControllerSettings};
