//! Core types and definitions for the Fuzzifier controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! host records, typed views, fuzzy configuration, control output, and constants.
//! It has no dependency on the host simulation or any runtime framework.

pub mod config;
pub mod constants;
pub mod control;
pub mod enums;
pub mod records;
pub mod types;
pub mod views;

/// Asteroids are identified by their index in the host's asteroid list for the current tick.
pub type AsteroidId = usize;

#[cfg(test)]
mod tests;
