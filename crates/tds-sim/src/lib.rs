//! Simulation engine for TDS.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the host.

pub mod collision;
pub mod config;
pub mod engine;
pub mod messages;
pub mod systems;
pub mod world_setup;

pub use config::GameConfig;
pub use engine::{SimConfig, SimulationEngine};
pub use tds_core as core;
