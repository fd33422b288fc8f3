//! TDS headless host.
//!
//! This crate runs the simulation on a fixed-rate game loop thread and
//! exposes it over a JSON-lines protocol on stdin/stdout.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use tds_core as core;
