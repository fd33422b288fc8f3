//! Enemy and sprite behavior rules for TDS.
//!
//! Pure functions over plain data: the chase step, the enemy lifecycle
//! state machine, and sprite facing. No ECS dependency.

pub mod facing;
pub mod fsm;

pub use tds_core as core;
