//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or is passed in.

pub mod aim;
pub mod camera;
pub mod cleanup;
pub mod destroy;
pub mod enemy_ai;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
