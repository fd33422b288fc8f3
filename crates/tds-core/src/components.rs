//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Size;

/// Marks the player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy (hazard) entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Collision box anchored at the entity's Position (top-left).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub size: Size,
    pub label: CollisionLabel,
}

/// Sprite facing. Flips only when horizontal movement disagrees with it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Sprite {
    pub facing: Facing,
}

/// Player-only state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cleared on hazard contact; never set again within a scene.
    pub alive: bool,
    /// Movement per tick along each axis.
    pub speed_x: f64,
    pub speed_y: f64,
}

/// Enemy-only state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyState {
    /// Stable id for snapshots; entity handles are not exposed.
    pub enemy_id: u32,
    pub phase: EnemyPhase,
    /// Distance covered per tick.
    pub speed: f64,
    pub spawned_at_tick: u64,
}

// Position is defined in types.rs but used as an ECS component too.
