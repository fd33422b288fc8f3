//! Game state snapshot: the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::input::HeldKeys;
use crate::types::{Field, Position, SimTime, Size};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: ScenePhase,
    /// Number of scenes started so far (1 for the first scene).
    pub scene: u32,
    pub field: Field,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub camera: CameraView,
    pub held_keys: HeldKeys,
    pub events: Vec<GameEvent>,
}

/// The player as a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub size: Size,
    pub facing: Facing,
    pub alive: bool,
}

/// One enemy as a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub position: Position,
    pub size: Size,
    pub facing: Facing,
}

/// Camera (viewport) placement in field space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    /// Top-left corner of the visible screen.
    pub offset: Position,
    pub screen: Size,
}
