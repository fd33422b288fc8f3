//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Horizontal facing of a sprite. Renderers pick the left or mirrored frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Collision classification used by overlap and aim queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLabel {
    /// Not considered by hazard queries.
    #[default]
    None,
    /// Kills the player on contact and can be shot.
    Hazard,
}

/// Movement keys the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// Enemy lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Created this tick, has not moved yet.
    #[default]
    Spawned,
    /// Moving toward the player every tick.
    Chasing,
    /// Received a destroy message. Removed by cleanup.
    Destroyed,
}

/// Scene phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Engine created, no scene set up yet.
    #[default]
    Loading,
    Running,
    Paused,
    /// Player died and the scene was not restarted.
    Ended,
}
