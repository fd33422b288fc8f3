//! Events emitted by the simulation for renderer and audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something that happened during a tick.
///
/// Events appear in the order they happened. When a tick ends a scene and
/// `auto_restart` sets up the next one, its snapshot carries `SceneEnded`
/// followed by `SceneStarted`; events after `SceneStarted` belong to the
/// new scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A scene was set up (first start or restart).
    SceneStarted { scene: u32 },
    /// An enemy appeared on the field perimeter.
    EnemySpawned { enemy_id: u32, position: Position },
    /// The player fired. `from` is the player centre, `to` the pointer in field space.
    ShotFired {
        from: Position,
        to: Position,
        hits: Vec<u32>,
    },
    /// An enemy was removed by a destroy message.
    EnemyDestroyed { enemy_id: u32 },
    /// The player touched a hazard.
    PlayerDied { position: Position },
    /// The scene stopped because the player is dead.
    SceneEnded { scene: u32, tick: u64 },
}
