//! Messages passed between simulation components within a tick.

use hecs::Entity;

/// A message addressed to one enemy entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyMessage {
    /// Remove the enemy from the world. Raised by the player's aim action.
    Destroy(Entity),
}
