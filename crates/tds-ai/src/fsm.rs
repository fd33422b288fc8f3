//! Enemy behavior finite state machine.
//!
//! Spawned -> Chasing (every tick) -> Destroyed. Destruction is triggered only
//! by an external destroy message; the FSM itself never leaves Chasing.

use glam::DVec2;

use tds_core::enums::{EnemyPhase, Facing};
use tds_core::types::Position;

use crate::facing::update_facing;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub phase: EnemyPhase,
    pub position: Position,
    pub facing: Facing,
    /// Current player position (top-left corner).
    pub target: Position,
    pub speed: f64,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_phase: EnemyPhase,
    pub delta: DVec2,
    pub new_facing: Facing,
}

/// Per-tick movement toward `target` with length `speed`.
///
/// When `from` and `target` coincide there is no direction to move in and
/// the step is zero.
pub fn chase_step(from: Position, target: Position, speed: f64) -> DVec2 {
    (target.as_vec() - from.as_vec()).normalize_or_zero() * speed
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.phase {
        EnemyPhase::Destroyed => EnemyUpdate {
            new_phase: EnemyPhase::Destroyed,
            delta: DVec2::ZERO,
            new_facing: ctx.facing,
        },
        EnemyPhase::Spawned | EnemyPhase::Chasing => {
            let delta = chase_step(ctx.position, ctx.target, ctx.speed);
            EnemyUpdate {
                new_phase: EnemyPhase::Chasing,
                delta,
                new_facing: update_facing(ctx.facing, delta.x),
            }
        }
    }
}
