//! Cleanup system: removes destroyed enemies.

use hecs::{Entity, World};

use tds_core::components::{Enemy, EnemyState};
use tds_core::enums::EnemyPhase;

/// Despawn every enemy in the Destroyed phase.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_enemy, state)) in world.query_mut::<(&Enemy, &EnemyState)>() {
        if state.phase == EnemyPhase::Destroyed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
