//! Destroy-message delivery.

use hecs::World;

use tds_core::components::EnemyState;
use tds_core::enums::EnemyPhase;
use tds_core::events::GameEvent;

use crate::messages::EnemyMessage;

/// Mark every addressed enemy as destroyed. Cleanup removes them at the end
/// of the tick. Messages to missing or already destroyed enemies are dropped.
pub fn deliver(
    world: &mut World,
    messages: impl IntoIterator<Item = EnemyMessage>,
    events: &mut Vec<GameEvent>,
) {
    for message in messages {
        match message {
            EnemyMessage::Destroy(entity) => {
                if let Ok(mut state) = world.get::<&mut EnemyState>(entity) {
                    if state.phase != EnemyPhase::Destroyed {
                        state.phase = EnemyPhase::Destroyed;
                        events.push(GameEvent::EnemyDestroyed {
                            enemy_id: state.enemy_id,
                        });
                    }
                }
            }
        }
    }
}
