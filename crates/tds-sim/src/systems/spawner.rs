//! Enemy spawning system: one enemy on the field boundary every N ticks.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use tds_core::events::GameEvent;

use crate::config::GameConfig;
use crate::world_setup;

/// Spawn an enemy when `current_tick` is a multiple of the spawn interval.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    current_tick: u64,
    next_enemy_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if config.enemy_spawn_interval_ticks == 0
        || current_tick % config.enemy_spawn_interval_ticks != 0
    {
        return;
    }

    let position = world_setup::random_spawn_position(rng, &config.field());
    let enemy_id = *next_enemy_id;
    *next_enemy_id += 1;
    world_setup::spawn_enemy(world, config, enemy_id, position, current_tick);

    log::debug!(
        "Enemy {enemy_id} spawned at ({:.1}, {:.1}) on tick {current_tick}",
        position.x,
        position.y
    );
    events.push(GameEvent::EnemySpawned { enemy_id, position });
}
