//! Entity spawn factories for setting up the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tds_core::components::*;
use tds_core::enums::*;
use tds_core::types::{Field, Position};

use crate::config::GameConfig;

/// Clear the world and place the player. Enemies come from the spawner.
pub fn setup_scene(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.clear();
    spawn_player(world, config)
}

/// Spawn the player at the configured start, clamped into the field.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> hecs::Entity {
    let size = config.player_size();
    let position = config.field().clamp(config.player_start(), size);

    world.spawn((
        Player,
        position,
        Hitbox {
            size,
            label: CollisionLabel::None,
        },
        Sprite::default(),
        PlayerState {
            alive: true,
            speed_x: config.player_speed_x,
            speed_y: config.player_speed_y,
        },
    ))
}

/// Pick a spawn point uniformly along the field boundary.
pub fn random_spawn_position(rng: &mut ChaCha8Rng, field: &Field) -> Position {
    let offset: f64 = rng.gen_range(0.0..field.perimeter());
    field.perimeter_point(offset)
}

/// Spawn a hazard enemy at `position`.
pub fn spawn_enemy(
    world: &mut World,
    config: &GameConfig,
    enemy_id: u32,
    position: Position,
    tick: u64,
) -> hecs::Entity {
    world.spawn((
        Enemy,
        position,
        Hitbox {
            size: config.enemy_size(),
            label: CollisionLabel::Hazard,
        },
        Sprite::default(),
        EnemyState {
            enemy_id,
            phase: EnemyPhase::Spawned,
            speed: config.enemy_speed,
            spawned_at_tick: tick,
        },
    ))
}
