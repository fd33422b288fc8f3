//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only.

use hecs::World;

use tds_core::components::*;
use tds_core::enums::*;
use tds_core::events::GameEvent;
use tds_core::input::HeldKeys;
use tds_core::state::*;
use tds_core::types::{Field, Position, SimTime};

/// Everything outside the world that a snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: ScenePhase,
    pub scene: u32,
    pub field: Field,
    pub camera: CameraView,
    pub held_keys: HeldKeys,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        scene: ctx.scene,
        field: ctx.field,
        player: build_player(world),
        enemies: build_enemies(world),
        camera: ctx.camera,
        held_keys: ctx.held_keys,
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Hitbox, &Sprite, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, hitbox, sprite, state))| PlayerView {
            position: *pos,
            size: hitbox.size,
            facing: sprite.facing,
            alive: state.alive,
        })
}

/// Live enemies sorted by id. Destroyed ones awaiting cleanup are left out.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Hitbox, &Sprite, &EnemyState)>()
        .iter()
        .filter(|(_, (_, _, _, _, state))| state.phase != EnemyPhase::Destroyed)
        .map(|(_, (_, pos, hitbox, sprite, state))| EnemyView {
            enemy_id: state.enemy_id,
            position: *pos,
            size: hitbox.size,
            facing: sprite.facing,
        })
        .collect();

    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}
