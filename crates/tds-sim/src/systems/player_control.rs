//! Player controller: held-key movement, field clamping, facing, hazard contact.

use glam::DVec2;
use hecs::World;

use tds_ai::facing::update_facing;
use tds_core::components::{Hitbox, Player, PlayerState, Sprite};
use tds_core::events::GameEvent;
use tds_core::input::HeldKeys;
use tds_core::types::{Field, Position, Rect};

use crate::collision;

/// Move the player for one tick: held-key delta, field clamp, facing.
pub fn run(world: &mut World, keys: HeldKeys, field: &Field) {
    for (_entity, (_player, pos, hitbox, state, sprite)) in world.query_mut::<(
        &Player,
        &mut Position,
        &Hitbox,
        &PlayerState,
        &mut Sprite,
    )>() {
        let delta = keys.delta(DVec2::new(state.speed_x, state.speed_y));
        *pos = field.clamp(pos.offset(delta), hitbox.size);
        sprite.facing = update_facing(sprite.facing, delta.x);
    }
}

/// Check the player against every live hazard once everything has moved.
///
/// Returns a `PlayerDied` event on the first tick the player overlaps a hazard.
pub fn check_contact(world: &mut World) -> Option<GameEvent> {
    // Gather hazards first; the player query below borrows mutably.
    let hazards = collision::hazards(world);
    let mut died = None;

    for (_entity, (_player, pos, hitbox, state)) in
        world.query_mut::<(&Player, &Position, &Hitbox, &mut PlayerState)>()
    {
        if state.alive && collision::hits_any(&Rect::new(*pos, hitbox.size), &hazards) {
            state.alive = false;
            log::info!("Player hit a hazard at ({:.1}, {:.1})", pos.x, pos.y);
            died = Some(GameEvent::PlayerDied { position: *pos });
        }
    }

    died
}

/// Player position and alive flag, if a player exists.
pub fn player_status(world: &World) -> Option<(Position, bool)> {
    world
        .query::<(&Player, &Position, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, state))| (*pos, state.alive))
}
