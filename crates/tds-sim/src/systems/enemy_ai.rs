//! Enemy AI system: every enemy steps toward the player each tick.
//!
//! Calls the enemy FSM from tds-ai and writes the result back.

use hecs::World;

use tds_ai::fsm::{evaluate, EnemyContext};
use tds_core::components::{Enemy, EnemyState, Player, Sprite};
use tds_core::types::Position;

pub fn run(world: &mut World) {
    let target = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);
    let Some(target) = target else {
        return;
    };

    for (_entity, (_enemy, pos, sprite, state)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Sprite, &mut EnemyState)>()
    {
        let ctx = EnemyContext {
            phase: state.phase,
            position: *pos,
            facing: sprite.facing,
            target,
            speed: state.speed,
        };

        let update = evaluate(&ctx);
        *pos = pos.offset(update.delta);
        sprite.facing = update.new_facing;
        state.phase = update.new_phase;
    }
}
