//! Hazard queries over the ECS world.
//!
//! Only what the game rules need: box overlap for player contact and
//! segment intersection for the aim ray. Destroyed enemies are ignored.

use hecs::{Entity, World};

use tds_core::components::{EnemyState, Hitbox};
use tds_core::enums::{CollisionLabel, EnemyPhase};
use tds_core::types::{Position, Rect};

/// A hazard-labelled entity and its collision box.
#[derive(Debug, Clone, Copy)]
pub struct HazardBox {
    pub entity: Entity,
    pub enemy_id: u32,
    pub rect: Rect,
}

/// All live hazards, ordered by enemy id.
pub fn hazards(world: &World) -> Vec<HazardBox> {
    let mut hazards: Vec<HazardBox> = world
        .query::<(&Position, &Hitbox, &EnemyState)>()
        .iter()
        .filter(|(_, (_, hitbox, state))| {
            hitbox.label == CollisionLabel::Hazard && state.phase != EnemyPhase::Destroyed
        })
        .map(|(entity, (pos, hitbox, state))| HazardBox {
            entity,
            enemy_id: state.enemy_id,
            rect: Rect::new(*pos, hitbox.size),
        })
        .collect();

    hazards.sort_by_key(|h| h.enemy_id);
    hazards
}

/// Whether `rect` overlaps any of `hazards`.
pub fn hits_any(rect: &Rect, hazards: &[HazardBox]) -> bool {
    hazards.iter().any(|h| h.rect.overlaps(rect))
}

/// Hazards crossed by the segment `from -> to`, nearest first.
/// The cast distance is the segment length; nothing beyond `to` is hit.
pub fn cast_segment(world: &World, from: Position, to: Position) -> Vec<HazardBox> {
    let mut hits: Vec<(f64, HazardBox)> = hazards(world)
        .into_iter()
        .filter_map(|h| h.rect.segment_entry(from, to).map(|t| (t, h)))
        .collect();

    hits.sort_by(|(ta, a), (tb, b)| ta.total_cmp(tb).then(a.enemy_id.cmp(&b.enemy_id)));
    hits.into_iter().map(|(_, h)| h).collect()
}
