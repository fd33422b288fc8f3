//! Hit-scan aim: a ray from the player's centre to the pointer.

use hecs::World;

use tds_core::components::{Hitbox, Player};
use tds_core::state::CameraView;
use tds_core::types::{Position, Rect};

use crate::collision;
use crate::messages::EnemyMessage;
use crate::systems::camera;

/// Result of one aim action.
#[derive(Debug, Clone)]
pub struct Shot {
    /// Player centre in field space.
    pub from: Position,
    /// Pointer position in field space.
    pub to: Position,
    /// Ids of the enemies on the ray, nearest first.
    pub hit_ids: Vec<u32>,
    /// One destroy message per enemy hit.
    pub messages: Vec<EnemyMessage>,
}

/// Cast from the player's centre toward the pointer.
/// Returns `None` when there is no player.
pub fn fire(world: &World, camera_view: &CameraView, screen_x: f64, screen_y: f64) -> Option<Shot> {
    let from = world
        .query::<(&Player, &Position, &Hitbox)>()
        .iter()
        .next()
        .map(|(_, (_, pos, hitbox))| Rect::new(*pos, hitbox.size).center())?;
    let to = camera::screen_to_field(camera_view, screen_x, screen_y);

    let hits = collision::cast_segment(world, from, to);
    Some(Shot {
        from,
        to,
        hit_ids: hits.iter().map(|h| h.enemy_id).collect(),
        messages: hits
            .iter()
            .map(|h| EnemyMessage::Destroy(h.entity))
            .collect(),
    })
}
