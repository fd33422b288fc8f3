//! Camera that follows the player, clamped to the field.

use hecs::World;

use tds_core::components::Player;
use tds_core::state::CameraView;
use tds_core::types::{Field, Position};

/// Place the camera so the player's anchor sits at the screen centre,
/// without showing anything outside the field.
pub fn follow(camera: &mut CameraView, target: Position, field: &Field) {
    let max_x = (field.width - camera.screen.width).max(0.0);
    let max_y = (field.height - camera.screen.height).max(0.0);
    camera.offset = Position::new(
        (target.x - camera.screen.width / 2.0).clamp(0.0, max_x),
        (target.y - camera.screen.height / 2.0).clamp(0.0, max_y),
    );
}

/// Follow the player entity, if any.
pub fn run(world: &World, camera: &mut CameraView, field: &Field) {
    let target = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);
    if let Some(target) = target {
        follow(camera, target, field);
    }
}

/// Translate screen coordinates into field space.
pub fn screen_to_field(camera: &CameraView, screen_x: f64, screen_y: f64) -> Position {
    Position::new(camera.offset.x + screen_x, camera.offset.y + screen_y)
}
