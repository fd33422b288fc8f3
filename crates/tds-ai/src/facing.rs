//! Sprite facing from horizontal movement.

use tds_core::enums::Facing;

/// Facing after moving `dx` horizontally this tick.
///
/// Flips only when the sign of `dx` disagrees with `current`.
/// A zero (or NaN) delta keeps the current facing.
pub fn update_facing(current: Facing, dx: f64) -> Facing {
    if dx > 0.0 {
        if current == Facing::Left {
            return Facing::Right;
        }
    } else if dx < 0.0 && current == Facing::Right {
        return Facing::Left;
    }
    current
}
