//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::input::HeldKeys;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// A movement key went down.
    KeyDown { key: MoveKey },
    /// A movement key was released.
    KeyUp { key: MoveKey },
    /// Replace the whole held-key set (for hosts that poll input).
    SetHeldKeys { keys: HeldKeys },

    // --- Combat ---
    /// Pointer press at screen coordinates. Fires a hit-scan shot from the
    /// player's centre to the pointer, translated by the camera offset.
    Aim { screen_x: f64, screen_y: f64 },

    // --- Scene control ---
    /// Set up a fresh scene and start running it.
    StartScene,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
