//! Held movement keys, stored as a bitset.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::MoveKey;

/// Set of movement keys currently held down.
/// Serialised as its raw bits; unknown bits are dropped on the way in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct HeldKeys(u8);

impl From<u8> for HeldKeys {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<HeldKeys> for u8 {
    fn from(keys: HeldKeys) -> Self {
        keys.bits()
    }
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys(0);

    fn bit(key: MoveKey) -> u8 {
        match key {
            MoveKey::Up => 0b0001,
            MoveKey::Down => 0b0010,
            MoveKey::Left => 0b0100,
            MoveKey::Right => 0b1000,
        }
    }

    pub fn from_keys(keys: impl IntoIterator<Item = MoveKey>) -> Self {
        let mut held = Self::NONE;
        for key in keys {
            held.press(key);
        }
        held
    }

    pub fn press(&mut self, key: MoveKey) {
        self.0 |= Self::bit(key);
    }

    pub fn release(&mut self, key: MoveKey) {
        self.0 &= !Self::bit(key);
    }

    pub fn is_down(&self, key: MoveKey) -> bool {
        self.0 & Self::bit(key) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bits, low nibble only.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Build from raw bits. Unknown bits are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Per-tick movement for these keys at the given per-axis speed.
    /// Opposite keys cancel out.
    pub fn delta(&self, speed: DVec2) -> DVec2 {
        let mut delta = DVec2::ZERO;
        if self.is_down(MoveKey::Up) {
            delta.y -= speed.y;
        }
        if self.is_down(MoveKey::Left) {
            delta.x -= speed.x;
        }
        if self.is_down(MoveKey::Down) {
            delta.y += speed.y;
        }
        if self.is_down(MoveKey::Right) {
            delta.x += speed.x;
        }
        delta
    }

    /// Every combination of the four keys, including none.
    pub fn all_combinations() -> impl Iterator<Item = HeldKeys> {
        (0u8..16).map(HeldKeys)
    }
}
