//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Field ---

/// Playable field width in pixels.
pub const FIELD_WIDTH: f64 = 1000.0;

/// Playable field height in pixels.
pub const FIELD_HEIGHT: f64 = 1000.0;

// --- Screen / camera ---

/// Visible screen width in pixels.
pub const SCREEN_WIDTH: f64 = 640.0;

/// Visible screen height in pixels.
pub const SCREEN_HEIGHT: f64 = 480.0;

// --- Player ---

/// Player spawn position (top-left corner).
pub const PLAYER_START_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 100.0;

/// Player hitbox size.
pub const PLAYER_WIDTH: f64 = 32.0;
pub const PLAYER_HEIGHT: f64 = 32.0;

/// Player movement per tick along each axis while a key is held.
pub const PLAYER_SPEED_X: f64 = 5.0;
pub const PLAYER_SPEED_Y: f64 = 5.0;

// --- Enemies ---

/// Enemy hitbox size.
pub const ENEMY_WIDTH: f64 = 16.0;
pub const ENEMY_HEIGHT: f64 = 16.0;

/// Distance an enemy covers per tick while chasing.
pub const ENEMY_SPEED: f64 = 2.0;

/// One enemy spawns every this many ticks.
pub const ENEMY_SPAWN_INTERVAL_TICKS: u64 = 25;
