//! State shared between the host threads and the game loop thread.

use std::time::Duration;

use tds_core::commands::PlayerCommand;
use tds_core::constants::TICK_RATE;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the input thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop paces itself and when it stops.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Emit every n-th snapshot. Values below 1 are treated as 1.
    pub snapshot_every: u64,
    /// Wall-clock time per tick. Zero runs ticks back to back.
    pub tick_duration: Duration,
    /// Start the first scene without waiting for a `StartScene` command.
    pub auto_start: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            snapshot_every: 1,
            tick_duration: TICK_DURATION,
            auto_start: true,
        }
    }
}

impl LoopOptions {
    /// Whether the snapshot of the `n`-th tick (1-based) should be emitted.
    pub fn emits(&self, n: u64) -> bool {
        n % self.snapshot_every.max(1) == 0
    }

    /// Whether the loop is done after running `n` ticks.
    pub fn finished(&self, n: u64) -> bool {
        self.max_ticks.is_some_and(|max| n >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LoopOptions::default();
        assert_eq!(options.max_ticks, None);
        assert!(options.auto_start);
        assert!(!options.finished(1_000_000));
        assert!((1..10).all(|n| options.emits(n)));
    }

    #[test]
    fn test_snapshot_stride() {
        let options = LoopOptions {
            snapshot_every: 3,
            ..Default::default()
        };
        let emitted: Vec<u64> = (1..=10).filter(|&n| options.emits(n)).collect();
        assert_eq!(emitted, vec![3, 6, 9]);

        let zero = LoopOptions {
            snapshot_every: 0,
            ..Default::default()
        };
        assert!(zero.emits(1));
    }

    #[test]
    fn test_max_ticks() {
        let options = LoopOptions {
            max_ticks: Some(5),
            ..Default::default()
        };
        assert!(!options.finished(4));
        assert!(options.finished(5));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
