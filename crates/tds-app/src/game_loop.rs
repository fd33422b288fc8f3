//! Game loop thread: runs the simulation engine at a fixed rate and emits snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel; snapshots leave through
//! another one.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use tds_core::commands::PlayerCommand;
use tds_core::state::GameStateSnapshot;
use tds_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopOptions};

/// Channels and thread handle of a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub snapshots: mpsc::Receiver<GameStateSnapshot>,
    pub thread: JoinHandle<()>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig, options: LoopOptions) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<GameStateSnapshot>();

    let thread = std::thread::Builder::new()
        .name("tds-game-loop".into())
        .spawn(move || {
            run_game_loop(config, options, cmd_rx, snap_tx);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        thread,
    })
}

/// The game loop. Runs until Shutdown, the tick limit, or nobody is left to
/// read snapshots. A closed command channel ends the loop only when no tick
/// limit is set.
fn run_game_loop(
    config: SimConfig,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::Sender<GameStateSnapshot>,
) {
    log::info!(
        "Game loop started (seed {}, max ticks {:?}, every {})",
        config.seed,
        options.max_ticks,
        options.snapshot_every
    );

    let mut engine = SimulationEngine::new(config);
    if options.auto_start {
        engine.queue_command(PlayerCommand::StartScene);
    }

    let mut inputs_open = true;
    let mut ticks_run: u64 = 0;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        while inputs_open {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("Game loop shut down after {ticks_run} ticks");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    if options.max_ticks.is_none() {
                        log::info!("Input closed; game loop stopping after {ticks_run} ticks");
                        return;
                    }
                    inputs_open = false;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        ticks_run += 1;

        // 3. Emit the snapshot
        if options.emits(ticks_run) && snap_tx.send(snapshot).is_err() {
            log::info!("Snapshot receiver gone; game loop stopping");
            return;
        }

        if options.finished(ticks_run) {
            log::info!("Tick limit reached after {ticks_run} ticks");
            return;
        }

        // 4. Sleep until next tick
        if options.tick_duration.is_zero() {
            continue;
        }
        next_tick_time += options.tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick_duration * 2 {
            // Too far behind, reset
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tds_core::enums::{MoveKey, ScenePhase};

    fn fast(max_ticks: Option<u64>) -> LoopOptions {
        LoopOptions {
            max_ticks,
            tick_duration: Duration::ZERO,
            ..Default::default()
        }
    }

    fn scripted_config() -> SimConfig {
        SimConfig {
            spawning: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartScene))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartScene)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let handle = spawn_game_loop(scripted_config(), fast(Some(10))).unwrap();
        handle.thread.join().unwrap();

        let snapshots: Vec<GameStateSnapshot> = handle.snapshots.try_iter().collect();
        assert_eq!(snapshots.len(), 10);
        assert_eq!(snapshots[0].phase, ScenePhase::Running);
        assert_eq!(snapshots.last().unwrap().time.tick, 10);
    }

    #[test]
    fn test_loop_snapshot_stride() {
        let options = LoopOptions {
            snapshot_every: 4,
            ..fast(Some(12))
        };
        let handle = spawn_game_loop(scripted_config(), options).unwrap();
        handle.thread.join().unwrap();

        let ticks: Vec<u64> = handle.snapshots.try_iter().map(|s| s.time.tick).collect();
        assert_eq!(ticks, vec![4, 8, 12]);
    }

    #[test]
    fn test_commands_reach_engine() {
        let handle = spawn_game_loop(
            scripted_config(),
            LoopOptions {
                auto_start: false,
                ..fast(None)
            },
        )
        .unwrap();

        handle
            .commands
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartScene))
            .unwrap();
        handle
            .commands
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::KeyDown {
                key: MoveKey::Right,
            }))
            .unwrap();

        // Wait for a snapshot where the held key has moved the player.
        let snap = handle
            .snapshots
            .iter()
            .find(|s| {
                s.phase == ScenePhase::Running
                    && s.player.as_ref().is_some_and(|p| p.position.x > 100.0)
            })
            .unwrap();
        assert!(snap.held_keys.is_down(MoveKey::Right));

        handle.commands.send(GameLoopCommand::Shutdown).unwrap();
        handle.thread.join().unwrap();
    }

    #[test]
    fn test_closed_input_stops_unbounded_loop() {
        let GameLoopHandle {
            commands,
            snapshots,
            thread,
        } = spawn_game_loop(scripted_config(), fast(None)).unwrap();
        drop(commands);
        thread.join().unwrap();
        drop(snapshots);
    }

    #[test]
    fn test_closed_input_keeps_bounded_loop_running() {
        let GameLoopHandle {
            commands,
            snapshots,
            thread,
        } = spawn_game_loop(scripted_config(), fast(Some(30))).unwrap();
        drop(commands);
        thread.join().unwrap();
        assert_eq!(snapshots.try_iter().count(), 30);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartScene);

        // Run enough ticks to populate entities
        for _ in 0..200 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
