//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! and single-threaded, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tds_core::commands::PlayerCommand;
use tds_core::enums::ScenePhase;
use tds_core::events::GameEvent;
use tds_core::input::HeldKeys;
use tds_core::state::{CameraView, GameStateSnapshot};
use tds_core::types::{Position, SimTime};

use crate::config::GameConfig;
use crate::messages::EnemyMessage;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Set up a fresh scene as soon as the player dies.
    pub auto_restart: bool,
    /// Periodic enemy spawning. Off for scripted scenarios.
    pub spawning: bool,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auto_restart: true,
            spawning: true,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    auto_restart: bool,
    spawning: bool,
    time: SimTime,
    phase: ScenePhase,
    scene: u32,
    rng: ChaCha8Rng,
    held_keys: HeldKeys,
    camera: CameraView,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    enemy_messages: Vec<EnemyMessage>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// An invalid game config is logged and replaced by the defaults.
    pub fn new(config: SimConfig) -> Self {
        let game = match config.game.validate() {
            Ok(()) => config.game,
            Err(e) => {
                log::warn!("Invalid game config ({e}); using defaults");
                GameConfig::default()
            }
        };

        Self {
            world: World::new(),
            camera: CameraView {
                offset: Position::default(),
                screen: game.screen(),
            },
            config: game,
            auto_restart: config.auto_restart,
            spawning: config.spawning,
            time: SimTime::default(),
            phase: ScenePhase::default(),
            scene: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            held_keys: HeldKeys::NONE,
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            enemy_messages: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == ScenePhase::Running && !self.continue_scene() {
            self.end_scene();
        }

        if self.phase == ScenePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            time: &self.time,
            phase: self.phase,
            scene: self.scene,
            field: self.config.field(),
            camera: self.camera,
            held_keys: self.held_keys,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, events)
    }

    /// Whether the current scene should keep running: true while the player is alive.
    pub fn continue_scene(&self) -> bool {
        systems::player_control::player_status(&self.world)
            .map(|(_, alive)| alive)
            .unwrap_or(false)
    }

    /// Get the current scene phase.
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of scenes started so far.
    pub fn scene(&self) -> u32 {
        self.scene
    }

    /// Movement keys currently held.
    pub fn held_keys(&self) -> HeldKeys {
        self.held_keys
    }

    pub fn camera(&self) -> CameraView {
        self.camera
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an enemy at an exact position (scripted scenarios, tests).
    /// Returns its id, or `None` when no scene is set up.
    pub fn spawn_enemy_at(&mut self, position: Position) -> Option<u32> {
        if !matches!(self.phase, ScenePhase::Running | ScenePhase::Paused) {
            return None;
        }
        let enemy_id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(
            &mut self.world,
            &self.config,
            enemy_id,
            position,
            self.time.tick,
        );
        self.events
            .push(GameEvent::EnemySpawned { enemy_id, position });
        Some(enemy_id)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }

        let messages = std::mem::take(&mut self.enemy_messages);
        systems::destroy::deliver(&mut self.world, messages, &mut self.events);
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => self.held_keys.press(key),
            PlayerCommand::KeyUp { key } => self.held_keys.release(key),
            PlayerCommand::SetHeldKeys { keys } => self.held_keys = keys,
            PlayerCommand::Aim { screen_x, screen_y } => {
                // A dead player cannot shoot, even before the scene ends.
                if self.phase != ScenePhase::Running || !self.continue_scene() {
                    return;
                }
                if let Some(shot) =
                    systems::aim::fire(&self.world, &self.camera, screen_x, screen_y)
                {
                    log::debug!(
                        "Shot from ({:.1}, {:.1}) to ({:.1}, {:.1}) hit {:?}",
                        shot.from.x,
                        shot.from.y,
                        shot.to.x,
                        shot.to.y,
                        shot.hit_ids
                    );
                    self.enemy_messages.extend(shot.messages);
                    self.events.push(GameEvent::ShotFired {
                        from: shot.from,
                        to: shot.to,
                        hits: shot.hit_ids,
                    });
                }
            }
            PlayerCommand::StartScene => {
                if matches!(self.phase, ScenePhase::Loading | ScenePhase::Ended) {
                    self.start_scene();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == ScenePhase::Running {
                    self.phase = ScenePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Running;
                }
            }
        }
    }

    /// Set up a fresh scene: empty world, player at the start, time reset.
    fn start_scene(&mut self) {
        world_setup::setup_scene(&mut self.world, &self.config);
        self.time = SimTime::default();
        self.next_enemy_id = 0;
        self.enemy_messages.clear();
        self.scene += 1;
        self.phase = ScenePhase::Running;
        systems::camera::run(&self.world, &mut self.camera, &self.config.field());

        log::info!("Scene {} started", self.scene);
        self.events.push(GameEvent::SceneStarted { scene: self.scene });
    }

    /// The player is dead: end the scene and restart it if configured to.
    fn end_scene(&mut self) {
        log::info!("Scene {} ended on tick {}", self.scene, self.time.tick);
        self.events.push(GameEvent::SceneEnded {
            scene: self.scene,
            tick: self.time.tick,
        });

        if self.auto_restart {
            self.start_scene();
        } else {
            self.phase = ScenePhase::Ended;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let field = self.config.field();

        // 1. Player movement
        systems::player_control::run(&mut self.world, self.held_keys, &field);
        // 2. Camera follows the player
        systems::camera::run(&self.world, &mut self.camera, &field);
        // 3. Periodic enemy spawning
        if self.spawning {
            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                &self.config,
                self.time.tick,
                &mut self.next_enemy_id,
                &mut self.events,
            );
        }
        // 4. Enemy chase AI
        systems::enemy_ai::run(&mut self.world);
        // 5. Hazard contact, after both sides have moved
        if let Some(event) = systems::player_control::check_contact(&mut self.world) {
            self.events.push(event);
        }
        // 6. Cleanup (destroyed enemies)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
