//! The game engine.
//!
//! `GameEngine` owns the round: the hecs world with the ship, lasers and
//! asteroids, the score and lives, and the seeded RNG. Each `tick()` applies
//! queued player commands, runs the systems once and returns a
//! `GameStateSnapshot`. Nothing here knows about windows or keyboards.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use nave_core::commands::PlayerCommand;
use nave_core::components::Ship;
use nave_core::constants::{INITIAL_ASTEROID_COUNT, STARTING_LIVES};
use nave_core::enums::GamePhase;
use nave_core::events::GameEvent;
use nave_core::state::GameStateSnapshot;
use nave_core::types::{CanvasSize, FrameTime, Position, Velocity};

use crate::input::{self, KeyEvent};
use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Play area.
    pub canvas: CanvasSize,
    pub starting_lives: u32,
    pub initial_asteroids: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas: CanvasSize::default(),
            starting_lives: STARTING_LIVES,
            initial_asteroids: INITIAL_ASTEROID_COUNT,
        }
    }
}

/// The game engine. Owns the ECS world and all round state.
pub struct GameEngine {
    world: World,
    time: FrameTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
}

impl GameEngine {
    /// Create an engine and start the first round.
    ///
    /// The canvas must be finite and larger than twice `SPAWN_SAFE_DISTANCE`
    /// on both sides; asteroid placement redraws until it clears the ship, so
    /// a smaller canvas never finishes spawning.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: FrameTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        };
        engine.start_round();
        engine
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Map a key transition to a command for the current phase and queue it.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = input::command_for(event, self.phase) {
            self.queue_command(command);
        }
    }

    /// Advance the game by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.config.canvas,
            &self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current frame counter.
    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Get the score and lives of the current round.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get the play area.
    pub fn canvas(&self) -> CanvasSize {
        self.config.canvas
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that stage scenarios).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Override the remaining lives (for tests).
    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.score.lives = lives;
    }

    /// Spawn an asteroid at an exact position with an exact velocity (for tests).
    #[cfg(test)]
    pub fn spawn_test_asteroid(&mut self, position: Position, velocity: Velocity, radius: f32) -> Entity {
        let mut spawn = world_setup::roll_asteroid(&mut self.rng, position, radius);
        spawn.velocity = velocity;
        world_setup::spawn_asteroid(&mut self.world, spawn, &mut self.next_spawn_order)
    }

    /// Spawn a laser at an exact position travelling along `heading` (for tests).
    #[cfg(test)]
    pub fn spawn_test_laser(&mut self, position: Position, heading: f32) -> Entity {
        world_setup::spawn_laser(&mut self.world, position, heading, &mut self.next_spawn_order)
    }

    /// Despawn every asteroid (for tests).
    #[cfg(test)]
    pub fn clear_asteroids(&mut self) {
        let asteroids: Vec<Entity> = self
            .world
            .query::<&nave_core::components::Asteroid>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in asteroids {
            let _ = self.world.despawn(entity);
        }
    }

    /// Reset the world and totals and spawn a fresh ship and asteroid field.
    fn start_round(&mut self) {
        self.world.clear();
        self.time = FrameTime::default();
        self.phase = GamePhase::Playing;
        self.score = ScoreState::new(self.config.starting_lives);
        self.next_spawn_order = 0;

        let ship_spawn = self.config.canvas.center();
        world_setup::spawn_ship(&mut self.world, ship_spawn, &mut self.next_spawn_order);
        world_setup::spawn_initial_asteroids(
            &mut self.world,
            &mut self.rng,
            self.config.canvas,
            ship_spawn,
            self.config.initial_asteroids,
            &mut self.next_spawn_order,
        );

        log::info!(
            "round started: {} lives, {} asteroids",
            self.score.lives,
            self.config.initial_asteroids
        );
        self.events.push(GameEvent::RoundStarted {
            asteroids: self.config.initial_asteroids as u32,
        });
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetRotation { rate } => {
                for (_entity, ship) in self.world.query_mut::<&mut Ship>() {
                    ship.rotation = rate;
                }
            }
            PlayerCommand::SetBoosting { boosting } => {
                for (_entity, ship) in self.world.query_mut::<&mut Ship>() {
                    ship.boosting = boosting;
                }
            }
            PlayerCommand::FireLaser => {
                if self.phase == GamePhase::Playing {
                    self.fire_laser();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.start_round();
                }
            }
        }
    }

    /// Spawn a laser from the live ship's position along its heading.
    fn fire_laser(&mut self) {
        let muzzle = self
            .world
            .query::<(&Ship, &Position)>()
            .iter()
            .find(|(_, (ship, _))| !ship.destroyed)
            .map(|(_, (ship, pos))| (*pos, ship.heading));

        if let Some((position, heading)) = muzzle {
            world_setup::spawn_laser(&mut self.world, position, heading, &mut self.next_spawn_order);
            self.score.lasers_fired += 1;
            self.events.push(GameEvent::LaserFired { position });
        }
    }

    /// Take a life. Respawn the ship at the centre, or end the round on the last life.
    fn destroy_ship(&mut self) {
        let lives_remaining = self.score.lose_life();
        self.events.push(GameEvent::ShipDestroyed { lives_remaining });

        let center = self.config.canvas.center();
        for (_entity, (ship, pos, vel)) in
            self.world.query_mut::<(&mut Ship, &mut Position, &mut Velocity)>()
        {
            if lives_remaining > 0 {
                *pos = center;
                *vel = Velocity::default();
                ship.heading = 0.0;
            } else {
                ship.destroyed = true;
            }
        }

        if lives_remaining > 0 {
            log::debug!("ship destroyed, {lives_remaining} lives left");
        } else {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over after {} frames, final score {} ({} asteroids destroyed, {} lasers fired)",
                self.time.frame,
                self.score.score,
                self.score.asteroids_destroyed,
                self.score.lasers_fired
            );
            self.events.push(GameEvent::GameOver {
                final_score: self.score.score,
            });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let canvas = self.config.canvas;

        // 1. Ship rotation and thrust
        systems::ship_control::run(&mut self.world);
        // 2. Movement integration, then damping
        systems::movement::run(&mut self.world);
        systems::movement::apply_damping(&mut self.world);
        // 3. Screen wraparound (ship at the edge, asteroids past their radius)
        systems::wrap::run(&mut self.world, canvas);
        // 4. Drop lasers that left the canvas
        systems::cleanup::run(&mut self.world, canvas, &mut self.despawn_buffer);
        // 5. Laser vs asteroid (score, split, despawn)
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_spawn_order,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Ship vs asteroid, at most one hit per frame
        if systems::collision::find_ship_hit(&self.world).is_some() {
            self.destroy_ship();
        }
    }
}
