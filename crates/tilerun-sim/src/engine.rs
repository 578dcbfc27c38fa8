//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the world state, applies queued input commands
//! at step boundaries, runs the phase functions for each fixed step, and
//! builds `WorldSnapshot`s for the renderer. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use tilerun_core::commands::PlayerCommand;
use tilerun_core::events::GameEvent;
use tilerun_core::state::WorldSnapshot;
use tilerun_core::types::SimTime;
use tilerun_level::map::LevelData;
use tilerun_level::TileGrid;

use crate::systems;
use crate::world::World;

/// The simulation engine. Owns the world and all per-session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine from validated level data.
    pub fn new(level: &LevelData) -> Self {
        Self {
            world: World::from_level(level),
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue an input command for the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by exactly one fixed step.
    pub fn step(&mut self) {
        self.process_commands();
        self.run_phases(self.time.dt());
        self.time.advance();
    }

    /// Build the render view, extrapolating positions by the step
    /// clock's leftover seconds. Drains the event buffer.
    pub fn snapshot(&mut self, leftover_secs: f64) -> WorldSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, self.time, leftover_secs, events)
    }

    /// The immutable tile grid; the renderer reads it directly.
    pub fn grid(&self) -> &TileGrid {
        &self.world.grid
    }

    /// Read-only world access.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Apply all queued input commands to the player's intent flags.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            let player = &mut self.world.player;
            match command {
                PlayerCommand::MoveLeft { pressed } => player.left = pressed,
                PlayerCommand::MoveRight { pressed } => player.right = pressed,
                PlayerCommand::Jump { pressed } => player.jump = pressed,
            }
        }
    }

    /// Run all phases in order. The order is load-bearing: each monster
    /// resolves contact immediately after its own move, against the
    /// player's already-updated position for this step.
    fn run_phases(&mut self, dt: f64) {
        let World {
            grid,
            player,
            monsters,
            treasures,
        } = &mut self.world;

        // 1. Player kinematics.
        systems::kinematics::update(player, grid, dt);

        // 2. Monsters: move, then contact check, one monster at a time.
        for (index, monster) in monsters.iter_mut().enumerate() {
            if monster.is_inert() {
                continue;
            }
            systems::kinematics::update(monster, grid, dt);
            systems::interactions::monster_contact(player, monster, index, &mut self.events);
        }

        // 3. Treasure pickups.
        systems::interactions::collect_treasures(player, treasures, &mut self.events);
    }
}
