//! The entity model: one struct covers the player, monsters, and treasures.
//!
//! Entities are plain data with no motion logic of their own.
//! Integration and collision live in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Vec2;

/// Which kind of entity this is, with its variant-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityKind {
    /// The controllable player. Counters feed the HUD.
    Player { killed: u32, collected: u32 },
    /// A patrolling monster. `dead` is terminal, set by a stomp.
    Monster { dead: bool },
    /// A static pickup. `collected` is terminal.
    Treasure { collected: bool },
}

/// Per-entity physics overrides from level data, in tile units.
/// Missing fields fall back to the world defaults at resolve time.
///
/// `accel` and `friction` are time constants: seconds to reach maxdx and
/// seconds to stop from maxdx respectively, not accelerations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTuning {
    pub gravity: Option<f64>,
    pub maxdx: Option<f64>,
    pub maxdy: Option<f64>,
    pub impulse: Option<f64>,
    pub accel: Option<f64>,
    pub friction: Option<f64>,
    /// Initial "move left" intent (sets a monster's patrol direction).
    pub left: bool,
    /// Initial "move right" intent.
    pub right: bool,
}

/// Physics parameters resolved once at construction, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    pub gravity: f64,
    pub maxdx: f64,
    pub maxdy: f64,
    pub impulse: f64,
    pub accel: f64,
    pub friction: f64,
}

impl PhysicsParams {
    /// Resolve world-unit parameters from tile-unit overrides.
    pub fn resolve(tuning: &EntityTuning) -> Self {
        let maxdx = METER * tuning.maxdx.unwrap_or(MAXDX);
        Self {
            gravity: METER * tuning.gravity.unwrap_or(GRAVITY),
            maxdx,
            maxdy: METER * tuning.maxdy.unwrap_or(MAXDY),
            impulse: METER * tuning.impulse.unwrap_or(IMPULSE),
            accel: maxdx / tuning.accel.unwrap_or(ACCEL_TIME),
            friction: maxdx / tuning.friction.unwrap_or(FRICTION_TIME),
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::resolve(&EntityTuning::default())
    }
}

/// A simulated entity: an axis-aligned TILE × TILE box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// World-space top-left corner of the bounding box.
    pub position: Vec2,
    /// Velocity in world units/s.
    pub velocity: Vec2,
    /// Acceleration accumulator; rebuilt from scratch every step.
    pub acceleration: Vec2,
    /// Physics parameters, resolved once at construction.
    pub params: PhysicsParams,
    /// "Move left" intent, set by input (player) or patrol logic (monster).
    pub left: bool,
    /// "Move right" intent.
    pub right: bool,
    /// Jump intent, level-triggered.
    pub jump: bool,
    /// Mid-jump latch: set on takeoff, cleared on landing.
    pub jumping: bool,
    /// Airborne state, derived from the tiles below each step.
    pub falling: bool,
    /// Spawn position; the player respawns here on death.
    pub start: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    /// Construct an entity of the given kind at its spawn position.
    pub fn new(kind: EntityKind, position: Vec2, tuning: &EntityTuning) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            params: PhysicsParams::resolve(tuning),
            left: tuning.left,
            right: tuning.right,
            jump: false,
            jumping: false,
            falling: false,
            start: position,
            kind,
        }
    }

    pub fn player(position: Vec2, tuning: &EntityTuning) -> Self {
        Self::new(
            EntityKind::Player {
                killed: 0,
                collected: 0,
            },
            position,
            tuning,
        )
    }

    pub fn monster(position: Vec2, tuning: &EntityTuning) -> Self {
        Self::new(EntityKind::Monster { dead: false }, position, tuning)
    }

    pub fn treasure(position: Vec2, tuning: &EntityTuning) -> Self {
        Self::new(EntityKind::Treasure { collected: false }, position, tuning)
    }

    /// Whether this entity is a monster (dead or alive).
    pub fn is_monster(&self) -> bool {
        matches!(self.kind, EntityKind::Monster { .. })
    }

    /// Whether this entity has been permanently removed from simulation.
    /// The player is never inert; its death is a respawn, not a removal.
    pub fn is_inert(&self) -> bool {
        match self.kind {
            EntityKind::Player { .. } => false,
            EntityKind::Monster { dead } => dead,
            EntityKind::Treasure { collected } => collected,
        }
    }
}
