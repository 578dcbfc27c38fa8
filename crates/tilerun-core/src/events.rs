//! Events emitted by the simulation for the embedding shell.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// One interaction outcome from a fixed step.
///
/// Indices refer to the world's monster/treasure storage, which never
/// reorders, so they stay valid for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player landed on a monster's head.
    MonsterStomped { index: usize },
    /// A monster caught the player, who respawned at its start position.
    PlayerKilled { respawn: Vec2 },
    /// The player picked up a treasure.
    TreasureCollected { index: usize },
}
