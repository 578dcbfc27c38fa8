//! Input commands sent from the embedding shell to the simulation.
//!
//! Intents are level-triggered press/release signals. Commands are queued
//! and applied at the next step boundary, so the kinematics pass always
//! reads a consistent set of flags.

use serde::{Deserialize, Serialize};

/// All player input intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// "Move left" intent changed.
    MoveLeft { pressed: bool },
    /// "Move right" intent changed.
    MoveRight { pressed: bool },
    /// Jump intent changed.
    Jump { pressed: bool },
}
