//! Shared state between the embedding shell and the game loop thread.

use std::sync::{Arc, Mutex};

use tilerun_core::commands::PlayerCommand;
use tilerun_core::state::WorldSnapshot;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input command to forward to the simulation engine.
    Input(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot, updated by the game loop thread each frame and
/// read synchronously by the shell.
pub type SharedSnapshot = Arc<Mutex<Option<WorldSnapshot>>>;
