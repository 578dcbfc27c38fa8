//! Headless tilerun application shell.
//!
//! Wires the simulation crates to a game loop thread and a command
//! channel, standing in for a rendering frontend: where a real shell
//! would draw the snapshot, this one logs events and publishes the
//! latest snapshot for polling.

pub mod game_loop;
pub mod state;
