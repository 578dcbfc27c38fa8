//! Headless tilerun driver.
//!
//! Loads a level (a Tiled-style JSON path as the first argument, or the
//! seeded demo level), runs the game loop with a scripted input session,
//! and prints the final HUD. Rendering and keyboard capture belong to an
//! embedding shell; this binary exercises everything below them.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tilerun_app::game_loop::spawn_game_loop;
use tilerun_app::state::GameLoopCommand;
use tilerun_core::commands::PlayerCommand;
use tilerun_level::{map, procgen};

/// Demo seed used when no level file is given.
const DEMO_SEED: u64 = 42;

fn main() {
    env_logger::init();

    let level = match std::env::args().nth(1) {
        Some(path) => match map::load_level(Path::new(&path)) {
            Ok(level) => level,
            Err(err) => {
                eprintln!("failed to load level {path}: {err}");
                std::process::exit(1);
            }
        },
        None => procgen::demo_level(DEMO_SEED),
    };

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(level, Arc::clone(&latest_snapshot));

    // Scripted session: run right, jump onto the platforms, walk back.
    let script: &[(u64, PlayerCommand)] = &[
        (0, PlayerCommand::MoveRight { pressed: true }),
        (1500, PlayerCommand::Jump { pressed: true }),
        (1700, PlayerCommand::Jump { pressed: false }),
        (3000, PlayerCommand::MoveRight { pressed: false }),
        (3000, PlayerCommand::MoveLeft { pressed: true }),
        (4500, PlayerCommand::Jump { pressed: true }),
        (4700, PlayerCommand::Jump { pressed: false }),
        (6000, PlayerCommand::MoveLeft { pressed: false }),
    ];
    let mut at = 0u64;
    for &(ms, command) in script {
        std::thread::sleep(Duration::from_millis(ms - at));
        at = ms;
        if cmd_tx.send(GameLoopCommand::Input(command)).is_err() {
            break;
        }
    }
    std::thread::sleep(Duration::from_millis(500));
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    let locked = latest_snapshot.lock();
    if let Ok(slot) = locked {
        if let Some(snapshot) = slot.as_ref() {
            println!(
                "ran {} steps ({:.1}s): {} treasure collected, {} monsters stomped",
                snapshot.time.tick,
                snapshot.time.elapsed_secs,
                snapshot.hud.collected,
                snapshot.hud.killed
            );
        }
    }
}
