//! Game loop thread — drives the engine at display rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel and are applied at step
//! boundaries; the step clock turns whatever frame cadence the loop
//! achieves into fixed simulation steps, so the sim never sees jitter.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::info;

use tilerun_core::events::GameEvent;
use tilerun_level::map::LevelData;
use tilerun_sim::{SimulationEngine, StepClock};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal display frame duration for the headless loop (60 Hz pacing).
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the shell to use.
pub fn spawn_game_loop(
    level: LevelData,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("tilerun-game-loop".into())
        .spawn(move || {
            run_game_loop(&level, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    level: &LevelData,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = SimulationEngine::new(level);
    let mut clock = StepClock::default();
    let mut last = Instant::now();

    info!("game loop started");
    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Convert the elapsed frame interval into fixed steps.
        let now = Instant::now();
        let steps = clock.advance((now - last).as_secs_f64());
        last = now;
        for _ in 0..steps {
            engine.step();
        }

        // 3. Publish the frame snapshot; the leftover drives interpolation.
        let snapshot = engine.snapshot(clock.leftover());
        for event in &snapshot.events {
            log_event(event);
        }
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep out the rest of the frame.
        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::MonsterStomped { index } => info!("monster {index} stomped"),
        GameEvent::PlayerKilled { respawn } => {
            info!("player killed, respawned at ({:.0}, {:.0})", respawn.x, respawn.y)
        }
        GameEvent::TreasureCollected { index } => info!("treasure {index} collected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tilerun_core::commands::PlayerCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(PlayerCommand::MoveRight {
            pressed: true,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Input(PlayerCommand::Jump { pressed: true }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(PlayerCommand::MoveRight { pressed: true })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_game_loop_publishes_snapshots_and_shuts_down() {
        let level = tilerun_level::procgen::demo_level(1);
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(level, Arc::clone(&latest));

        // Give the loop a few frames to run and publish.
        std::thread::sleep(Duration::from_millis(100));
        {
            let slot = latest.lock().unwrap();
            let snapshot = slot.as_ref().expect("loop should publish a snapshot");
            assert!(snapshot.time.tick > 0, "simulation should have stepped");
        }

        tx.send(GameLoopCommand::Shutdown).unwrap();
        // After shutdown the receiver is dropped; further sends fail.
        std::thread::sleep(Duration::from_millis(100));
        assert!(tx
            .send(GameLoopCommand::Input(PlayerCommand::Jump { pressed: false }))
            .is_err());
    }
}
