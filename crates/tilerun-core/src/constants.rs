//! Simulation constants and default physics tuning.

/// Fixed simulation step rate (Hz).
pub const STEP_RATE: u32 = 60;

/// Seconds per fixed step.
pub const STEP: f64 = 1.0 / STEP_RATE as f64;

/// Longest wall-clock frame interval the step clock will accept (seconds).
/// A suspended tab or a debugger pause otherwise turns into a huge
/// catch-up burst of steps.
pub const MAX_FRAME_SECS: f64 = 1.0;

// --- World geometry ---

/// Tile edge length in world units. Entity bounding boxes are TILE × TILE.
pub const TILE: f64 = 32.0;

/// Scaling constant mapping tile-unit physics values into world units.
pub const METER: f64 = TILE;

// --- Default physics tuning (tile units, scaled by METER at resolve time) ---

/// Default (exaggerated) gravity, tile units/s².
pub const GRAVITY: f64 = 9.8 * 6.0;

/// Default max horizontal speed, tiles/s.
pub const MAXDX: f64 = 15.0;

/// Default max vertical speed, tiles/s.
pub const MAXDY: f64 = 60.0;

/// Default time to reach maxdx from rest (seconds).
pub const ACCEL_TIME: f64 = 0.5;

/// Default time to stop from maxdx under friction (seconds).
pub const FRICTION_TIME: f64 = 1.0 / 6.0;

/// Default jump impulse, tile units.
pub const IMPULSE: f64 = 1500.0;

/// Multiplier applied to accel and friction while airborne.
pub const AIR_CONTROL: f64 = 0.5;
