//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in world space. x grows rightward, y grows downward
/// (screen convention); positions are the top-left corner of an entity's
/// bounding box.
pub type Vec2 = glam::DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each fixed step).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per step at the fixed step rate.
    pub fn dt(&self) -> f64 {
        crate::constants::STEP
    }

    /// Advance by one fixed step.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
