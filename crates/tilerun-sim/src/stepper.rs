//! Fixed-timestep scheduling.
//!
//! Converts irregular wall-clock frame intervals into a deterministic
//! sequence of fixed-size simulation steps. The simulation never sees a
//! variable dt; the display rate only changes how many steps run per
//! frame and how large the interpolation leftover is.

use tilerun_core::constants::{MAX_FRAME_SECS, STEP};

/// Accumulator-based step clock.
#[derive(Debug, Clone)]
pub struct StepClock {
    step: f64,
    accumulator: f64,
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(STEP)
    }
}

impl StepClock {
    /// Create a clock with a custom step size (tests use round sizes).
    pub fn new(step: f64) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed wall-clock seconds; returns how many
    /// fixed steps the simulation must run now.
    ///
    /// The elapsed time is capped at `MAX_FRAME_SECS` so a suspended tab
    /// or a debugger pause cannot demand an unbounded catch-up burst.
    pub fn advance(&mut self, elapsed_secs: f64) -> u32 {
        self.accumulator += elapsed_secs.clamp(0.0, MAX_FRAME_SECS);
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fixed step size in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Leftover seconds not yet consumed by a fixed step; strictly less
    /// than one step after `advance`. For the renderer's sub-step
    /// positional interpolation only — it never feeds back into
    /// simulation state.
    pub fn leftover(&self) -> f64 {
        self.accumulator
    }
}
