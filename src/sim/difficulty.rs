//! Difficulty curve: forward speed and spawn pacing
//!
//! Both knobs only ever move one way during a run. The speed factor grows
//! without bound, but the speed actually applied is clamped, and the spawn
//! interval shrinks toward a floor.

use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Multiplier on base speed (starts at 1.0, grows with time)
    pub speed_factor: f32,
    /// Seconds between obstacle spawns
    pub spawn_interval: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            speed_factor: 1.0,
            spawn_interval: INITIAL_SPAWN_INTERVAL,
        }
    }
}

impl Difficulty {
    /// Grow the speed factor for `dt` seconds of play
    pub fn advance(&mut self, dt: f32) {
        self.speed_factor += dt.max(0.0) * SPEED_FACTOR_GROWTH;
    }

    /// Forward speed for the current factor, bounded to [MIN_SPEED, MAX_SPEED]
    pub fn current_speed(&self, braking: bool) -> f32 {
        let brake = if braking { BRAKE_FACTOR } else { 1.0 };
        clamp(BASE_SPEED * self.speed_factor * brake, MIN_SPEED, MAX_SPEED)
    }

    /// Shorten the spawn interval after an obstacle has been emitted
    pub fn tighten_spawn_interval(&mut self) {
        self.spawn_interval = clamp(
            self.spawn_interval * SPAWN_TIGHTEN,
            MIN_SPAWN_INTERVAL,
            MAX_SPAWN_INTERVAL,
        );
    }
}
