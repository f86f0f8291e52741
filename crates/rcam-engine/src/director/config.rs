//! Configuration for the shot director.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Shot switching parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorConfig {
    /// Minimum time between accepted shot changes, in seconds.
    /// Default: 2.0
    pub min_shot_delay_secs: f64,

    /// Ticks an incoming camera runs enabled but unseen before it is
    /// presented, letting its damping settle.
    /// Default: 3
    pub prewarm_ticks: u32,

    /// Up vector used to snap cameras that do not override it.
    /// Default: +Y
    pub world_up: DVec3,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            min_shot_delay_secs: 2.0,
            prewarm_ticks: 3,
            world_up: DVec3::Y,
        }
    }
}

impl DirectorConfig {
    /// Broadcast pacing: long holds between cuts.
    pub fn broadcast() -> Self {
        Self {
            min_shot_delay_secs: 4.0,
            ..Default::default()
        }
    }

    /// Highlight-reel pacing: cut on every trigger.
    pub fn highlights() -> Self {
        Self {
            min_shot_delay_secs: 0.5,
            prewarm_ticks: 2,
            ..Default::default()
        }
    }

    /// Clamp into a usable configuration.
    pub fn clamped(mut self) -> Self {
        if !self.min_shot_delay_secs.is_finite() || self.min_shot_delay_secs < 0.0 {
            self.min_shot_delay_secs = 0.0;
        }
        self.world_up = self.world_up.normalize_or(DVec3::Y);
        self
    }
}
