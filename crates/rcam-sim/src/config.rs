//! Simulation configuration.

use std::time::Duration;

use serde::Serialize;

use crate::error::{SimError, SimResult};

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    /// Simulation ticks per second
    pub tick_hz: u32,
    /// Simulated time to run for
    pub duration: Duration,
    /// Seed for every random draw; random when unset
    pub seed: Option<u64>,
    /// Number of vehicles on track
    pub vehicles: usize,
    /// Radius of the oval's bends, in track units
    pub track_radius: f64,
    /// Pace ticks against the wall clock instead of running flat out
    pub realtime: bool,
    /// Minimum time between accepted shot changes
    pub min_shot_delay_secs: f64,
    /// Ticks an incoming camera is prewarmed before it is presented
    pub prewarm_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            duration: Duration::from_secs(90),
            seed: None,
            vehicles: 6,
            track_radius: 120.0,
            realtime: false,
            min_shot_delay_secs: 2.0,
            prewarm_ticks: 3,
        }
    }
}

impl SimConfig {
    /// Create config from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tick_hz: env_or("SIM_TICK_HZ", defaults.tick_hz),
            duration: duration_or(env_or("SIM_DURATION_SECS", defaults.duration.as_secs_f64()), defaults.duration),
            seed: std::env::var("SIM_SEED").ok().and_then(|s| s.parse().ok()),
            vehicles: env_or("SIM_VEHICLES", defaults.vehicles),
            track_radius: env_or("SIM_TRACK_RADIUS", defaults.track_radius),
            realtime: std::env::var("SIM_REALTIME")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.realtime),
            min_shot_delay_secs: env_or("SIM_MIN_SHOT_DELAY_SECS", defaults.min_shot_delay_secs),
            prewarm_ticks: env_or("SIM_PREWARM_TICKS", defaults.prewarm_ticks),
        }
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> SimResult<()> {
        if self.tick_hz == 0 {
            return Err(SimError::config_error("SIM_TICK_HZ must be positive"));
        }
        if self.vehicles == 0 {
            return Err(SimError::config_error("SIM_VEHICLES must be positive"));
        }
        if !self.track_radius.is_finite() || self.track_radius <= 0.0 {
            return Err(SimError::config_error("SIM_TRACK_RADIUS must be a positive number"));
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_hz.max(1))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.dt())
    }

    /// Number of ticks covering the configured duration.
    pub fn total_ticks(&self) -> u64 {
        (self.duration.as_secs_f64() * f64::from(self.tick_hz)).ceil() as u64
    }
}

/// Seconds as a duration, or `default` for negative, NaN or overflowing input.
fn duration_or(secs: f64, default: Duration) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(default)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
