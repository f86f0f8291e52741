//! Decaying shake impulses summed into one noise signal.

use rcam_models::{CameraId, CollisionEvent};
use serde::Serialize;
use tracing::{debug, trace};

use super::config::ShakeConfig;
use super::tween::{Ease, Tween};
use crate::cameras::CameraRegistry;
use crate::error::EngineResult;
use crate::metrics;

/// Starting magnitude of a fresh impulse. Non-zero so it survives its
/// first tick.
pub const ATTACK_START_MAGNITUDE: f64 = f64::MIN_POSITIVE;

/// Envelope phase of an impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakePhase {
    /// Rising towards the peak while the vehicle approaches.
    Attack,
    /// Falling back to zero after the closest approach.
    Release,
}

/// One collision's contribution to the shake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeImpulse {
    peak: f64,
    release_duration: f64,
    phase: ShakePhase,
    envelope: Tween,
}

impl ShakeImpulse {
    pub fn new(peak: f64, attack_duration: f64, release_duration: f64) -> Self {
        Self {
            peak,
            release_duration,
            phase: ShakePhase::Attack,
            envelope: Tween::new(ATTACK_START_MAGNITUDE, peak, attack_duration, Ease::InQuart),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.envelope.value()
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn phase(&self) -> ShakePhase {
        self.phase
    }

    /// Released all the way down to zero.
    pub fn is_spent(&self) -> bool {
        self.phase == ShakePhase::Release && self.magnitude() <= 0.0
    }

    pub fn advance(&mut self, dt: f64) {
        let leftover = self.envelope.advance(dt);
        if self.phase == ShakePhase::Attack && self.envelope.is_finished() {
            self.phase = ShakePhase::Release;
            self.envelope = Tween::new(self.peak, 0.0, self.release_duration, Ease::OutCirc);
            self.envelope.advance(leftover);
        }
    }
}

/// Noise written to a camera each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShakeSignal {
    pub amplitude: f64,
    pub frequency: f64,
}

/// Sums live impulses into a clamped amplitude and frequency.
#[derive(Debug, Clone, Default)]
pub struct ShakeAggregator {
    config: ShakeConfig,
    impulses: Vec<ShakeImpulse>,
    signal: ShakeSignal,
}

impl ShakeAggregator {
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config: config.clamped(),
            impulses: Vec::new(),
            signal: ShakeSignal::default(),
        }
    }

    pub fn config(&self) -> &ShakeConfig {
        &self.config
    }

    pub fn impulses(&self) -> &[ShakeImpulse] {
        &self.impulses
    }

    pub fn len(&self) -> usize {
        self.impulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.impulses.is_empty()
    }

    /// Signal produced by the last tick.
    pub fn signal(&self) -> ShakeSignal {
        self.signal
    }

    /// Add an impulse from a close pass.
    ///
    /// Returns `false` when the scaled magnitude falls below the threshold
    /// and nothing was added.
    pub fn add_impulse(&mut self, raw_magnitude: f64, closest_approach_distance: f64, time_to_closest_approach: f64) -> bool {
        let config = &self.config;
        let falloff = falloff_factor(config.falloff_distance, closest_approach_distance);
        let magnitude = raw_magnitude * falloff * config.amplitude_scalar;

        if !magnitude.is_finite() || magnitude < config.magnitude_threshold {
            trace!(raw_magnitude, magnitude, "Shake impulse below threshold");
            return false;
        }

        let release = (magnitude * config.duration_scalar).clamp(0.0, config.max_duration_secs);
        let peak = magnitude.clamp(0.0, config.max_amplitude);
        let attack = if time_to_closest_approach.is_finite() {
            time_to_closest_approach.max(0.0)
        } else {
            0.0
        };

        self.impulses.push(ShakeImpulse::new(peak, attack, release));
        metrics::record_shake_impulse();
        debug!(peak, attack, release, live = self.impulses.len(), "Shake impulse added");
        true
    }

    pub fn add_event(&mut self, event: &CollisionEvent) -> bool {
        self.add_impulse(
            event.approach_speed,
            event.closest_approach_distance,
            event.time_to_closest_approach,
        )
    }

    /// Advance every impulse by `dt` seconds and recompute the signal.
    pub fn tick(&mut self, dt: f64) -> ShakeSignal {
        for impulse in &mut self.impulses {
            impulse.advance(dt);
        }
        self.impulses.retain(|impulse| !impulse.is_spent());

        let total: f64 = self.impulses.iter().map(ShakeImpulse::magnitude).sum();
        let amplitude = total.clamp(0.0, self.config.max_amplitude);
        let frequency = (amplitude * self.config.frequency_ratio()).clamp(0.0, self.config.max_frequency);

        self.signal = ShakeSignal { amplitude, frequency };
        self.signal
    }

    /// Drop every impulse and silence the signal.
    pub fn clear(&mut self) {
        self.impulses.clear();
        self.signal = ShakeSignal::default();
    }
}

/// Full strength at or inside `falloff`, inverse-distance beyond it.
fn falloff_factor(falloff: f64, distance: f64) -> f64 {
    let distance = distance.abs();
    if distance.is_nan() {
        return 0.0;
    }
    if distance <= falloff {
        return 1.0;
    }
    (falloff / distance).clamp(0.0, 1.0)
}

/// A shake aggregator bound to one camera's noise channel.
#[derive(Debug, Clone)]
pub struct CameraShake {
    camera: CameraId,
    aggregator: ShakeAggregator,
}

impl CameraShake {
    pub fn new(camera: CameraId, config: ShakeConfig) -> Self {
        Self {
            camera,
            aggregator: ShakeAggregator::new(config),
        }
    }

    pub fn camera(&self) -> CameraId {
        self.camera
    }

    pub fn aggregator(&self) -> &ShakeAggregator {
        &self.aggregator
    }

    pub fn on_collision(&mut self, event: &CollisionEvent) -> bool {
        self.aggregator.add_event(event)
    }

    /// Tick the aggregator and write the signal to the camera.
    pub fn tick(&mut self, dt: f64, cameras: &mut CameraRegistry) -> EngineResult<ShakeSignal> {
        let signal = self.aggregator.tick(dt);
        cameras.set_noise(self.camera, signal.amplitude, signal.frequency)?;
        metrics::record_shake_amplitude(self.camera.to_string(), signal.amplitude);
        Ok(signal)
    }
}
