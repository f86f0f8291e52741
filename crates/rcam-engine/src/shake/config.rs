//! Configuration for shakeable cameras.

use serde::{Deserialize, Serialize};

/// How collision impulses translate into camera noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    // === Impulse Generation ===
    /// Scaled impulses below this are ignored.
    /// Default: 1.0
    pub magnitude_threshold: f64,

    /// Multiplier applied to every impulse.
    /// Default: 1.0
    pub amplitude_scalar: f64,

    /// Release duration in seconds per unit of magnitude.
    /// Default: 0.125
    pub duration_scalar: f64,

    /// Longest release, in seconds.
    /// Default: 2.2
    pub max_duration_secs: f64,

    // === Distance ===
    /// Passes at or inside this distance shake at full strength.
    /// Default: 0.75
    pub falloff_distance: f64,

    /// Radius within which a passing vehicle is detected.
    /// Default: 2.5
    pub max_distance: f64,

    // === Noise Limits ===
    /// Ceiling on the aggregate amplitude.
    /// Default: 20.0
    pub max_amplitude: f64,

    /// Ceiling on the noise frequency, reached at maximum amplitude.
    /// Default: 0.08
    pub max_frequency: f64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            magnitude_threshold: 1.0,
            amplitude_scalar: 1.0,
            duration_scalar: 0.125,
            max_duration_secs: 2.2,
            falloff_distance: 0.75,
            max_distance: 2.5,
            max_amplitude: 20.0,
            max_frequency: 0.08,
        }
    }
}

impl ShakeConfig {
    /// Barely-there rumble for cockpit-adjacent cameras.
    pub fn subtle() -> Self {
        Self {
            magnitude_threshold: 4.0,
            amplitude_scalar: 0.25,
            max_amplitude: 5.0,
            ..Default::default()
        }
    }

    /// Heavy shake for track-side cameras right at the barrier.
    pub fn trackside() -> Self {
        Self {
            amplitude_scalar: 1.5,
            falloff_distance: 1.5,
            max_distance: 6.0,
            ..Default::default()
        }
    }

    /// Noise frequency per unit of amplitude.
    pub fn frequency_ratio(&self) -> f64 {
        if self.max_amplitude > 0.0 {
            self.max_frequency / self.max_amplitude
        } else {
            0.0
        }
    }

    /// Clamp every parameter to a finite, non-negative value.
    pub fn clamped(mut self) -> Self {
        for value in [
            &mut self.magnitude_threshold,
            &mut self.amplitude_scalar,
            &mut self.duration_scalar,
            &mut self.max_duration_secs,
            &mut self.falloff_distance,
            &mut self.max_distance,
            &mut self.max_amplitude,
            &mut self.max_frequency,
        ] {
            if !value.is_finite() || *value < 0.0 {
                *value = 0.0;
            }
        }
        self
    }
}
