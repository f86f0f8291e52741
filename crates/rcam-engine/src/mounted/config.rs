//! Configuration for vehicle-mounted camera rigs.
//!
//! Distances are along-track, in track units. Angles are bearings in degrees
//! measured from dead ahead (or dead astern) of the follow vehicle.

use serde::{Deserialize, Serialize};

/// Bearings are compared as dot products, so they cannot exceed a right angle.
pub const MAX_CULL_ANGLE_DEG: f64 = 90.0;

/// Targeting parameters for a mounted camera rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountRigConfig {
    // === Distance Window ===
    /// Targets closer than this along the track are culled.
    /// Default: 4.0
    pub min_relative_distance: f64,

    /// Along-track distance that scores highest.
    /// Default: 18.0
    pub ideal_relative_distance: f64,

    /// Targets further than this along the track are culled.
    /// Default: 60.0
    pub max_relative_distance: f64,

    // === Bearing Window ===
    /// Targets at or beyond this bearing are culled.
    /// Default: 55.0
    pub cull_angle_deg: f64,

    /// Bearing that scores highest.
    /// Default: 12.0
    pub ideal_angle_deg: f64,
}

impl Default for MountRigConfig {
    fn default() -> Self {
        Self {
            min_relative_distance: 4.0,
            ideal_relative_distance: 18.0,
            max_relative_distance: 60.0,
            cull_angle_deg: 55.0,
            ideal_angle_deg: 12.0,
        }
    }
}

impl MountRigConfig {
    /// Tight framing on a car right next to the follow vehicle.
    pub fn close_follow() -> Self {
        Self {
            min_relative_distance: 1.5,
            ideal_relative_distance: 7.0,
            max_relative_distance: 25.0,
            cull_angle_deg: 70.0,
            ideal_angle_deg: 20.0,
        }
    }

    /// Long-lens chase framing of cars further up or down the road.
    pub fn wide_chase() -> Self {
        Self {
            min_relative_distance: 10.0,
            ideal_relative_distance: 40.0,
            max_relative_distance: 120.0,
            cull_angle_deg: 35.0,
            ideal_angle_deg: 5.0,
        }
    }

    /// Clamp the parameters into a consistent window.
    ///
    /// `min >= 0`, `max >= min`, `min <= ideal <= max`,
    /// `0 <= cull <= 90` and `0 <= ideal angle <= cull`.
    pub fn clamped(mut self) -> Self {
        self.min_relative_distance = finite_or_zero(self.min_relative_distance).max(0.0);
        self.max_relative_distance = finite_or_zero(self.max_relative_distance).max(self.min_relative_distance);
        self.ideal_relative_distance = finite_or_zero(self.ideal_relative_distance)
            .clamp(self.min_relative_distance, self.max_relative_distance);
        self.cull_angle_deg = finite_or_zero(self.cull_angle_deg).clamp(0.0, MAX_CULL_ANGLE_DEG);
        self.ideal_angle_deg = finite_or_zero(self.ideal_angle_deg).clamp(0.0, self.cull_angle_deg);
        self
    }

    /// Cosine of the cull angle; targets must exceed it to stay in view.
    pub fn cull_angle_dot(&self) -> f64 {
        self.cull_angle_deg.to_radians().cos()
    }

    /// Cosine of the ideal angle.
    pub fn ideal_angle_dot(&self) -> f64 {
        self.ideal_angle_deg.to_radians().cos()
    }

    /// Whether an along-track distance lies strictly inside the window.
    pub fn in_range(&self, along: f64) -> bool {
        let distance = along.abs();
        distance > self.min_relative_distance && distance < self.max_relative_distance
    }

    /// Whether a bearing cosine lies strictly inside the cull cone.
    pub fn in_angle(&self, dot: f64) -> bool {
        dot.abs() > self.cull_angle_dot()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
