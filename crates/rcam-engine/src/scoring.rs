//! Target priority scoring for mounted camera rigs.
//!
//! A target scores 1.0 when it sits exactly at the ideal distance and bearing
//! from the follow vehicle, falling off smoothly towards the configured
//! limits.

use rcam_models::RelativeOffset;

use crate::geometry::angle_dot;
use crate::mounted::MountRigConfig;

/// Cubic ease with flat tangents at 0 and 1. Input is clamped to `[0, 1]`.
pub fn smooth_step(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fraction of the way `value` lies from `from` to `to`, clamped to `[0, 1]`.
///
/// Returns `None` for an empty range.
pub fn inverse_lerp(from: f64, to: f64, value: f64) -> Option<f64> {
    let span = to - from;
    if span == 0.0 {
        return None;
    }
    Some(((value - from) / span).clamp(0.0, 1.0))
}

/// Scores candidate look-at targets relative to a follow vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPriorityScorer {
    min_distance: f64,
    ideal_distance: f64,
    max_distance: f64,
    ideal_dot: f64,
}

impl TargetPriorityScorer {
    pub fn new(min_distance: f64, ideal_distance: f64, max_distance: f64, ideal_dot: f64) -> Self {
        Self {
            min_distance,
            ideal_distance,
            max_distance,
            ideal_dot,
        }
    }

    /// Build a scorer from a rig configuration.
    pub fn from_config(config: &MountRigConfig) -> Self {
        Self::new(
            config.min_relative_distance,
            config.ideal_relative_distance,
            config.max_relative_distance,
            config.ideal_angle_dot(),
        )
    }

    /// Priority of an along-track distance, eased towards the ideal distance
    /// from whichever boundary is nearer.
    pub fn distance_priority(&self, along: f64) -> f64 {
        let distance = along.abs();
        let boundary = if distance < self.ideal_distance {
            self.min_distance
        } else {
            self.max_distance
        };
        // A boundary sitting on the ideal distance leaves nothing to ease.
        let fraction = inverse_lerp(boundary, self.ideal_distance, distance).unwrap_or(1.0);
        smooth_step(fraction)
    }

    /// Priority of a bearing cosine. Only its magnitude matters, so targets
    /// ahead and behind score alike.
    pub fn angle_priority(&self, dot: f64) -> f64 {
        smooth_step(1.0 - (self.ideal_dot - dot.abs()).abs())
    }

    /// Combined priority of a distance and a bearing.
    pub fn combined(&self, along: f64, dot: f64) -> f64 {
        self.distance_priority(along) * self.angle_priority(dot)
    }

    /// Combined priority of a relative offset.
    pub fn score(&self, offset: RelativeOffset) -> f64 {
        self.combined(offset.along, angle_dot(offset))
    }
}
