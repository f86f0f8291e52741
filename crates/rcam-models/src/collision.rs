//! Collision events emitted when a vehicle passes close to a shakeable camera.

use serde::{Deserialize, Serialize};

/// A predicted close pass of a vehicle by a camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Shake force, usually speed times the vehicle's shake scalar
    pub approach_speed: f64,
    /// Distance between the camera and the closest point of the pass
    pub closest_approach_distance: f64,
    /// Seconds until the vehicle reaches the closest point
    pub time_to_closest_approach: f64,
}

impl CollisionEvent {
    pub fn new(approach_speed: f64, closest_approach_distance: f64, time_to_closest_approach: f64) -> Self {
        Self {
            approach_speed,
            closest_approach_distance,
            time_to_closest_approach,
        }
    }
}
