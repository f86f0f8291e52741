//! Track-relative positions, offsets and quadrants.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Projection of a world point onto the closed track loop.
///
/// Computed on demand by the path geometry and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathFrame {
    /// Nearest point on the path
    pub point: DVec3,
    /// Unit direction of travel at `point`
    pub tangent: DVec3,
    /// Unit lateral direction (right-hand side of travel) at `point`
    pub perpendicular: DVec3,
    /// Distance along the path from the start point, in `[0, total_length)`
    pub distance_along: f64,
    /// Length of the whole loop
    pub total_length: f64,
    /// Unsigned distance from the projected point to the path
    pub distance_to_path: f64,
    /// Signed lateral offset, positive on the right of travel
    pub lateral_offset: f64,
}

impl PathFrame {
    /// Fraction of the loop covered at this frame, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.total_length > 0.0 {
            self.distance_along / self.total_length
        } else {
            0.0
        }
    }

    /// Progress expressed as a percentage.
    pub fn percentage(&self) -> f64 {
        self.progress() * 100.0
    }

    /// Track-local sample of this frame.
    pub fn track_position(&self) -> TrackPosition {
        TrackPosition::new(self.distance_along, self.lateral_offset)
    }
}

/// Telemetry sample of one vehicle in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackPosition {
    /// Distance travelled along the loop
    pub along: f64,
    /// Signed lateral offset from the path centre line
    pub lateral: f64,
}

impl TrackPosition {
    /// Create a new track position.
    pub fn new(along: f64, lateral: f64) -> Self {
        Self { along, lateral }
    }
}

/// Offset of one agent relative to another in track-local coordinates.
///
/// `along` is the shortest signed distance around the loop, so it always lies
/// in `(-length / 2, length / 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeOffset {
    pub lateral: f64,
    pub along: f64,
}

impl RelativeOffset {
    pub fn new(lateral: f64, along: f64) -> Self {
        Self { lateral, along }
    }

    /// Euclidean length of the offset.
    pub fn length(&self) -> f64 {
        self.lateral.hypot(self.along)
    }
}

/// Relative zone of one agent around another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl Quadrant {
    /// All quadrants in bank order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::FrontLeft,
        Quadrant::FrontRight,
        Quadrant::BackLeft,
        Quadrant::BackRight,
    ];

    /// Build a quadrant from its two half-plane flags.
    pub fn from_sides(front: bool, left: bool) -> Self {
        match (front, left) {
            (true, true) => Quadrant::FrontLeft,
            (true, false) => Quadrant::FrontRight,
            (false, true) => Quadrant::BackLeft,
            (false, false) => Quadrant::BackRight,
        }
    }

    pub fn is_front(self) -> bool {
        matches!(self, Quadrant::FrontLeft | Quadrant::FrontRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::FrontLeft | Quadrant::BackLeft)
    }
}
