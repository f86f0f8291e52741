//! Relative positions of agents on the closed track.
//!
//! All functions here work in track-local coordinates: `along` is the distance
//! around the loop and `lateral` the signed offset from the centre line.

use rcam_models::{Quadrant, RelativeOffset, TrackPosition, VehicleId};

use super::path::PathGeometryProvider;
use crate::error::EngineResult;
use crate::telemetry::VehicleTelemetry;

/// Offset of `target` relative to `origin` on a loop of `length`.
///
/// The along-track component takes the shorter way around the loop, so a
/// target just across the start/finish seam reads as adjacent. The result
/// lies in `(-length / 2, length / 2]`.
pub fn relative_offset(target: TrackPosition, origin: TrackPosition, length: f64) -> RelativeOffset {
    let lateral = target.lateral - origin.lateral;
    if length <= 0.0 || !length.is_finite() {
        return RelativeOffset::new(lateral, target.along - origin.along);
    }

    let raw = (target.along - origin.along) % length;
    let complement = (length - raw.abs()) * -raw.signum();

    let along = if complement.abs() < raw.abs() {
        complement
    } else if complement.abs() == raw.abs() {
        // Exactly half a lap either way.
        raw.max(complement)
    } else {
        raw
    };

    RelativeOffset::new(lateral, along)
}

/// Cosine of the bearing from the track-forward axis.
///
/// `+1` is dead ahead, `-1` dead astern. A zero offset has no bearing and
/// yields `0`.
pub fn angle_dot(offset: RelativeOffset) -> f64 {
    let length = offset.length();
    if length <= 0.0 {
        return 0.0;
    }
    (offset.along / length).clamp(-1.0, 1.0)
}

/// Quadrant of an offset: Left when lateral < 0, Back when along < 0.
pub fn quadrant(offset: RelativeOffset) -> Quadrant {
    Quadrant::from_sides(offset.along >= 0.0, offset.lateral < 0.0)
}

/// Track-relative queries over live telemetry.
pub struct TrackView<'a> {
    telemetry: &'a dyn VehicleTelemetry,
    length: f64,
}

impl<'a> TrackView<'a> {
    /// Fails when the path geometry is not built yet.
    pub fn new(path: &dyn PathGeometryProvider, telemetry: &'a dyn VehicleTelemetry) -> EngineResult<Self> {
        Ok(Self {
            telemetry,
            length: path.total_length()?,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn telemetry(&self) -> &'a dyn VehicleTelemetry {
        self.telemetry
    }

    /// Offset of one vehicle relative to another, if both are tracked.
    pub fn offset(&self, target: VehicleId, origin: VehicleId) -> Option<RelativeOffset> {
        let target = self.telemetry.track_position(target)?;
        let origin = self.telemetry.track_position(origin)?;
        Some(relative_offset(target, origin, self.length))
    }

    /// Quadrant of one vehicle relative to another, if both are tracked.
    pub fn quadrant(&self, target: VehicleId, origin: VehicleId) -> Option<Quadrant> {
        self.offset(target, origin).map(quadrant)
    }
}
