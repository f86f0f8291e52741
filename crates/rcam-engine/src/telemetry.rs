//! Read-only view of vehicle progress around the track.

use rcam_models::{TrackPosition, VehicleId};

/// Per-tick vehicle telemetry consumed by the engine.
///
/// Implementations are refreshed by the simulation before each tick and
/// only read by the engine.
pub trait VehicleTelemetry {
    /// Current track sample for a vehicle, or `None` when it is not tracked.
    fn track_position(&self, vehicle: VehicleId) -> Option<TrackPosition>;

    /// All vehicles currently on track, in a stable order.
    fn vehicles(&self) -> Vec<VehicleId>;

    /// The vehicle the broadcast follows by default (usually the player).
    fn primary_vehicle(&self) -> Option<VehicleId> {
        self.vehicles().into_iter().next()
    }
}

/// Telemetry backed by a fixed list of samples.
///
/// Useful for tests and for replaying recorded positions.
#[derive(Debug, Clone, Default)]
pub struct StaticTelemetry {
    samples: Vec<(VehicleId, TrackPosition)>,
    primary: Option<VehicleId>,
}

impl StaticTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a vehicle sample.
    pub fn with_vehicle(mut self, vehicle: VehicleId, position: TrackPosition) -> Self {
        self.set(vehicle, position);
        self
    }

    /// Mark a vehicle as the primary one.
    pub fn with_primary(mut self, vehicle: VehicleId) -> Self {
        self.primary = Some(vehicle);
        self
    }

    /// Update a vehicle sample in place.
    pub fn set(&mut self, vehicle: VehicleId, position: TrackPosition) {
        match self.samples.iter_mut().find(|(id, _)| *id == vehicle) {
            Some(entry) => entry.1 = position,
            None => self.samples.push((vehicle, position)),
        }
    }

    /// Stop tracking a vehicle.
    pub fn remove(&mut self, vehicle: VehicleId) {
        self.samples.retain(|(id, _)| *id != vehicle);
    }
}

impl VehicleTelemetry for StaticTelemetry {
    fn track_position(&self, vehicle: VehicleId) -> Option<TrackPosition> {
        self.samples
            .iter()
            .find(|(id, _)| *id == vehicle)
            .map(|(_, position)| *position)
    }

    fn vehicles(&self) -> Vec<VehicleId> {
        self.samples.iter().map(|(id, _)| *id).collect()
    }

    fn primary_vehicle(&self) -> Option<VehicleId> {
        self.primary.or_else(|| self.vehicles().into_iter().next())
    }
}
