//! Simulated traffic standing in for vehicle physics.

use rand::Rng;
use rcam_engine::{EngineResult, PathGeometryProvider, Shaker, VehicleTelemetry};
use rcam_models::{TrackPosition, VehicleId};

use crate::track::world_pose;

/// One car lapping the circuit at a steady pace with a gentle weave.
#[derive(Debug, Clone, PartialEq)]
pub struct SimVehicle {
    pub id: VehicleId,
    /// Distance along the track, in `[0, track length)`
    pub progress: f64,
    pub lateral: f64,
    /// Track units per second
    pub speed: f64,
    pub weave_amplitude: f64,
    /// Radians per second
    pub weave_rate: f64,
    pub weave_phase: f64,
    pub shake_scalar: f64,
}

impl SimVehicle {
    fn advance(&mut self, dt: f64, elapsed: f64, track_length: f64) {
        self.progress = (self.progress + self.speed * dt).rem_euclid(track_length);
        self.lateral = self.weave_amplitude * (self.weave_rate * elapsed + self.weave_phase).sin();
    }
}

/// The field of cars on track.
#[derive(Debug, Clone)]
pub struct TrafficField {
    vehicles: Vec<SimVehicle>,
    track_length: f64,
    elapsed: f64,
}

impl TrafficField {
    pub fn new(vehicles: Vec<SimVehicle>, track_length: f64) -> Self {
        Self {
            vehicles,
            track_length,
            elapsed: 0.0,
        }
    }

    /// A grid of `count` cars a few lengths apart, with varied pace.
    pub fn grid<R: Rng + ?Sized>(count: usize, track_length: f64, rng: &mut R) -> Self {
        let spacing = 8.0;
        let vehicles = (0..count)
            .map(|i| SimVehicle {
                id: VehicleId(i as u32 + 1),
                progress: (track_length - spacing * i as f64).rem_euclid(track_length),
                lateral: 0.0,
                speed: rng.random_range(38.0..52.0),
                weave_amplitude: rng.random_range(0.5..3.0),
                weave_rate: rng.random_range(0.3..1.2),
                weave_phase: rng.random_range(0.0..std::f64::consts::TAU),
                shake_scalar: rng.random_range(0.8..1.2),
            })
            .collect();
        Self::new(vehicles, track_length)
    }

    pub fn vehicles(&self) -> &[SimVehicle] {
        &self.vehicles
    }

    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        for vehicle in &mut self.vehicles {
            vehicle.advance(dt, self.elapsed, self.track_length);
        }
    }

    /// World-space shaker for a vehicle.
    pub fn shaker(&self, path: &dyn PathGeometryProvider, vehicle: &SimVehicle) -> EngineResult<Shaker> {
        let (position, forward) = world_pose(path, vehicle.progress, vehicle.lateral)?;
        Ok(Shaker::new(position, forward, vehicle.speed).with_shake_scalar(vehicle.shake_scalar))
    }
}

impl VehicleTelemetry for TrafficField {
    fn track_position(&self, vehicle: VehicleId) -> Option<TrackPosition> {
        self.vehicles
            .iter()
            .find(|v| v.id == vehicle)
            .map(|v| TrackPosition::new(v.progress, v.lateral))
    }

    fn vehicles(&self) -> Vec<VehicleId> {
        self.vehicles.iter().map(|v| v.id).collect()
    }
}
