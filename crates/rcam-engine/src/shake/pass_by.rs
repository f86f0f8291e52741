//! Predicts close passes of moving vehicles by shakeable cameras.

use std::collections::HashSet;

use glam::DVec3;
use rcam_models::{CollisionEvent, VehicleId};

/// A moving body able to shake cameras it passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaker {
    pub position: DVec3,
    pub forward: DVec3,
    pub speed: f64,
    /// Shake force per unit of speed
    pub shake_scalar: f64,
}

impl Shaker {
    pub fn new(position: DVec3, forward: DVec3, speed: f64) -> Self {
        Self {
            position,
            forward,
            speed,
            shake_scalar: 1.0,
        }
    }

    pub fn with_shake_scalar(mut self, shake_scalar: f64) -> Self {
        self.shake_scalar = shake_scalar.max(0.0);
        self
    }
}

/// Closest point to `point` on the line through `origin` along `direction`.
pub fn nearest_point_on_line(origin: DVec3, direction: DVec3, point: DVec3) -> DVec3 {
    let direction = direction.normalize_or_zero();
    origin + direction * (point - origin).dot(direction)
}

/// Collision event for a shaker that keeps going straight past `camera`.
///
/// `None` for a shaker that is not moving forward.
pub fn estimate_pass(shaker: &Shaker, camera: DVec3) -> Option<CollisionEvent> {
    if !shaker.speed.is_finite() || shaker.speed <= 0.0 {
        return None;
    }
    let nearest = nearest_point_on_line(shaker.position, shaker.forward, camera);
    let closest_distance = nearest.distance(camera);
    let time_to_closest = shaker.position.distance(nearest) / shaker.speed;
    Some(CollisionEvent::new(
        shaker.speed * shaker.shake_scalar,
        closest_distance,
        time_to_closest,
    ))
}

/// Fires one collision event each time a vehicle enters a camera's
/// detection radius.
#[derive(Debug, Clone, Default)]
pub struct PassByDetector {
    camera: DVec3,
    radius: f64,
    inside: HashSet<VehicleId>,
}

impl PassByDetector {
    pub fn new(camera: DVec3, radius: f64) -> Self {
        Self {
            camera,
            radius: radius.max(0.0),
            inside: HashSet::new(),
        }
    }

    pub fn camera(&self) -> DVec3 {
        self.camera
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Update a vehicle's position; returns an event on entry.
    pub fn observe(&mut self, vehicle: VehicleId, shaker: &Shaker) -> Option<CollisionEvent> {
        let within = shaker.position.distance(self.camera) <= self.radius;
        if !within {
            self.inside.remove(&vehicle);
            return None;
        }
        if !self.inside.insert(vehicle) {
            return None;
        }
        estimate_pass(shaker, self.camera)
    }

    /// Forget a vehicle that left the track.
    pub fn forget(&mut self, vehicle: VehicleId) {
        self.inside.remove(&vehicle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_on_pass() {
        let shaker = Shaker::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z, 20.0);
        let event = estimate_pass(&shaker, DVec3::ZERO).unwrap();
        assert_eq!(event.closest_approach_distance, 0.0);
        assert!((event.time_to_closest_approach - 0.5).abs() < 1e-12);
        assert_eq!(event.approach_speed, 20.0);
    }

    #[test]
    fn test_offset_pass() {
        let shaker = Shaker::new(DVec3::new(2.0, 0.0, -6.0), DVec3::new(0.0, 0.0, 3.0), 3.0).with_shake_scalar(1.5);
        let event = estimate_pass(&shaker, DVec3::ZERO).unwrap();
        assert!((event.closest_approach_distance - 2.0).abs() < 1e-12);
        assert!((event.time_to_closest_approach - 2.0).abs() < 1e-12);
        assert!((event.approach_speed - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_stationary_shaker() {
        let shaker = Shaker::new(DVec3::ZERO, DVec3::Z, 0.0);
        assert!(estimate_pass(&shaker, DVec3::X).is_none());
        let shaker = Shaker::new(DVec3::ZERO, DVec3::Z, f64::NAN);
        assert!(estimate_pass(&shaker, DVec3::X).is_none());
    }

    #[test]
    fn test_detector_fires_once_per_entry() {
        let mut detector = PassByDetector::new(DVec3::ZERO, 2.5);
        let car = VehicleId(1);
        let at = |z: f64| Shaker::new(DVec3::new(0.5, 0.0, z), DVec3::Z, 10.0);

        assert!(detector.observe(car, &at(-5.0)).is_none());
        assert!(detector.observe(car, &at(-2.0)).is_some());
        assert!(detector.observe(car, &at(0.0)).is_none());
        assert!(detector.observe(car, &at(5.0)).is_none());
        // Next lap.
        assert!(detector.observe(car, &at(-1.0)).is_some());
        detector.forget(car);
        assert!(detector.observe(car, &at(-1.0)).is_some());
    }
}
