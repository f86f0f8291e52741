//! Camera shake scenarios driven by vehicles passing a camera.

use glam::DVec3;
use rcam_engine::{CameraShake, PassByDetector, ShakeAggregator, ShakeConfig, Shaker};
use rcam_models::{CameraId, VehicleId};

use super::fixtures::trackside;

#[test]
fn test_sub_threshold_impulse_leaves_signal_unchanged() {
    let mut with_noise = ShakeAggregator::default();
    let mut without = ShakeAggregator::default();
    for aggregator in [&mut with_noise, &mut without] {
        assert!(aggregator.add_impulse(6.0, 0.5, 0.2));
        aggregator.tick(0.1);
    }

    // 1.5 at distance 1.5 falls off to 0.75, under the threshold.
    assert!(!with_noise.add_impulse(1.5, 1.5, 0.0));
    assert_eq!(with_noise.len(), 1);

    for _ in 0..50 {
        assert_eq!(with_noise.tick(0.05), without.tick(0.05));
    }
}

#[test]
fn test_passing_vehicle_shakes_camera_then_settles() {
    let mut cameras = trackside(&[7]);
    let camera_position = DVec3::new(1.0, 0.0, 0.0);
    let config = ShakeConfig::default();
    let mut detector = PassByDetector::new(camera_position, config.max_distance);
    let mut shake = CameraShake::new(CameraId(7), config);

    let car = VehicleId(1);
    let speed = 30.0;
    let dt = 1.0 / 60.0;
    let mut peak: f64 = 0.0;
    let mut events = 0;

    // Drive along +Z through the origin, passing the camera at distance 1.
    for step in 0..240 {
        let z = -20.0 + speed * dt * step as f64;
        let shaker = Shaker::new(DVec3::new(0.0, 0.0, z), DVec3::Z, speed);
        if let Some(event) = detector.observe(car, &shaker) {
            events += 1;
            assert!((event.closest_approach_distance - 1.0).abs() < 1e-9);
            assert!(shake.on_collision(&event));
        }
        let signal = shake.tick(dt, &mut cameras).unwrap();
        assert!(signal.amplitude >= 0.0);
        assert!(signal.amplitude <= 20.0);
        peak = peak.max(signal.amplitude);
    }

    assert_eq!(events, 1);
    // 30 at distance 1 falls off to 22.5, then is clamped to 20.
    assert!(peak > 19.0 && peak <= 20.0, "peak {peak}");

    let state = cameras.state(CameraId(7)).unwrap();
    assert_eq!(state.noise_amplitude, 0.0);
    assert_eq!(state.noise_frequency, 0.0);
    assert!(shake.aggregator().is_empty());
}
