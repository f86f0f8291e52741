//! Mounted rig scenarios: re-anchoring and quadrant framing.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rcam_engine::{MountRigConfig, MountedCameraDirector, MountedCameraRig, StaticTelemetry, TrackView};
use rcam_models::{CameraId, TrackPosition, VehicleId};

use super::fixtures::{loop_path, mount_bank, trackside};

#[test]
fn test_reanchoring_rebinds_every_rig_camera() {
    let path = loop_path();
    let mut cameras = trackside(&[]);
    let bank = mount_bank(&mut cameras);
    let mut director = MountedCameraDirector::new(MountedCameraRig::new(MountRigConfig::default(), bank));
    let mut rng = StdRng::seed_from_u64(3);

    director.rig_mut().set_follow_anchor(Some(VehicleId(1)), &mut cameras).unwrap();
    for id in 11..=14 {
        assert_eq!(cameras.state(CameraId(id)).unwrap().bindings.follow, Some(VehicleId(1)));
    }

    // Vehicle 3 sits ahead of vehicle 2, slightly to the right.
    let telemetry = StaticTelemetry::new()
        .with_vehicle(VehicleId(1), TrackPosition::new(300.0, 0.0))
        .with_vehicle(VehicleId(2), TrackPosition::new(100.0, 0.0))
        .with_vehicle(VehicleId(3), TrackPosition::new(118.0, 1.0));
    let view = TrackView::new(&path, &telemetry).unwrap();

    let camera = director
        .best_mounted_camera(Some(VehicleId(2)), None, &view, &mut cameras, &mut rng)
        .unwrap();

    assert_eq!(camera, Some(CameraId(12)));
    for id in 11..=14 {
        let bindings = cameras.state(CameraId(id)).unwrap().bindings;
        assert_eq!(bindings.follow, Some(VehicleId(2)));
        assert_eq!(bindings.look_at, Some(VehicleId(2)));
    }
}

#[test]
fn test_target_across_the_seam_is_framed_from_behind() {
    let path = loop_path();
    let mut cameras = trackside(&[]);
    let bank = mount_bank(&mut cameras);
    let mut director = MountedCameraDirector::new(MountedCameraRig::new(MountRigConfig::default(), bank));
    let mut rng = StdRng::seed_from_u64(3);

    // Follow vehicle just past the line, target just before it on the left.
    let telemetry = StaticTelemetry::new()
        .with_vehicle(VehicleId(1), TrackPosition::new(5.0, 0.0))
        .with_vehicle(VehicleId(2), TrackPosition::new(485.0, -1.0));
    let view = TrackView::new(&path, &telemetry).unwrap();

    assert_eq!(view.offset(VehicleId(2), VehicleId(1)).unwrap().along, -20.0);

    let camera = director
        .best_mounted_camera(Some(VehicleId(1)), None, &view, &mut cameras, &mut rng)
        .unwrap();
    assert_eq!(camera, Some(CameraId(13)));
}
