//! Shared track, camera and trigger fixtures.

use glam::DVec3;
use rcam_engine::{CameraRegistry, ClosedPath, DirectorContext, ShotDirector, TickReport, VehicleTelemetry};
use rcam_models::{CameraId, CameraSpec, LevelShots, MountBank, WeightedOption};

/// Rectangle 100 wide and 150 long: 500 units around.
pub fn loop_path() -> ClosedPath {
    ClosedPath::built(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 150.0),
        DVec3::new(100.0, 0.0, 150.0),
        DVec3::new(100.0, 0.0, 0.0),
    ])
    .unwrap()
}

pub fn linked(id: u32) -> LevelShots {
    LevelShots::Linked(vec![WeightedOption::new(CameraId(id), 1.0)])
}

/// Track-side cameras with the given ids.
pub fn trackside(ids: &[u32]) -> CameraRegistry {
    let mut cameras = CameraRegistry::new();
    for id in ids {
        cameras
            .register_headless(CameraSpec::standard(CameraId(*id), format!("trackside {}", id)))
            .unwrap();
    }
    cameras
}

/// Mounted cameras 11 to 14, one per quadrant.
pub fn mount_bank(cameras: &mut CameraRegistry) -> MountBank {
    for id in 11..=14 {
        cameras
            .register_headless(CameraSpec::mounted(CameraId(id), format!("mount {}", id)))
            .unwrap();
    }
    MountBank {
        front_left: vec![WeightedOption::new(CameraId(11), 1.0)],
        front_right: vec![WeightedOption::new(CameraId(12), 1.0)],
        back_left: vec![WeightedOption::new(CameraId(13), 1.0)],
        back_right: vec![WeightedOption::new(CameraId(14), 1.0)],
    }
}

pub fn init(director: &mut ShotDirector, path: &ClosedPath, telemetry: &dyn VehicleTelemetry, cameras: &mut CameraRegistry) {
    let mut ctx = DirectorContext::new(path, telemetry, cameras);
    director.init(&mut ctx).unwrap();
}

pub fn activate(director: &mut ShotDirector, path: &ClosedPath, telemetry: &dyn VehicleTelemetry, cameras: &mut CameraRegistry) {
    let mut ctx = DirectorContext::new(path, telemetry, cameras);
    director.set_active(true, &mut ctx);
}

pub fn tick(
    director: &mut ShotDirector,
    dt: f64,
    path: &ClosedPath,
    telemetry: &dyn VehicleTelemetry,
    cameras: &mut CameraRegistry,
) -> TickReport {
    let mut ctx = DirectorContext::new(path, telemetry, cameras);
    director.tick(dt, &mut ctx).unwrap()
}
