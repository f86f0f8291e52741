//! Shot director scenarios: seam wraparound, hysteresis and superseded
//! transitions.

use rcam_engine::{
    DirectorConfig, DirectorContext, DirectorStatus, EngineError, MountRigConfig, MountedCameraDirector, MountedCameraRig,
    ShotDirector, ShotTriggerSequencer, StaticTelemetry, PRESENTED_PRIORITY,
};
use rcam_models::{CameraId, LevelShots, ShotTrigger, TrackPosition, TriggerId, VehicleId};

use super::fixtures::{activate, init, linked, loop_path, mount_bank, tick, trackside};

const CAR: VehicleId = VehicleId(1);

fn at(progress: f64) -> StaticTelemetry {
    StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(progress, 0.0))
}

/// Triggers at 0, 100 and 200 showing cameras 1, 2 and 3.
fn three_triggers() -> ShotTriggerSequencer {
    ShotTriggerSequencer::new(vec![
        ShotTrigger::new(TriggerId(1), 0.0, 500.0, 1.0, 0.0, linked(1)),
        ShotTrigger::new(TriggerId(2), 100.0, 500.0, 1.0, 0.0, linked(2)),
        ShotTrigger::new(TriggerId(3), 200.0, 500.0, 1.0, 0.0, linked(3)),
    ])
}

fn director(min_shot_delay_secs: f64, prewarm_ticks: u32) -> ShotDirector {
    let config = DirectorConfig {
        min_shot_delay_secs,
        prewarm_ticks,
        ..Default::default()
    };
    ShotDirector::new(config, three_triggers()).with_seed(17).with_target(CAR)
}

#[test]
fn test_seam_scenario_takes_mounted_then_level_path() {
    let path = loop_path();
    let mut cameras = trackside(&[1, 2]);
    let bank = mount_bank(&mut cameras);

    let sequencer = ShotTriggerSequencer::new(vec![
        ShotTrigger::new(TriggerId(1), 0.0, 500.0, 1.0, 0.0, linked(1)),
        ShotTrigger::new(TriggerId(2), 150.0, 500.0, 1.0, 0.0, linked(2)),
        ShotTrigger::new(TriggerId(3), 400.0, 500.0, 0.0, 1.0, LevelShots::default()),
    ]);
    let rig = MountedCameraRig::new(MountRigConfig::default(), bank);
    let config = DirectorConfig {
        min_shot_delay_secs: 0.5,
        ..Default::default()
    };
    let mut director = ShotDirector::new(config, sequencer)
        .with_mounted(MountedCameraDirector::new(rig))
        .with_seed(5)
        .with_target(CAR);

    let telemetry = at(420.0);
    init(&mut director, &path, &telemetry, &mut cameras);
    activate(&mut director, &path, &telemetry, &mut cameras);

    assert_eq!(director.state().selected_trigger, Some(TriggerId(3)));
    let mounted = director.state().active_camera.unwrap();
    // Nobody else on track to aim at, so a front-facing mount is used.
    assert!(mounted == CameraId(11) || mounted == CameraId(12));
    assert_eq!(director.mounted().unwrap().rig().follow_anchor(), Some(CAR));
    for id in 11..=14 {
        let bindings = cameras.state(CameraId(id)).unwrap().bindings;
        assert_eq!(bindings.follow, Some(CAR));
    }

    tick(&mut director, 0.5, &path, &telemetry, &mut cameras);

    // Just past the seam.
    let telemetry = at(20.0);
    let report = tick(&mut director, 0.5, &path, &telemetry, &mut cameras);
    assert_eq!(report.accepted_trigger, Some(TriggerId(1)));
    assert_eq!(director.state().active_camera, Some(CameraId(1)));
    assert_eq!(cameras.state(CameraId(1)).unwrap().bindings.look_at, Some(CAR));
}

#[test]
fn test_changes_closer_than_min_delay_are_held_back() {
    let path = loop_path();
    let mut cameras = trackside(&[1, 2, 3]);
    let mut director = director(1.0, 3);

    let telemetry = at(50.0);
    init(&mut director, &path, &telemetry, &mut cameras);
    activate(&mut director, &path, &telemetry, &mut cameras);

    let mut selected = vec![director.state().selected_trigger];
    for progress in [120.0, 220.0, 220.0] {
        let telemetry = at(progress);
        tick(&mut director, 0.4, &path, &telemetry, &mut cameras);
        selected.push(director.state().selected_trigger);
    }

    assert_eq!(
        selected,
        vec![
            Some(TriggerId(1)),
            Some(TriggerId(1)),
            Some(TriggerId(1)),
            Some(TriggerId(3)),
        ]
    );
}

#[test]
fn test_changes_after_min_delay_are_both_applied() {
    let path = loop_path();
    let mut cameras = trackside(&[1, 2, 3]);
    let mut director = director(1.0, 3);

    let telemetry = at(50.0);
    init(&mut director, &path, &telemetry, &mut cameras);
    activate(&mut director, &path, &telemetry, &mut cameras);
    assert_eq!(director.state().selected_trigger, Some(TriggerId(1)));

    tick(&mut director, 0.5, &path, &telemetry, &mut cameras);
    assert_eq!(director.state().hysteresis_timer, 0.5);

    // Exactly the minimum delay after the first change.
    let telemetry = at(120.0);
    let report = tick(&mut director, 0.5, &path, &telemetry, &mut cameras);
    assert_eq!(report.accepted_trigger, Some(TriggerId(2)));
    assert_eq!(director.state().active_camera, Some(CameraId(2)));
    assert_eq!(director.state().hysteresis_timer, 0.0);
}

#[test]
fn test_superseded_prewarm_never_touches_presented_camera() {
    let path = loop_path();
    let mut cameras = trackside(&[1, 2, 3]);
    let mut director = director(0.0, 3);

    let telemetry = at(50.0);
    init(&mut director, &path, &telemetry, &mut cameras);
    activate(&mut director, &path, &telemetry, &mut cameras);

    let mut completed = Vec::new();
    for _ in 0..3 {
        completed.extend(tick(&mut director, 0.1, &path, &telemetry, &mut cameras).switch_completed);
    }
    assert_eq!(completed, vec![CameraId(1)]);
    assert_eq!(cameras.presented(), Some(CameraId(1)));

    // Camera 2 starts prewarming, then camera 3 supersedes it.
    let report = tick(&mut director, 0.1, &path, &at(120.0), &mut cameras);
    assert_eq!(report.switch_started, Some(CameraId(2)));
    let report = tick(&mut director, 0.1, &path, &at(220.0), &mut cameras);
    assert_eq!(report.switch_started, Some(CameraId(3)));

    let presented = cameras.state(CameraId(1)).unwrap();
    assert!(presented.enabled);
    assert_eq!(presented.priority, PRESENTED_PRIORITY);
    assert!(!cameras.state(CameraId(2)).unwrap().enabled);
    assert!(cameras.state(CameraId(3)).unwrap().enabled);
    assert_eq!(cameras.presented(), Some(CameraId(1)));

    let telemetry = at(220.0);
    let mut completed = Vec::new();
    for _ in 0..3 {
        completed.extend(tick(&mut director, 0.1, &path, &telemetry, &mut cameras).switch_completed);
    }
    assert_eq!(completed, vec![CameraId(3)]);
    assert_eq!(cameras.presented(), Some(CameraId(3)));
    assert_eq!(cameras.enabled(), vec![CameraId(3)]);

    let on_top = cameras
        .ids()
        .iter()
        .filter(|id| cameras.state(**id).unwrap().priority == PRESENTED_PRIORITY)
        .count();
    assert_eq!(on_top, 1);
}

#[test]
fn test_switching_back_to_presented_camera_cancels_prewarm() {
    let path = loop_path();
    let mut cameras = trackside(&[1, 2, 3]);
    let mut director = director(0.0, 3);

    let telemetry = at(50.0);
    init(&mut director, &path, &telemetry, &mut cameras);
    activate(&mut director, &path, &telemetry, &mut cameras);
    for _ in 0..3 {
        tick(&mut director, 0.1, &path, &telemetry, &mut cameras);
    }

    tick(&mut director, 0.1, &path, &at(120.0), &mut cameras);
    assert!(director.pending_transition().is_some());

    let report = tick(&mut director, 0.1, &path, &at(50.0), &mut cameras);
    assert_eq!(report.accepted_trigger, Some(TriggerId(1)));
    assert_eq!(report.switch_started, None);
    assert!(director.pending_transition().is_none());

    for _ in 0..5 {
        let report = tick(&mut director, 0.1, &path, &telemetry, &mut cameras);
        assert_eq!(report.switch_completed, None);
    }
    assert_eq!(cameras.presented(), Some(CameraId(1)));
    assert_eq!(cameras.enabled(), vec![CameraId(1)]);
    assert_eq!(director.state().active_camera, Some(CameraId(1)));
}

#[test]
fn test_missing_rig_disables_only_the_director() {
    let path = loop_path();
    let mut cameras = trackside(&[1]);
    let sequencer = ShotTriggerSequencer::new(vec![ShotTrigger::new(
        TriggerId(1),
        0.0,
        500.0,
        1.0,
        1.0,
        linked(1),
    )]);
    let mut director = ShotDirector::new(DirectorConfig::default(), sequencer).with_target(CAR);
    let telemetry = at(10.0);

    let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);
    let result = director.init(&mut ctx);
    assert!(matches!(result, Err(EngineError::MissingCollaborator(_))));
    assert_eq!(director.status(), DirectorStatus::Disabled);

    director.set_active(true, &mut ctx);
    assert!(!director.is_active());
    let report = director.tick(0.1, &mut ctx).unwrap();
    assert_eq!(report.accepted_trigger, None);

    // The cameras themselves are untouched and still usable.
    assert!(ctx.cameras.is_available(CameraId(1)));
}
