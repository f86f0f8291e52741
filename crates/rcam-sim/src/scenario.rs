//! The demo circuit: cameras, triggers, mounted rig and a shakeable camera.

use glam::DVec3;
use rand::Rng;
use rcam_engine::{
    author_trigger, CameraRegistry, CameraShake, ClosedPath, DirectorConfig, MountRigConfig, MountedCameraDirector,
    MountedCameraRig, PassByDetector, PathGeometryProvider, ShakeConfig, ShotDirector, ShotTriggerSequencer,
};
use rcam_models::{CameraId, CameraSpec, LevelShots, MountBank, StuntBankId, TriggerId, WeightedOption};
use tracing::debug;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::track::{oval_circuit, world_pose};

/// Camera that shakes when cars brush past it.
pub const SHAKE_CAMERA: CameraId = CameraId(7);

const STUNT_BANK: StuntBankId = StuntBankId(1);

/// Distance of track-side cameras from the racing line.
const TRACKSIDE_OFFSET: f64 = 12.0;

/// A shot trigger placement around the lap.
struct TriggerPlan {
    /// Fraction of the lap
    at: f64,
    level_weight: f64,
    mounted_weight: f64,
    shots: LevelShots,
}

/// Everything on the circuit the simulation drives.
pub struct Scenario {
    pub path: ClosedPath,
    pub cameras: CameraRegistry,
    pub director: ShotDirector,
    pub shake: CameraShake,
    pub detector: PassByDetector,
}

impl Scenario {
    /// Build the circuit and its camera setup.
    pub fn build<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> SimResult<Self> {
        let path = oval_circuit(config.track_radius)?;
        let length = path.total_length()?;
        let mut cameras = CameraRegistry::new();

        // Track-side cameras. Camera 4 sits on the banked bend and keeps its
        // own horizon.
        for id in 1..=6 {
            let name = format!("trackside {}", id);
            let spec = if id == 4 {
                CameraSpec::with_custom_up(CameraId(id), name, DVec3::new(0.15, 1.0, 0.0))
            } else {
                CameraSpec::standard(CameraId(id), name)
            };
            cameras.register_headless(spec)?;
        }

        let shake_config = ShakeConfig::trackside();
        let (shake_position, _) = world_pose(&path, length * 0.1, shake_config.max_distance * 0.5)?;
        cameras.register_headless(CameraSpec::standard(SHAKE_CAMERA, "barrier cam"))?;

        let bank = MountBank {
            front_left: vec![WeightedOption::new(CameraId(11), 1.0)],
            front_right: vec![WeightedOption::new(CameraId(12), 1.0)],
            back_left: vec![
                WeightedOption::new(CameraId(13), 2.0),
                WeightedOption::new(CameraId(15), 1.0),
            ],
            back_right: vec![
                WeightedOption::new(CameraId(14), 2.0),
                WeightedOption::new(CameraId(15), 1.0),
            ],
        };
        for id in bank.all_cameras() {
            cameras.register_headless(CameraSpec::mounted(id, format!("mount {}", id.get())))?;
        }

        let mut triggers = Vec::new();
        for (index, plan) in trigger_plans().into_iter().enumerate() {
            let (on_line, _) = world_pose(&path, length * plan.at, 0.0)?;
            let frame = path.sample(length * plan.at)?;
            let point = on_line + frame.perpendicular * TRACKSIDE_OFFSET;
            let trigger = author_trigger(
                &path,
                TriggerId(index as u32 + 1),
                point,
                plan.level_weight,
                plan.mounted_weight,
                plan.shots,
            )?;
            debug!(trigger = %trigger.label(), "Authored shot trigger");
            triggers.push(trigger);
        }

        let sequencer = ShotTriggerSequencer::new(triggers).with_stunt_bank(
            STUNT_BANK,
            vec![
                WeightedOption::new(CameraId(5), 1.0),
                WeightedOption::new(CameraId(6), 1.0),
            ],
        );

        let rig = MountedCameraRig::new(MountRigConfig::default(), bank);
        let director_config = DirectorConfig {
            min_shot_delay_secs: config.min_shot_delay_secs,
            prewarm_ticks: config.prewarm_ticks,
            ..Default::default()
        };
        let director = ShotDirector::new(director_config, sequencer)
            .with_mounted(MountedCameraDirector::new(rig))
            .with_seed(rng.random());

        Ok(Self {
            path,
            cameras,
            director,
            shake: CameraShake::new(SHAKE_CAMERA, shake_config.clone()),
            detector: PassByDetector::new(shake_position, shake_config.max_distance),
        })
    }
}

fn trigger_plans() -> Vec<TriggerPlan> {
    let linked = |primary: u32, secondary: u32| {
        LevelShots::Linked(vec![
            WeightedOption::new(CameraId(primary), 1.0),
            WeightedOption::new(CameraId(secondary), 0.3),
        ])
    };
    vec![
        TriggerPlan {
            at: 0.0,
            level_weight: 1.0,
            mounted_weight: 0.25,
            shots: linked(1, 2),
        },
        TriggerPlan {
            at: 0.15,
            level_weight: 1.0,
            mounted_weight: 0.25,
            shots: linked(2, 3),
        },
        TriggerPlan {
            at: 0.3,
            level_weight: 1.0,
            mounted_weight: 0.5,
            shots: linked(3, 4),
        },
        TriggerPlan {
            at: 0.5,
            level_weight: 0.0,
            mounted_weight: 1.0,
            shots: LevelShots::default(),
        },
        TriggerPlan {
            at: 0.65,
            level_weight: 1.0,
            mounted_weight: 0.25,
            shots: linked(4, 1),
        },
        TriggerPlan {
            at: 0.85,
            level_weight: 1.0,
            mounted_weight: 0.0,
            shots: LevelShots::Stunt(STUNT_BANK),
        },
    ]
}
