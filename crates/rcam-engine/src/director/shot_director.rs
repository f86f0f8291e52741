//! Top-level shot switching.
//!
//! The director follows one tracked vehicle around the loop. Whenever the
//! vehicle passes a new shot trigger, and enough time has gone by since the
//! last accepted change, the trigger is resolved to a camera and a prewarmed
//! switch begins.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rcam_models::{CameraId, TriggerId, VehicleId};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::DirectorConfig;
use super::transition::{Transition, TransitionScheduler};
use crate::cameras::CameraRegistry;
use crate::error::{EngineError, EngineResult};
use crate::geometry::{PathGeometryProvider, TrackView};
use crate::metrics;
use crate::mounted::MountedCameraDirector;
use crate::telemetry::VehicleTelemetry;
use crate::triggers::{ShotResolution, ShotTriggerSequencer};

/// Collaborators the director works against, built by the owning loop.
pub struct DirectorContext<'a> {
    pub path: &'a dyn PathGeometryProvider,
    pub telemetry: &'a dyn VehicleTelemetry,
    pub cameras: &'a mut CameraRegistry,
}

impl<'a> DirectorContext<'a> {
    pub fn new(
        path: &'a dyn PathGeometryProvider,
        telemetry: &'a dyn VehicleTelemetry,
        cameras: &'a mut CameraRegistry,
    ) -> Self {
        Self {
            path,
            telemetry,
            cameras,
        }
    }
}

/// Lifecycle state of the director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorStatus {
    /// Not driving the main display.
    Inactive,
    /// Switching shots every tick.
    Active,
    /// Failed validation; ignores toggles for good.
    Disabled,
}

/// Shot state owned by the director.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveShotState {
    /// Camera most recently chosen, possibly still prewarming
    pub active_camera: Option<CameraId>,
    pub selected_trigger: Option<TriggerId>,
    /// Seconds since the last accepted trigger change
    pub hysteresis_timer: f64,
}

impl Default for ActiveShotState {
    fn default() -> Self {
        Self {
            active_camera: None,
            selected_trigger: None,
            // Saturated so the very first trigger is accepted immediately.
            hysteresis_timer: f64::INFINITY,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub accepted_trigger: Option<TriggerId>,
    /// Camera that began prewarming
    pub switch_started: Option<CameraId>,
    /// Camera raised to presented priority
    pub switch_completed: Option<CameraId>,
}

/// Shot switching state machine with hysteresis and prewarmed transitions.
pub struct ShotDirector {
    config: DirectorConfig,
    sequencer: ShotTriggerSequencer,
    mounted: Option<MountedCameraDirector>,
    rng: StdRng,
    status: DirectorStatus,
    /// Vehicle whose progress drives trigger selection
    target: Option<VehicleId>,
    state: ActiveShotState,
    transitions: TransitionScheduler,
}

impl ShotDirector {
    /// Create an inactive director. The configuration is clamped.
    pub fn new(config: DirectorConfig, sequencer: ShotTriggerSequencer) -> Self {
        Self {
            config: config.clamped(),
            sequencer,
            mounted: None,
            rng: StdRng::from_os_rng(),
            status: DirectorStatus::Inactive,
            target: None,
            state: ActiveShotState::default(),
            transitions: TransitionScheduler::new(),
        }
    }

    pub fn with_mounted(mut self, mounted: MountedCameraDirector) -> Self {
        self.mounted = Some(mounted);
        self
    }

    /// Use a seeded random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_target(mut self, target: VehicleId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn sequencer(&self) -> &ShotTriggerSequencer {
        &self.sequencer
    }

    pub fn mounted(&self) -> Option<&MountedCameraDirector> {
        self.mounted.as_ref()
    }

    pub fn status(&self) -> DirectorStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == DirectorStatus::Active
    }

    pub fn state(&self) -> &ActiveShotState {
        &self.state
    }

    pub fn target(&self) -> Option<VehicleId> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<VehicleId>) {
        self.target = target;
    }

    pub fn pending_transition(&self) -> Option<&Transition> {
        self.transitions.pending()
    }

    /// Check that every collaborator the director needs is present.
    pub fn validate(&self, ctx: &DirectorContext<'_>) -> EngineResult<()> {
        if !ctx.path.is_built() {
            return Err(EngineError::missing_collaborator("track path geometry is not built"));
        }
        if self.mounted.is_none() && self.sequencer.may_resolve_mounted() {
            return Err(EngineError::missing_collaborator("mounted camera director"));
        }
        if let Some(mounted) = &self.mounted {
            mounted.rig().validate(ctx.cameras)?;
        }
        for camera in self.sequencer.referenced_cameras() {
            if !ctx.cameras.contains(camera) {
                return Err(EngineError::UnknownCamera(camera));
            }
        }
        Ok(())
    }

    /// Validate and reset. On failure the director disables itself and
    /// returns the reason; the rest of the system carries on without it.
    pub fn init(&mut self, ctx: &mut DirectorContext<'_>) -> EngineResult<()> {
        if let Err(e) = self.validate(ctx) {
            warn!(error = %e, "Disabling shot director");
            self.status = DirectorStatus::Disabled;
            return Err(e);
        }

        ctx.cameras.init();
        self.transitions.cancel();
        self.state = ActiveShotState::default();
        self.status = DirectorStatus::Inactive;
        info!(
            triggers = self.sequencer.len(),
            cameras = ctx.cameras.len(),
            mounted = self.mounted.is_some(),
            "Shot director initialized"
        );
        Ok(())
    }

    /// Switch between driving the display and standing by. Idempotent.
    pub fn set_active(&mut self, active: bool, ctx: &mut DirectorContext<'_>) {
        if self.status == DirectorStatus::Disabled {
            warn!(active, "Ignoring toggle on disabled shot director");
            return;
        }
        if self.is_active() == active {
            return;
        }

        if active {
            if self.target.is_none() {
                self.target = ctx.telemetry.primary_vehicle();
            }
            self.status = DirectorStatus::Active;
            info!(target = ?self.target, "Shot director active");

            let mut report = TickReport::default();
            if let Err(e) = self.refresh(0.0, ctx, &mut report) {
                log_refresh_error(&e);
            }
        } else {
            self.status = DirectorStatus::Inactive;
            if let Some(pending) = self.transitions.cancel() {
                if ctx.cameras.presented() != Some(pending.incoming) {
                    if let Err(e) = ctx.cameras.disable(pending.incoming) {
                        warn!(error = %e, "Failed to disable prewarming camera");
                    }
                }
            }
            self.state.active_camera = ctx.cameras.presented();
            info!("Shot director inactive");
        }
    }

    /// Advance one tick of `dt` seconds.
    ///
    /// Pending transitions advance first, even while inactive. Errors for
    /// unbuilt geometry mean "skip this tick".
    pub fn tick(&mut self, dt: f64, ctx: &mut DirectorContext<'_>) -> EngineResult<TickReport> {
        let mut report = TickReport::default();

        if let Some(transition) = self.transitions.advance() {
            Self::complete_transition(transition, ctx.cameras, &mut report)?;
        }

        if self.is_active() {
            self.refresh(dt, ctx, &mut report)?;
        }
        Ok(report)
    }

    fn refresh(&mut self, dt: f64, ctx: &mut DirectorContext<'_>, report: &mut TickReport) -> EngineResult<()> {
        let Some(target) = self.target else {
            return Ok(());
        };
        let Some(position) = ctx.telemetry.track_position(target) else {
            return Ok(());
        };
        let view = TrackView::new(ctx.path, ctx.telemetry)?;

        // Time this tick counts towards the delay before the gate is checked.
        self.state.hysteresis_timer += dt;

        let Some(trigger) = self.sequencer.nearest_behind(position.along) else {
            return Ok(());
        };

        let changed = self.state.selected_trigger != Some(trigger.id);
        if !changed || self.state.hysteresis_timer < self.config.min_shot_delay_secs {
            return Ok(());
        }

        let trigger_id = trigger.id;
        debug!(trigger = %trigger.label(), progress = position.along, "Accepted shot trigger");
        let resolution = self.sequencer.resolve(trigger, &mut self.rng);

        self.state.selected_trigger = Some(trigger_id);
        self.state.hysteresis_timer = 0.0;
        report.accepted_trigger = Some(trigger_id);

        let camera = match resolution {
            ShotResolution::Level(camera) => Some(camera),
            ShotResolution::Mounted => self.mounted_camera(target, &view, ctx.cameras),
        };
        self.switch_to(camera, target, ctx.cameras, report)
    }

    fn mounted_camera(&mut self, follow: VehicleId, view: &TrackView<'_>, cameras: &mut CameraRegistry) -> Option<CameraId> {
        let Some(mounted) = self.mounted.as_mut() else {
            warn!("Mounted shot requested without a mounted camera director");
            return None;
        };
        match mounted.best_mounted_camera(Some(follow), None, view, cameras, &mut self.rng) {
            Ok(camera) => camera,
            Err(e) => {
                warn!(error = %e, "Mounted camera selection failed");
                None
            }
        }
    }

    fn switch_to(
        &mut self,
        camera: Option<CameraId>,
        target: VehicleId,
        cameras: &mut CameraRegistry,
        report: &mut TickReport,
    ) -> EngineResult<()> {
        let Some(camera) = camera else {
            debug!("Trigger resolved to no camera");
            metrics::record_switch_refused("no_camera");
            return Ok(());
        };
        let Some(spec) = cameras.spec(camera) else {
            warn!(camera = %camera, "Refusing switch to unknown camera");
            metrics::record_switch_refused("unknown");
            return Ok(());
        };
        let overrides_look_at = spec.kind.overrides_look_at();
        if !cameras.is_available(camera) {
            warn!(camera = %camera, "Refusing switch to unavailable camera");
            metrics::record_switch_refused("unavailable");
            return Ok(());
        }

        if !overrides_look_at {
            cameras.bind_look_at(camera, Some(target))?;
        }

        if self.state.active_camera == Some(camera) {
            debug!(camera = %camera, "Camera already active, no transition");
            return Ok(());
        }
        self.begin_transition(camera, cameras, report)
    }

    fn begin_transition(&mut self, incoming: CameraId, cameras: &mut CameraRegistry, report: &mut TickReport) -> EngineResult<()> {
        let presented = cameras.presented();

        if let Some(stale) = self.transitions.cancel() {
            metrics::record_transition_superseded();
            debug!(
                generation = stale.generation,
                camera = %stale.incoming,
                "Superseding pending transition"
            );
            if presented != Some(stale.incoming) && stale.incoming != incoming {
                cameras.disable(stale.incoming)?;
            }
        }

        self.state.active_camera = Some(incoming);
        if presented == Some(incoming) {
            debug!(camera = %incoming, "Camera already presented, no prewarm");
            return Ok(());
        }

        cameras.prewarm(incoming, self.config.world_up)?;
        report.switch_started = Some(incoming);

        let (transition, _) = self.transitions.schedule(incoming, self.config.prewarm_ticks);
        debug!(
            generation = transition.generation,
            camera = %incoming,
            ticks = self.config.prewarm_ticks,
            "Prewarming camera"
        );

        if self.config.prewarm_ticks == 0 {
            if let Some(transition) = self.transitions.advance() {
                Self::complete_transition(transition, cameras, report)?;
            }
        }
        Ok(())
    }

    fn complete_transition(transition: Transition, cameras: &mut CameraRegistry, report: &mut TickReport) -> EngineResult<()> {
        if let Some(previous) = cameras.presented() {
            if previous != transition.incoming {
                cameras.disable(previous)?;
            }
        }
        cameras.present(transition.incoming)?;

        let kind = match cameras.spec(transition.incoming) {
            Some(spec) if spec.kind.is_mounted() => "mounted",
            _ => "level",
        };
        metrics::record_shot_switch(kind);
        info!(
            camera = %transition.incoming,
            generation = transition.generation,
            kind,
            "Shot switched"
        );
        report.switch_completed = Some(transition.incoming);
        Ok(())
    }
}

fn log_refresh_error(error: &EngineError) {
    if error.is_skip_tick() {
        debug!(error = %error, "Skipping shot refresh");
    } else {
        warn!(error = %error, "Shot refresh failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ClosedPath;
    use crate::telemetry::StaticTelemetry;
    use glam::DVec3;
    use rcam_models::{CameraSpec, LevelShots, ShotTrigger, TrackPosition, WeightedOption};

    const CAR: VehicleId = VehicleId(1);

    fn path() -> ClosedPath {
        ClosedPath::built(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 150.0),
            DVec3::new(100.0, 0.0, 150.0),
            DVec3::new(100.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    fn linked(id: u32) -> LevelShots {
        LevelShots::Linked(vec![WeightedOption::new(CameraId(id), 1.0)])
    }

    fn registry() -> CameraRegistry {
        let mut registry = CameraRegistry::new();
        for id in 1..=3 {
            registry
                .register_headless(CameraSpec::standard(CameraId(id), format!("trackside {}", id)))
                .unwrap();
        }
        registry
    }

    fn director(min_delay: f64) -> ShotDirector {
        let sequencer = ShotTriggerSequencer::new(vec![
            ShotTrigger::new(TriggerId(1), 0.0, 500.0, 1.0, 0.0, linked(1)),
            ShotTrigger::new(TriggerId(2), 100.0, 500.0, 1.0, 0.0, linked(2)),
            ShotTrigger::new(TriggerId(3), 200.0, 500.0, 1.0, 0.0, linked(3)),
        ]);
        let config = DirectorConfig {
            min_shot_delay_secs: min_delay,
            ..Default::default()
        };
        ShotDirector::new(config, sequencer).with_seed(1).with_target(CAR)
    }

    #[test]
    fn test_validation_failure_disables_director() {
        let path = path();
        let telemetry = StaticTelemetry::new();
        let mut cameras = CameraRegistry::new();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let mut director = director(0.0);
        assert!(matches!(director.init(&mut ctx), Err(EngineError::UnknownCamera(_))));
        assert_eq!(director.status(), DirectorStatus::Disabled);

        director.set_active(true, &mut ctx);
        assert_eq!(director.status(), DirectorStatus::Disabled);
    }

    #[test]
    fn test_missing_mounted_director_is_reported() {
        let path = path();
        let telemetry = StaticTelemetry::new();
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let sequencer = ShotTriggerSequencer::new(vec![ShotTrigger::new(
            TriggerId(1),
            0.0,
            500.0,
            0.0,
            1.0,
            linked(1),
        )]);
        let mut director = ShotDirector::new(DirectorConfig::default(), sequencer);
        assert!(matches!(
            director.init(&mut ctx),
            Err(EngineError::MissingCollaborator(_))
        ));
    }

    #[test]
    fn test_unbuilt_path_is_reported() {
        let path = ClosedPath::new(vec![DVec3::ZERO, DVec3::X, DVec3::Z]);
        let telemetry = StaticTelemetry::new();
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);
        assert!(director(0.0).validate(&ctx).is_err());
        assert!(matches!(director(0.0).init(&mut ctx), Err(EngineError::MissingCollaborator(_))));
    }

    #[test]
    fn test_activation_switches_immediately_and_prewarms() {
        let path = path();
        let telemetry = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let mut director = director(2.0);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);

        assert_eq!(director.state().selected_trigger, Some(TriggerId(2)));
        assert_eq!(director.state().active_camera, Some(CameraId(2)));
        assert_eq!(director.state().hysteresis_timer, 0.0);

        // Enabled but not presented during the prewarm window.
        let state = *ctx.cameras.state(CameraId(2)).unwrap();
        assert!(state.enabled);
        assert_eq!(state.bindings.look_at, Some(CAR));
        assert_eq!(ctx.cameras.presented(), None);

        let mut completed = None;
        for _ in 0..3 {
            assert!(completed.is_none());
            completed = director.tick(0.016, &mut ctx).unwrap().switch_completed;
        }
        assert_eq!(completed, Some(CameraId(2)));
        assert_eq!(ctx.cameras.presented(), Some(CameraId(2)));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let path = path();
        let telemetry = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let mut director = director(0.0);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);
        let pending = director.pending_transition().copied();
        director.set_active(true, &mut ctx);
        assert_eq!(director.pending_transition().copied(), pending);

        director.set_active(false, &mut ctx);
        director.set_active(false, &mut ctx);
        assert_eq!(director.status(), DirectorStatus::Inactive);
        // The cancelled prewarm camera is switched back off.
        assert!(ctx.cameras.enabled().is_empty());
        assert_eq!(director.state().active_camera, None);
    }

    #[test]
    fn test_primary_vehicle_adopted_on_activation() {
        let path = path();
        let telemetry = StaticTelemetry::new()
            .with_vehicle(VehicleId(4), TrackPosition::new(10.0, 0.0))
            .with_primary(VehicleId(4));
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let sequencer = ShotTriggerSequencer::new(vec![ShotTrigger::new(TriggerId(1), 0.0, 500.0, 1.0, 0.0, linked(1))]);
        let mut director = ShotDirector::new(DirectorConfig::default(), sequencer).with_seed(3);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);

        assert_eq!(director.target(), Some(VehicleId(4)));
        assert_eq!(director.state().active_camera, Some(CameraId(1)));
    }

    #[test]
    fn test_untracked_vehicle_is_a_no_op() {
        let path = path();
        let telemetry = StaticTelemetry::new();
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let mut director = director(0.0);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);
        let report = director.tick(0.1, &mut ctx).unwrap();

        assert_eq!(report, TickReport::default());
        assert_eq!(director.state().selected_trigger, None);
        assert_eq!(director.state().hysteresis_timer, f64::INFINITY);
    }

    #[test]
    fn test_unavailable_camera_refused_but_trigger_consumed() {
        let path = path();
        let telemetry = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut cameras = registry();
        cameras.set_available(CameraId(2), false).unwrap();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let mut director = director(0.0);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);

        assert_eq!(director.state().selected_trigger, Some(TriggerId(2)));
        assert_eq!(director.state().hysteresis_timer, 0.0);
        assert_eq!(director.state().active_camera, None);
        assert!(ctx.cameras.enabled().is_empty());
    }

    #[test]
    fn test_zero_prewarm_presents_immediately() {
        let path = path();
        let telemetry = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(220.0, 0.0));
        let mut cameras = registry();
        let mut ctx = DirectorContext::new(&path, &telemetry, &mut cameras);

        let sequencer = ShotTriggerSequencer::new(vec![ShotTrigger::new(TriggerId(3), 200.0, 500.0, 1.0, 0.0, linked(3))]);
        let config = DirectorConfig {
            prewarm_ticks: 0,
            ..Default::default()
        };
        let mut director = ShotDirector::new(config, sequencer).with_seed(9).with_target(CAR);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);

        assert_eq!(ctx.cameras.presented(), Some(CameraId(3)));
        assert!(director.pending_transition().is_none());
    }

    #[test]
    fn test_change_exactly_min_delay_later_is_accepted() {
        let path = path();
        let mut cameras = registry();
        let mut director = director(1.0);

        let at_trigger_one = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(50.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_one, &mut cameras);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);
        assert_eq!(director.state().selected_trigger, Some(TriggerId(1)));
        director.tick(0.5, &mut ctx).unwrap();

        let at_trigger_two = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_two, &mut cameras);
        let report = director.tick(0.5, &mut ctx).unwrap();

        assert_eq!(report.accepted_trigger, Some(TriggerId(2)));
        assert_eq!(director.state().active_camera, Some(CameraId(2)));
        assert_eq!(director.state().hysteresis_timer, 0.0);
    }

    #[test]
    fn test_change_just_before_min_delay_is_held_back() {
        let path = path();
        let mut cameras = registry();
        let mut director = director(1.0);

        let at_trigger_one = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(50.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_one, &mut cameras);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);

        let at_trigger_two = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_two, &mut cameras);
        let report = director.tick(0.75, &mut ctx).unwrap();
        assert_eq!(report.accepted_trigger, None);
        assert_eq!(director.state().selected_trigger, Some(TriggerId(1)));

        let report = director.tick(0.25, &mut ctx).unwrap();
        assert_eq!(report.accepted_trigger, Some(TriggerId(2)));
    }

    #[test]
    fn test_superseded_prewarm_never_completes() {
        let path = path();
        let mut cameras = registry();
        let mut director = director(0.0);

        let at_trigger_one = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(50.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_one, &mut cameras);
        director.init(&mut ctx).unwrap();
        director.set_active(true, &mut ctx);
        for _ in 0..3 {
            director.tick(0.1, &mut ctx).unwrap();
        }
        assert_eq!(ctx.cameras.presented(), Some(CameraId(1)));

        let at_trigger_two = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(120.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_two, &mut cameras);
        director.tick(0.1, &mut ctx).unwrap();
        let stale = *director.pending_transition().unwrap();
        assert_eq!(stale.incoming, CameraId(2));

        let at_trigger_three = StaticTelemetry::new().with_vehicle(CAR, TrackPosition::new(220.0, 0.0));
        let mut ctx = DirectorContext::new(&path, &at_trigger_three, &mut cameras);
        director.tick(0.1, &mut ctx).unwrap();
        let fresh = *director.pending_transition().unwrap();
        assert!(fresh.generation > stale.generation);
        assert!(!ctx.cameras.state(CameraId(2)).unwrap().enabled);

        let mut completed = Vec::new();
        for _ in 0..5 {
            completed.extend(director.tick(0.1, &mut ctx).unwrap().switch_completed);
        }
        assert_eq!(completed, vec![CameraId(3)]);
        assert_eq!(ctx.cameras.enabled(), vec![CameraId(3)]);
    }
}
