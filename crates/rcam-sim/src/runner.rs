//! Tick loop driving the scenario.

use std::future::Future;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rcam_engine::{DirectorContext, DirectorStatus, PathGeometryProvider};
use rcam_models::{CameraId, TriggerId};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::{debug, Instrument};
use uuid::Uuid;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::logging::{SessionLogger, TickContext};
use crate::metrics;
use crate::scenario::Scenario;
use crate::telemetry::TrafficField;

/// Batch runs hand control back to the runtime this often.
const YIELD_EVERY_TICKS: u64 = 256;

/// Simulated seconds between progress log lines.
const PROGRESS_EVERY_SECS: u64 = 10;

/// Outcome of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub ticks: u64,
    pub simulated_secs: f64,
    pub triggers_accepted: u64,
    pub shot_switches: u64,
    pub final_camera: Option<CameraId>,
    pub final_trigger: Option<TriggerId>,
    pub director_status: DirectorStatus,
    pub shake_impulses: u64,
    pub peak_shake_amplitude: f64,
    /// Stopped by a shutdown signal before the configured duration
    pub interrupted: bool,
}

#[derive(Debug, Default)]
struct RunStats {
    ticks: u64,
    triggers_accepted: u64,
    shot_switches: u64,
    shake_impulses: u64,
    peak_shake_amplitude: f64,
}

/// Owns the scenario and traffic and advances them tick by tick.
pub struct SimRunner {
    config: SimConfig,
    session_id: Uuid,
    logger: SessionLogger,
    scenario: Scenario,
    traffic: TrafficField,
    started_at: DateTime<Utc>,
    stats: RunStats,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let scenario = Scenario::build(&config, &mut rng)?;
        let traffic = TrafficField::grid(config.vehicles, scenario.path.total_length()?, &mut rng);
        let session_id = Uuid::new_v4();

        Ok(Self {
            logger: SessionLogger::new(&session_id, config.seed),
            config,
            session_id,
            scenario,
            traffic,
            started_at: Utc::now(),
            stats: RunStats::default(),
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn traffic(&self) -> &TrafficField {
        &self.traffic
    }

    /// Initialize the director and put it on air.
    ///
    /// A director that fails validation is left disabled; the rest of the
    /// simulation keeps running without it.
    pub fn start(&mut self) -> SimResult<()> {
        self.started_at = Utc::now();
        metrics::set_vehicle_count(self.traffic.vehicles().len());

        let mut ctx = DirectorContext::new(&self.scenario.path, &self.traffic, &mut self.scenario.cameras);
        match self.scenario.director.init(&mut ctx) {
            Ok(()) => self.scenario.director.set_active(true, &mut ctx),
            Err(e) => self.logger.log_director_disabled(&e),
        }

        self.logger.log_start(
            self.traffic.vehicles().len(),
            self.traffic.track_length(),
            self.config.duration.as_secs_f64(),
        );
        Ok(())
    }

    /// Advance the whole scenario by one tick.
    pub fn step(&mut self) -> SimResult<()> {
        let dt = self.config.dt();
        self.traffic.advance(dt);

        for vehicle in self.traffic.vehicles() {
            let shaker = self.traffic.shaker(&self.scenario.path, vehicle)?;
            if let Some(event) = self.scenario.detector.observe(vehicle.id, &shaker) {
                if self.scenario.shake.on_collision(&event) {
                    self.stats.shake_impulses += 1;
                }
            }
        }
        let signal = self.scenario.shake.tick(dt, &mut self.scenario.cameras)?;
        self.stats.peak_shake_amplitude = self.stats.peak_shake_amplitude.max(signal.amplitude);

        let mut ctx = DirectorContext::new(&self.scenario.path, &self.traffic, &mut self.scenario.cameras);
        match self.scenario.director.tick(dt, &mut ctx) {
            Ok(report) => {
                if report.accepted_trigger.is_some() {
                    self.stats.triggers_accepted += 1;
                }
                if report.switch_completed.is_some() {
                    self.stats.shot_switches += 1;
                    self.logger.log_shot_switch(&self.tick_context());
                }
            }
            Err(e) if e.is_skip_tick() => {
                metrics::record_skipped_tick();
                debug!(error = %e, "Director skipped tick");
            }
            Err(e) => return Err(SimError::from(e)),
        }

        self.stats.ticks += 1;
        metrics::record_tick();
        Ok(())
    }

    /// Run until the configured duration elapses or `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> SimResult<RunSummary>
    where
        F: Future<Output = ()>,
    {
        let span = self.logger.create_span();
        self.run_inner(shutdown).instrument(span).await
    }

    async fn run_inner<F>(mut self, shutdown: F) -> SimResult<RunSummary>
    where
        F: Future<Output = ()>,
    {
        self.start()?;

        let total_ticks = self.config.total_ticks();
        let progress_every = u64::from(self.config.tick_hz) * PROGRESS_EVERY_SECS;
        let mut interval = self.config.realtime.then(|| {
            let mut interval = tokio::time::interval(self.config.tick_interval());
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        tokio::pin!(shutdown);
        let mut interrupted = false;

        while self.stats.ticks < total_ticks {
            match interval.as_mut() {
                Some(interval) => {
                    tokio::select! {
                        _ = &mut shutdown => {
                            interrupted = true;
                            break;
                        }
                        _ = interval.tick() => {}
                    }
                }
                None => {
                    if self.stats.ticks % YIELD_EVERY_TICKS == 0 {
                        tokio::task::yield_now().await;
                    }
                    tokio::select! {
                        biased;
                        _ = &mut shutdown => {
                            interrupted = true;
                            break;
                        }
                        _ = std::future::ready(()) => {}
                    }
                }
            }

            if let Err(e) = self.step() {
                self.logger.log_tick_failure(&self.tick_context(), &e);
                return Err(e);
            }

            if progress_every > 0 && self.stats.ticks % progress_every == 0 {
                self.logger.log_progress(&self.tick_context(), self.stats.shot_switches);
            }
        }

        let summary = self.summary(interrupted);
        self.logger.log_completion(
            &self.tick_context(),
            summary.shot_switches,
            summary.peak_shake_amplitude,
            interrupted,
        );
        Ok(summary)
    }

    fn tick_context(&self) -> TickContext {
        TickContext {
            tick: self.stats.ticks,
            sim_secs: self.simulated_secs(),
            camera: self.scenario.cameras.presented(),
            trigger: self.scenario.director.state().selected_trigger,
        }
    }

    fn simulated_secs(&self) -> f64 {
        self.stats.ticks as f64 * self.config.dt()
    }

    fn summary(&self, interrupted: bool) -> RunSummary {
        RunSummary {
            session_id: self.session_id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            ticks: self.stats.ticks,
            simulated_secs: self.simulated_secs(),
            triggers_accepted: self.stats.triggers_accepted,
            shot_switches: self.stats.shot_switches,
            final_camera: self.scenario.cameras.presented(),
            final_trigger: self.scenario.director.state().selected_trigger,
            director_status: self.scenario.director.status(),
            shake_impulses: self.stats.shake_impulses,
            peak_shake_amplitude: self.stats.peak_shake_amplitude,
            interrupted,
        }
    }
}
