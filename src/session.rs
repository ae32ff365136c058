//! One toasting run from shade selection to release
//!
//! The session owns the control-side state: target shade, phase tracker,
//! power selection and the latest aggregate reading. Each cycle it drains
//! pending UI intents, samples the sensors, advances the phase machine and
//! picks the heater level. A cycle with no valid sensors holds the current
//! level and phase; it never counts toward completion.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::{Duration, Instant};

use crate::intent::{IntentProcessor, IntentReceiver, SessionCommand};
use crate::model::{BrowningModel, BrowningModelConfig};
use crate::phase::{BrowningPhase, PhaseTracker, PhaseTrackerConfig};
use crate::power::{PowerController, PowerLevel};
use crate::sensor::{AggregateReading, SensorAggregator, SensorBus};
use crate::shade::ShadeTarget;

/// Consecutive all-fail cycles before the outage alert is raised.
const FAILURE_ALERT_STREAK: u16 = 10;

/// Configuration for the toast session
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub model: BrowningModelConfig,
    pub phases: PhaseTrackerConfig,
    /// Half-width of the on-model band, in L* units
    pub dead_band_l: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: BrowningModelConfig::default(),
            phases: PhaseTrackerConfig::default(),
            dead_band_l: 2.0,
        }
    }
}

/// What the heater should do after one control cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOutput {
    /// Level to hold until the next cycle
    pub level: PowerLevel,
    /// Toast has reached the target shade
    pub ready: bool,
}

/// Progress snapshot for the UI collaborator.
#[derive(Clone, Copy, Debug)]
pub struct SessionStatus {
    pub phase: BrowningPhase,
    /// Mean lightness from the most recent valid cycle
    pub lightness: Option<f32>,
    pub ready: bool,
    /// The sensors have been dark for long enough to warrant attention
    pub sensor_outage: bool,
}

/// Toast session - the main orchestrator
pub struct ToastSession<'a, B, const SENSORS: usize> {
    // External dependencies and configuration
    intent_processor: IntentProcessor<'a>,
    aggregator: SensorAggregator<B, SENSORS>,

    // Control components
    model: BrowningModel,
    tracker: PhaseTracker,
    controller: PowerController,

    // Internal state
    target: Option<ShadeTarget>,
    started_at: Option<Instant>,
    level: PowerLevel,
    last_reading: Option<AggregateReading>,
    ready: bool,
    failed_cycles: u16,
}

impl<'a, B: SensorBus, const SENSORS: usize> ToastSession<'a, B, SENSORS> {
    /// Create a new session around an intent mailbox and a sensor bus.
    ///
    /// The session is idle (heater off) until a shade is selected.
    pub fn new(intents: IntentReceiver<'a>, bus: B, config: &SessionConfig) -> Self {
        Self {
            intent_processor: IntentProcessor::new(intents),
            aggregator: SensorAggregator::new(bus),
            model: BrowningModel::new(config.model),
            tracker: PhaseTracker::new(config.phases),
            controller: PowerController::new(config.dead_band_l),
            target: None,
            started_at: None,
            level: PowerLevel::Off,
            last_reading: None,
            ready: false,
            failed_cycles: 0,
        }
    }

    /// Run one control cycle.
    ///
    /// This is the main control loop step. Call this once per cycle period.
    pub fn cycle(&mut self, now: Instant) -> CycleOutput {
        self.process_intents(now);

        let Some(target) = self.target else {
            return CycleOutput {
                level: PowerLevel::Off,
                ready: false,
            };
        };

        if self.ready {
            // Frozen until the next shade selection resets the session
            return CycleOutput {
                level: PowerLevel::Off,
                ready: true,
            };
        }

        match self.aggregator.sample_all() {
            Ok(reading) => {
                self.failed_cycles = 0;
                self.last_reading = Some(reading);
                self.advance(now, target, reading);
            }
            Err(_) => self.note_failed_cycle(),
        }

        CycleOutput {
            level: self.level,
            ready: self.ready,
        }
    }

    /// Progress snapshot for the UI collaborator.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.tracker.phase(),
            lightness: self.last_reading.map(|reading| reading.mean_l),
            ready: self.ready,
            sensor_outage: self.failed_cycles >= FAILURE_ALERT_STREAK,
        }
    }

    /// Rough time left until the target shade, for progress display.
    ///
    /// `None` until a target is selected and a reading has arrived.
    pub fn estimated_remaining(&self) -> Option<Duration> {
        let target = self.target?;
        let reading = self.last_reading?;
        if self.ready {
            return Some(Duration::from_secs(0));
        }
        Some(self.model.time_to_reach(reading.mean_l, target.threshold_l()))
    }

    pub const fn target(&self) -> Option<ShadeTarget> {
        self.target
    }

    pub const fn power_level(&self) -> PowerLevel {
        self.level
    }

    /// Process the pending intent from the mailbox (non-blocking)
    fn process_intents(&mut self, now: Instant) {
        match self.intent_processor.take_pending() {
            Some(SessionCommand::StartRun(target)) => self.start_run(target, now),
            Some(SessionCommand::Abort) => self.abort(),
            None => {}
        }
    }

    fn start_run(&mut self, target: ShadeTarget, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ToastSession.start_run] target {} (L* <= {})",
            target.as_str(),
            target.threshold_l()
        );
        self.target = Some(target);
        self.started_at = Some(now);
        self.tracker.reset();
        self.level = PowerLevel::Off;
        self.last_reading = None;
        self.ready = false;
        self.failed_cycles = 0;
    }

    fn abort(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[ToastSession.abort] heater off, session cleared");
        self.target = None;
        self.started_at = None;
        self.tracker.reset();
        self.level = PowerLevel::Off;
        self.last_reading = None;
        self.ready = false;
        self.failed_cycles = 0;
    }

    /// Advance phase and power from one valid aggregate reading.
    fn advance(&mut self, now: Instant, target: ShadeTarget, reading: AggregateReading) {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.duration_since(started);

        if let Some(phase) = self
            .tracker
            .update(reading.mean_l, target.threshold_l(), elapsed)
        {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ToastSession.advance] entering {} at L*={} after {}s",
                phase.as_str(),
                reading.mean_l,
                elapsed.as_secs()
            );
            if phase == BrowningPhase::Done {
                self.ready = true;
            }
        }

        let expected = self.model.predict(elapsed, self.tracker.phase());
        let error = reading.mean_l - expected;
        self.level = self.controller.next_level(self.tracker.phase(), error);
    }

    fn note_failed_cycle(&mut self) {
        self.failed_cycles = self.failed_cycles.saturating_add(1);
        #[cfg(feature = "esp32-log")]
        {
            println!(
                "[ToastSession.cycle] no valid sensors, holding {}",
                self.level.as_str()
            );
            if self.failed_cycles == FAILURE_ALERT_STREAK {
                println!(
                    "[ToastSession.cycle] sensor outage: {} cycles without a reading",
                    FAILURE_ALERT_STREAK
                );
            }
        }
    }
}
