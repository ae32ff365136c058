//! Control cycle pacing
//!
//! Runs the session at a fixed period and owns the heater capability.
//! The caller is responsible for sleeping/waiting between cycles.

use embassy_time::{Duration, Instant};

use crate::HeaterDriver;
use crate::power::PowerLevel;
use crate::sensor::SensorBus;
use crate::session::ToastSession;

/// Default control rate (1 Hz).
pub const DEFAULT_CYCLE_DURATION: Duration = Duration::from_secs(1);

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct CycleResult {
    /// The deadline for the next cycle.
    pub next_deadline: Instant,
    /// How long to wait until the next cycle (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable cycle scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks cycle timing with drift correction
/// - Runs the session and applies its output to the heater
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = CycleScheduler::new(session, heater);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct CycleScheduler<'a, H: HeaterDriver, B: SensorBus, const SENSORS: usize> {
    heater: H,
    session: ToastSession<'a, B, SENSORS>,
    next_cycle: Instant,
    cycle_duration: Duration,
    applied_level: Option<PowerLevel>,
    ready_line: bool,
}

impl<'a, H: HeaterDriver, B: SensorBus, const SENSORS: usize>
    CycleScheduler<'a, H, B, SENSORS>
{
    /// Create a new cycle scheduler.
    ///
    /// Uses `DEFAULT_CYCLE_DURATION` (1 Hz) for cycle timing.
    pub fn new(session: ToastSession<'a, B, SENSORS>, heater: H) -> Self {
        Self::with_cycle_duration(session, heater, DEFAULT_CYCLE_DURATION)
    }

    /// Create a new cycle scheduler with custom cycle duration.
    pub fn with_cycle_duration(
        session: ToastSession<'a, B, SENSORS>,
        heater: H,
        cycle_duration: Duration,
    ) -> Self {
        Self {
            heater,
            session,
            next_cycle: Instant::from_millis(0),
            cycle_duration,
            applied_level: None,
            ready_line: false,
        }
    }

    /// Run one control cycle and return timing information.
    ///
    /// Heater writes are fire-and-forget; a level that did not change is
    /// not rewritten, so holding a level across cycles costs nothing. The
    /// ready line is raised on the cycle the toast completes and dropped
    /// when the session resets.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> CycleResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.cycle_duration.as_millis() * 2;
        if now.as_millis() > self.next_cycle.as_millis() + max_drift_ms {
            self.next_cycle = now;
        }

        // Run the control cycle and apply its output
        let output = self.session.cycle(now);
        if self.applied_level != Some(output.level) {
            self.heater.set_power(output.level);
            self.applied_level = Some(output.level);
        }
        if self.ready_line != output.ready {
            self.heater.set_ready(output.ready);
            self.ready_line = output.ready;
        }

        // Calculate next cycle deadline
        self.next_cycle += self.cycle_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_cycle.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_cycle.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        CycleResult {
            next_deadline: self.next_cycle,
            sleep_duration,
        }
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ToastSession<'a, B, SENSORS> {
        &self.session
    }

    /// Get a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut ToastSession<'a, B, SENSORS> {
        &mut self.session
    }
}
