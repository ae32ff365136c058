//! Expected browning trajectory
//!
//! Encodes the lightness curve a correctly heating toaster follows: a
//! saturating exponential drop while the surface dries and goldens, then a
//! slow linear decline through the browning region. The prediction is the
//! reference signal for phase tracking and power adjustment; instantaneous
//! readings alone cannot tell "browning slower than expected" from "ahead
//! of schedule".

use embassy_time::Duration;

use crate::phase::BrowningPhase;

/// Curve coefficients, calibrated per toaster.
///
/// These are tuning values measured on the bench, not physics constants;
/// recalibrate after any change to the heating elements or sensor geometry.
#[derive(Clone, Copy, Debug)]
pub struct BrowningModelConfig {
    /// Surface lightness of untoasted bread
    pub start_l: f32,
    /// Total lightness drop across the goldening stage
    pub goldening_drop: f32,
    /// Goldening rate constant, 1/s
    pub goldening_rate: f32,
    /// Lightness lost per second during browning
    pub browning_slope: f32,
    /// Nominal end of the goldening stage
    pub goldening_ceiling: Duration,
    /// Floor for remaining-time estimates
    pub min_remaining: Duration,
}

impl Default for BrowningModelConfig {
    fn default() -> Self {
        Self {
            start_l: 92.0,
            goldening_drop: 18.0,
            goldening_rate: 0.012,
            browning_slope: 0.055,
            goldening_ceiling: Duration::from_secs(285),
            min_remaining: Duration::from_secs(60),
        }
    }
}

impl BrowningModelConfig {
    /// Flat model that always predicts `level`.
    ///
    /// Reduces the controller to a bare threshold cutoff: no prediction
    /// error ever leaves the dead-band, so the heater runs full during
    /// goldening and at the middle level until the target is reached.
    pub const fn constant(level: f32) -> Self {
        Self {
            start_l: level,
            goldening_drop: 0.0,
            goldening_rate: 0.0,
            browning_slope: 0.0,
            goldening_ceiling: Duration::from_secs(0),
            min_remaining: Duration::from_secs(0),
        }
    }
}

/// Predicts the lightness trajectory of a correctly heating toaster.
#[derive(Clone, Copy, Debug)]
pub struct BrowningModel {
    config: BrowningModelConfig,
}

impl BrowningModel {
    pub const fn new(config: BrowningModelConfig) -> Self {
        Self { config }
    }

    /// Expected lightness after `elapsed` in the given phase.
    ///
    /// Pure function; continuous at the goldening ceiling where the
    /// exponential segment hands off to the linear one.
    pub fn predict(&self, elapsed: Duration, phase: BrowningPhase) -> f32 {
        let seconds = as_secs_f32(elapsed);
        let ceiling = as_secs_f32(self.config.goldening_ceiling);
        match phase {
            BrowningPhase::Goldening => self.goldening_l(seconds.min(ceiling)),
            BrowningPhase::Browning | BrowningPhase::Done => {
                let handoff = self.goldening_l(ceiling);
                handoff - self.config.browning_slope * (seconds - ceiling).max(0.0)
            }
        }
    }

    /// Estimated time until the browning segment reaches `target_l`,
    /// floored at the configured minimum as a safety against a noisy
    /// reading producing a near-zero estimate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn time_to_reach(&self, current_l: f32, target_l: f32) -> Duration {
        if self.config.browning_slope <= 0.0 {
            return self.config.min_remaining;
        }
        let seconds = ((current_l - target_l) / self.config.browning_slope).max(0.0);
        let estimate = Duration::from_millis((seconds * 1000.0) as u64);
        estimate.max(self.config.min_remaining)
    }

    fn goldening_l(&self, seconds: f32) -> f32 {
        self.config.start_l
            - self.config.goldening_drop * (1.0 - libm::expf(-self.config.goldening_rate * seconds))
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_secs_f32(duration: Duration) -> f32 {
    duration.as_millis() as f32 / 1000.0
}
