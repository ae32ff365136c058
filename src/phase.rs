//! Browning phase state machine
//!
//! The toasting run moves through three stages: the initial
//! moisture-driven color change (goldening), the Maillard browning region,
//! and done. Transitions are one-way within a run; only an explicit reset
//! between sessions returns to the start.

use embassy_time::Duration;

const PHASE_NAME_GOLDENING: &str = "goldening";
const PHASE_NAME_BROWNING: &str = "browning";
const PHASE_NAME_DONE: &str = "done";

/// Coarse stage of the toasting process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowningPhase {
    Goldening,
    Browning,
    Done,
}

impl BrowningPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goldening => PHASE_NAME_GOLDENING,
            Self::Browning => PHASE_NAME_BROWNING,
            Self::Done => PHASE_NAME_DONE,
        }
    }
}

/// Transition thresholds, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct PhaseTrackerConfig {
    /// Lightness below which the surface has left the goldening stage
    pub browning_entry_l: f32,
    /// Hard ceiling on goldening duration
    pub goldening_ceiling: Duration,
}

impl Default for PhaseTrackerConfig {
    fn default() -> Self {
        Self {
            browning_entry_l: 75.0,
            goldening_ceiling: Duration::from_secs(285),
        }
    }
}

/// Tracks the current phase from observed lightness.
#[derive(Debug)]
pub struct PhaseTracker {
    phase: BrowningPhase,
    config: PhaseTrackerConfig,
}

impl PhaseTracker {
    pub const fn new(config: PhaseTrackerConfig) -> Self {
        Self {
            phase: BrowningPhase::Goldening,
            config,
        }
    }

    pub const fn phase(&self) -> BrowningPhase {
        self.phase
    }

    /// Advance the state machine with one observed reading.
    ///
    /// Only the current state's exit condition is evaluated, so at most one
    /// transition happens per call. Returns the new phase when it changed.
    /// Done has no exit; callers must not feed readings from failed cycles
    /// here in the first place.
    pub fn update(
        &mut self,
        observed_l: f32,
        target_l: f32,
        elapsed: Duration,
    ) -> Option<BrowningPhase> {
        let next = match self.phase {
            BrowningPhase::Goldening
                if observed_l < self.config.browning_entry_l
                    || elapsed > self.config.goldening_ceiling =>
            {
                BrowningPhase::Browning
            }
            BrowningPhase::Browning if observed_l <= target_l => BrowningPhase::Done,
            _ => return None,
        };
        self.phase = next;
        Some(next)
    }

    /// Start a new session from the goldening stage.
    pub fn reset(&mut self) {
        self.phase = BrowningPhase::Goldening;
    }
}
