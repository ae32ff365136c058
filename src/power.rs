//! Discrete heater power control
//!
//! The heating elements only support fixed duty presets; a level is never
//! interpolated. Selection is phase-scoped: full power while the surface
//! dries and goldens, a middle level through active browning, the lowest
//! nonzero level when browning runs ahead of the predicted trajectory.

use crate::phase::BrowningPhase;

const POWER_NAME_OFF: &str = "off";
const POWER_NAME_LOW: &str = "low";
const POWER_NAME_MID: &str = "mid";
const POWER_NAME_FULL: &str = "full";

const POWER_ID_OFF: u8 = 0;
const POWER_ID_LOW: u8 = 1;
const POWER_ID_MID: u8 = 2;
const POWER_ID_FULL: u8 = 3;

/// One of the heater duty presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerLevel {
    Off = POWER_ID_OFF,
    Low = POWER_ID_LOW,
    Mid = POWER_ID_MID,
    Full = POWER_ID_FULL,
}

impl PowerLevel {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            POWER_ID_OFF => Self::Off,
            POWER_ID_LOW => Self::Low,
            POWER_ID_MID => Self::Mid,
            POWER_ID_FULL => Self::Full,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Duty preset the actuation hardware runs at this level.
    pub const fn duty_percent(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 60,
            Self::Mid => 80,
            Self::Full => 100,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => POWER_NAME_OFF,
            Self::Low => POWER_NAME_LOW,
            Self::Mid => POWER_NAME_MID,
            Self::Full => POWER_NAME_FULL,
        }
    }
}

/// Picks the duty preset from phase and prediction error.
#[derive(Clone, Copy, Debug)]
pub struct PowerController {
    /// Half-width of the on-model band, in L* units
    dead_band_l: f32,
}

impl PowerController {
    pub const fn new(dead_band_l: f32) -> Self {
        Self { dead_band_l }
    }

    /// Level to hold for the next actuation cycle.
    ///
    /// `error` is observed minus expected lightness: negative means the
    /// surface is darker than the model predicts, i.e. ahead of schedule.
    /// A reading exactly on the dead-band edge takes the lower level;
    /// burnt toast is the worse failure.
    pub fn next_level(&self, phase: BrowningPhase, error: f32) -> PowerLevel {
        match phase {
            BrowningPhase::Goldening => PowerLevel::Full,
            BrowningPhase::Browning => {
                if error <= -self.dead_band_l {
                    PowerLevel::Low
                } else {
                    PowerLevel::Mid
                }
            }
            BrowningPhase::Done => PowerLevel::Off,
        }
    }
}

impl Default for PowerController {
    fn default() -> Self {
        Self::new(2.0)
    }
}
