//! User-facing browning targets
//!
//! The UI collaborator delivers a bare shade index; each index maps to a
//! fixed target lightness threshold. The table runs from lightest to
//! darkest, so thresholds strictly decrease with the id.

const SHADE_NAME_VERY_LIGHT: &str = "very_light";
const SHADE_NAME_LIGHT: &str = "light";
const SHADE_NAME_GOLDEN: &str = "golden";
const SHADE_NAME_MEDIUM: &str = "medium";
const SHADE_NAME_DARK: &str = "dark";
const SHADE_NAME_VERY_DARK: &str = "very_dark";

const SHADE_ID_VERY_LIGHT: u8 = 0;
const SHADE_ID_LIGHT: u8 = 1;
const SHADE_ID_GOLDEN: u8 = 2;
const SHADE_ID_MEDIUM: u8 = 3;
const SHADE_ID_DARK: u8 = 4;
const SHADE_ID_VERY_DARK: u8 = 5;

/// Target browning shade selected at session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ShadeTarget {
    VeryLight = SHADE_ID_VERY_LIGHT,
    Light = SHADE_ID_LIGHT,
    Golden = SHADE_ID_GOLDEN,
    Medium = SHADE_ID_MEDIUM,
    Dark = SHADE_ID_DARK,
    VeryDark = SHADE_ID_VERY_DARK,
}

/// Number of selectable shades.
pub const SHADE_COUNT: u8 = 6;

impl ShadeTarget {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SHADE_ID_VERY_LIGHT => Self::VeryLight,
            SHADE_ID_LIGHT => Self::Light,
            SHADE_ID_GOLDEN => Self::Golden,
            SHADE_ID_MEDIUM => Self::Medium,
            SHADE_ID_DARK => Self::Dark,
            SHADE_ID_VERY_DARK => Self::VeryDark,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Toasting stops once the mean surface lightness falls to this value.
    pub const fn threshold_l(self) -> f32 {
        match self {
            Self::VeryLight => 72.0,
            Self::Light => 66.0,
            Self::Golden => 60.0,
            Self::Medium => 55.0,
            Self::Dark => 49.0,
            Self::VeryDark => 42.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryLight => SHADE_NAME_VERY_LIGHT,
            Self::Light => SHADE_NAME_LIGHT,
            Self::Golden => SHADE_NAME_GOLDEN,
            Self::Medium => SHADE_NAME_MEDIUM,
            Self::Dark => SHADE_NAME_DARK,
            Self::VeryDark => SHADE_NAME_VERY_DARK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SHADE_NAME_VERY_LIGHT => Some(Self::VeryLight),
            SHADE_NAME_LIGHT => Some(Self::Light),
            SHADE_NAME_GOLDEN => Some(Self::Golden),
            SHADE_NAME_MEDIUM => Some(Self::Medium),
            SHADE_NAME_DARK => Some(Self::Dark),
            SHADE_NAME_VERY_DARK => Some(Self::VeryDark),
            _ => None,
        }
    }
}
