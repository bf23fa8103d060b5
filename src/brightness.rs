//! LED brightness levels
//!
//! A tap on the device cycles through the levels in order.

const BRIGHTNESS_NAME_DIM: &str = "dim";
const BRIGHTNESS_NAME_BRIGHT: &str = "bright";
const BRIGHTNESS_NAME_OFF: &str = "off";

/// Brightness level of the whole strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LedBrightness {
    #[default]
    Dim,
    Bright,
    Off,
}

impl LedBrightness {
    /// Next level in the tap cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dim => Self::Bright,
            Self::Bright => Self::Off,
            Self::Off => Self::Dim,
        }
    }

    /// Brightness factor passed to the display driver (0.0-1.0)
    pub const fn value(self) -> f32 {
        match self {
            Self::Dim => 0.05,
            Self::Bright => 0.5,
            Self::Off => 0.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dim => BRIGHTNESS_NAME_DIM,
            Self::Bright => BRIGHTNESS_NAME_BRIGHT,
            Self::Off => BRIGHTNESS_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BRIGHTNESS_NAME_DIM => Some(Self::Dim),
            BRIGHTNESS_NAME_BRIGHT => Some(Self::Bright),
            BRIGHTNESS_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}
