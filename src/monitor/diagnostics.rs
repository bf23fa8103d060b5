//! Diagnostic events and their line format
//!
//! Lines are comma separated: `<timestamp>,<kind>[,<field>...]`.
//! The timestamp is supplied by the sink, the library has no wall clock.

use core::fmt::{self, Display, Write};

use heapless::String;

use crate::brightness::LedBrightness;
use crate::display::DisplayError;
use crate::sensor::{Reading, SensorError};

/// Capacity that fits every event line with an RFC 3339 timestamp
///
/// A `Data` line is the longest: `f32` values print without an exponent,
/// so an extreme value takes up to 48 bytes.
pub const LINE_CAPACITY: usize = 160;

/// Event reported by the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticEvent {
    /// Monitor started
    Start,
    /// New sensor reading
    Data(Reading),
    /// Tap changed the brightness
    Tap(LedBrightness),
    /// Monitor stopped
    End,
    /// Sensor read failed
    SensorError {
        error: SensorError,
        consecutive: u8,
    },
    /// Sensor error limit reached
    TooManyErrors,
    /// Strip write failed
    DisplayError(DisplayError),
}

impl DiagnosticEvent {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Data(_) => "data",
            Self::Tap(_) => "tap",
            Self::End => "end",
            Self::SensorError { .. } => "sensor_error",
            Self::TooManyErrors => "too_many_errors",
            Self::DisplayError(_) => "display_error",
        }
    }

    /// Whether the event belongs on the error stream
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::SensorError { .. } | Self::TooManyErrors | Self::DisplayError(_)
        )
    }

    /// Write `,<field>` for each field of the event
    pub fn write_fields<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Start | Self::End | Self::TooManyErrors => Ok(()),
            Self::Data(reading) => {
                write!(out, ",{},{}", reading.temperature, reading.humidity)
            }
            Self::Tap(brightness) => write!(out, ",{}", brightness.as_str()),
            Self::SensorError { error, consecutive } => {
                write!(out, ",{},{}", error.as_str(), consecutive)
            }
            Self::DisplayError(error) => write!(out, ",{}", error.as_str()),
        }
    }
}

/// Render a full diagnostic line
pub fn format_line<const N: usize>(
    stamp: impl Display,
    event: &DiagnosticEvent,
) -> Result<String<N>, fmt::Error> {
    let mut line = String::new();
    write!(line, "{},{}", stamp, event.kind())?;
    event.write_fields(&mut line)?;
    Ok(line)
}

/// Receiver of monitor events
///
/// Implementations stamp each event and route it by `is_error`.
pub trait DiagnosticsSink {
    fn record(&mut self, event: DiagnosticEvent);
}
