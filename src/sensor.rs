//! Environment sensor seam

use core::fmt;

/// A single temperature and humidity sample
///
/// Compared structurally to detect unchanged samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity, percent
    pub humidity: f32,
}

impl Reading {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Whether both values are finite numbers
    pub const fn is_finite(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}

/// Failure kinds of a sensor read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Bus transfer failed
    Bus,
    /// Response failed its checksum
    Checksum,
    /// Sensor did not wake up in time
    NotReady,
    /// Sample contained a NaN or infinite value
    InvalidReading,
}

impl SensorError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Checksum => "checksum",
            Self::NotReady => "not_ready",
            Self::InvalidReading => "invalid_reading",
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature and humidity sensor
///
/// Implement this trait for the sensor driver of the target platform.
/// Reads are blocking.
pub trait EnvironmentSensor {
    /// Read one sample
    fn read(&mut self) -> Result<Reading, SensorError>;
}
