//! Sensor read state carried between monitor cycles

use crate::sensor::Reading;

/// Consecutive sensor failures that stop the monitor
pub const ERROR_LIMIT: u8 = 3;

/// Phase of the sensor read state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorPhase {
    /// Last read succeeded, or nothing was read yet
    Reading,
    /// Last `errors` reads failed, below the limit
    Retrying { errors: u8 },
    /// Error limit reached, the monitor must stop
    Failed,
}

/// Result of recording a successful read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadingChange {
    /// Differs from the previous reading, or is the first one
    Changed(Reading),
    /// Equal to the previous reading
    Unchanged,
}

/// State owned by the monitor loop
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    previous_reading: Option<Reading>,
    consecutive_errors: u8,
}

impl MonitorState {
    pub const fn new() -> Self {
        Self {
            previous_reading: None,
            consecutive_errors: 0,
        }
    }

    pub const fn previous_reading(&self) -> Option<Reading> {
        self.previous_reading
    }

    pub const fn consecutive_errors(&self) -> u8 {
        self.consecutive_errors
    }

    pub const fn phase(&self) -> SensorPhase {
        match self.consecutive_errors {
            0 => SensorPhase::Reading,
            errors if errors >= ERROR_LIMIT => SensorPhase::Failed,
            errors => SensorPhase::Retrying { errors },
        }
    }

    /// Record a successful read
    ///
    /// Resets the error count. Returns whether the reading differs from
    /// the previous one.
    pub fn record_reading(&mut self, reading: Reading) -> ReadingChange {
        self.consecutive_errors = 0;
        if self.previous_reading == Some(reading) {
            return ReadingChange::Unchanged;
        }
        self.previous_reading = Some(reading);
        ReadingChange::Changed(reading)
    }

    /// Record a failed read and return the new phase
    pub fn record_error(&mut self) -> SensorPhase {
        self.consecutive_errors = self.consecutive_errors.saturating_add(1);
        self.phase()
    }
}
