//! Poll loop driving the gradient engine
//!
//! One call to [`Monitor::step`] performs one cycle: drain taps, read the
//! sensor, recompute pixels on a new reading and push them to the strip.
//! The caller owns the clock and sleeps for the returned duration, so the
//! loop stays single-threaded and blocking.
//!
//! # Usage
//!
//! ```ignore
//! let mut monitor = Monitor::new(engine, sensor, driver, sink, &TAPS)?;
//! monitor.start();
//!
//! loop {
//!     match monitor.step(Instant::now()) {
//!         Ok(result) => sleep(result.sleep_duration),
//!         Err(_) => break,
//!     }
//! }
//! monitor.finish();
//! ```

mod diagnostics;
mod state;

use core::fmt;

pub use diagnostics::{DiagnosticEvent, DiagnosticsSink, LINE_CAPACITY, format_line};
pub use state::{ERROR_LIMIT, MonitorState, ReadingChange, SensorPhase};

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::LedBrightness;
use crate::color::{BLACK, Rgb};
use crate::display::{DisplayError, PixelDriver};
use crate::gradient::{GradientEngine, GradientError, Pixels};
use crate::sensor::{EnvironmentSensor, Reading, SensorError};
use crate::tap::TapCounter;

/// Default time between two sensor polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// What a monitor cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// New reading, pixels recomputed
    Rendered(Reading),
    /// Reading equal to the previous one
    Unchanged,
    /// Sensor read failed, below the error limit
    Retrying { errors: u8 },
}

/// Result of a monitor cycle
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    pub outcome: StepOutcome,
    /// The deadline for the next cycle
    pub next_deadline: Instant,
    /// How long to wait until the next cycle
    pub sleep_duration: Duration,
}

/// Errors that stop the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// The sensor failed `ERROR_LIMIT` times in a row
    TooManySensorErrors,
    Display(DisplayError),
    Gradient(GradientError),
}

impl From<DisplayError> for MonitorError {
    fn from(error: DisplayError) -> Self {
        Self::Display(error)
    }
}

impl From<GradientError> for MonitorError {
    fn from(error: GradientError) -> Self {
        Self::Gradient(error)
    }
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManySensorErrors => {
                write!(f, "sensor failed {ERROR_LIMIT} times in a row")
            }
            Self::Display(error) => write!(f, "failed to write LEDs: {error}"),
            Self::Gradient(error) => write!(f, "{error}"),
        }
    }
}

/// Sensor-to-strip monitor
///
/// * `MAX_BUCKETS` - capacity of the engine's bucket table
/// * `MAX_PIXELS` - capacity of a frame
pub struct Monitor<'a, S, D, L, const MAX_BUCKETS: usize, const MAX_PIXELS: usize>
where
    S: EnvironmentSensor,
    D: PixelDriver,
    L: DiagnosticsSink,
{
    // External dependencies and configuration
    sensor: S,
    display: D,
    diagnostics: L,
    taps: &'a TapCounter,
    engine: GradientEngine<MAX_BUCKETS, MAX_PIXELS>,
    interval: Duration,

    // Internal state
    state: MonitorState,
    brightness: LedBrightness,
    pixels: Pixels<MAX_PIXELS>,
}

impl<'a, S, D, L, const MAX_BUCKETS: usize, const MAX_PIXELS: usize>
    Monitor<'a, S, D, L, MAX_BUCKETS, MAX_PIXELS>
where
    S: EnvironmentSensor,
    D: PixelDriver,
    L: DiagnosticsSink,
{
    /// Create a new monitor
    ///
    /// Uses `DEFAULT_POLL_INTERVAL` between cycles. The strip starts black.
    pub fn new(
        engine: GradientEngine<MAX_BUCKETS, MAX_PIXELS>,
        sensor: S,
        display: D,
        diagnostics: L,
        taps: &'a TapCounter,
    ) -> Result<Self, MonitorError> {
        let pixels = engine.uniform(BLACK)?;
        Ok(Self {
            sensor,
            display,
            diagnostics,
            taps,
            engine,
            interval: DEFAULT_POLL_INTERVAL,
            state: MonitorState::new(),
            brightness: LedBrightness::default(),
            pixels,
        })
    }

    /// Set a custom poll interval
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Report the start of monitoring
    pub fn start(&mut self) {
        self.diagnostics.record(DiagnosticEvent::Start);
    }

    /// Report the end of monitoring
    pub fn finish(&mut self) {
        self.diagnostics.record(DiagnosticEvent::End);
    }

    /// Run one cycle at `now`
    ///
    /// Once the sensor error limit is reached every further call fails
    /// without touching the sensor.
    pub fn step(&mut self, now: Instant) -> Result<StepResult, MonitorError> {
        if self.state.phase() == SensorPhase::Failed {
            return Err(MonitorError::TooManySensorErrors);
        }

        let mut redraw = self.process_taps();

        let read = self.sensor.read().and_then(|reading| {
            if reading.is_finite() {
                Ok(reading)
            } else {
                Err(SensorError::InvalidReading)
            }
        });

        let outcome = match read {
            Ok(reading) => match self.state.record_reading(reading) {
                ReadingChange::Changed(reading) => {
                    self.diagnostics.record(DiagnosticEvent::Data(reading));
                    self.pixels = self.engine.pixels_for(reading.temperature)?;
                    redraw = true;
                    StepOutcome::Rendered(reading)
                }
                ReadingChange::Unchanged => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Monitor.step] skipping unchanged reading");
                    StepOutcome::Unchanged
                }
            },
            Err(error) => {
                let phase = self.state.record_error();
                let errors = self.state.consecutive_errors();
                self.diagnostics.record(DiagnosticEvent::SensorError {
                    error,
                    consecutive: errors,
                });
                if phase == SensorPhase::Failed {
                    self.diagnostics.record(DiagnosticEvent::TooManyErrors);
                    return Err(MonitorError::TooManySensorErrors);
                }
                StepOutcome::Retrying { errors }
            }
        };

        if redraw {
            self.show()?;
        }

        let next_deadline = now + self.interval;
        Ok(StepResult {
            outcome,
            next_deadline,
            sleep_duration: self.interval,
        })
    }

    /// Apply pending taps to the brightness
    ///
    /// Returns whether the brightness changed.
    fn process_taps(&mut self) -> bool {
        let taps = self.taps.take();
        if taps == 0 {
            return false;
        }
        for _ in 0..taps {
            self.brightness = self.brightness.next();
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[Monitor.process_taps] {} taps, brightness {}",
            taps,
            self.brightness.as_str()
        );
        self.diagnostics.record(DiagnosticEvent::Tap(self.brightness));
        true
    }

    /// Push the current pixels to the strip
    fn show(&mut self) -> Result<(), MonitorError> {
        let brightness = self.brightness.value();
        for (index, colour) in self.pixels.iter().enumerate() {
            self.display.set_pixel(index, *colour, brightness);
        }
        if let Err(error) = self.display.flush() {
            self.diagnostics.record(DiagnosticEvent::DisplayError(error));
            return Err(error.into());
        }
        Ok(())
    }

    pub const fn state(&self) -> &MonitorState {
        &self.state
    }

    pub const fn brightness(&self) -> LedBrightness {
        self.brightness
    }

    /// Pixels as last computed, before brightness
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub const fn engine(&self) -> &GradientEngine<MAX_BUCKETS, MAX_PIXELS> {
        &self.engine
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn diagnostics(&self) -> &L {
        &self.diagnostics
    }
}
