#![no_std]

pub mod brightness;
pub mod color;
pub mod display;
pub mod gradient;
pub mod math8;
pub mod monitor;
pub mod sensor;
pub mod tap;

pub use brightness::LedBrightness;
pub use color::{DEFAULT_BUCKET_COUNT, DEFAULT_BUCKETS, DEFAULT_PIXEL_COUNT, Rgb};
pub use display::{DisplayError, FrameBuffer, PixelDriver, SmartLedsDriver};
pub use gradient::{Bucket, ConfigurationError, GradientEngine, GradientError, Pixels};
pub use monitor::{
    DEFAULT_POLL_INTERVAL, DiagnosticEvent, DiagnosticsSink, Monitor, MonitorError,
    MonitorState, SensorPhase, StepOutcome, StepResult,
};
pub use sensor::{EnvironmentSensor, Reading, SensorError};
pub use tap::TapCounter;
pub use embassy_time::{Duration, Instant};

/// Engine sized for the default bucket table and a Blinkt! strip
pub type DefaultGradientEngine = GradientEngine<DEFAULT_BUCKET_COUNT, DEFAULT_PIXEL_COUNT>;
