//! Desktop preview for the glow gradient monitor
//!
//! Drives a `Monitor` with a simulated sensor and paints the strip in a
//! window. Diagnostic lines go to stdout, error lines to stderr.

use std::time::Instant as StdInstant;

use chrono::{SecondsFormat, Utc};
use eframe::egui::{self};
use glow_gradient::monitor::{LINE_CAPACITY, format_line};
use glow_gradient::{
    DEFAULT_BUCKET_COUNT, DEFAULT_BUCKETS, DEFAULT_PIXEL_COUNT, DefaultGradientEngine,
    DiagnosticEvent, DiagnosticsSink, Duration, EnvironmentSensor, FrameBuffer, Instant, Monitor,
    MonitorError, Reading, SensorError, StepOutcome, TapCounter,
};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 32.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Poll interval for the preview (faster than production for responsiveness)
const PREVIEW_POLL_INTERVAL_SECS: u64 = 2;

/// Taps shared between the UI and the monitor
static TAPS: TapCounter = TapCounter::new();

type PreviewMonitor = Monitor<
    'static,
    SimulatedSensor,
    FrameBuffer<DEFAULT_PIXEL_COUNT>,
    ConsoleSink,
    DEFAULT_BUCKET_COUNT,
    DEFAULT_PIXEL_COUNT,
>;

/// Sensor whose reading is set from the UI
struct SimulatedSensor {
    reading: Reading,
    faulty: bool,
}

impl EnvironmentSensor for SimulatedSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        if self.faulty {
            Err(SensorError::NotReady)
        } else {
            Ok(self.reading)
        }
    }
}

/// Prints stamped diagnostic lines to the console
struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn record(&mut self, event: DiagnosticEvent) {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        match format_line::<LINE_CAPACITY>(stamp, &event) {
            Ok(line) if event.is_error() => eprintln!("{line}"),
            Ok(line) => println!("{line}"),
            Err(_) => eprintln!("diagnostic line too long: {event:?}"),
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 320.0])
            .with_title("Glow Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "glow-preview",
        options,
        Box::new(|_cc| {
            let app = PreviewApp::new().map_err(|error| error.to_string())?;
            Ok(Box::new(app))
        }),
    )
}

fn build_monitor(
    reading: Reading,
    poll_interval: Duration,
) -> Result<PreviewMonitor, MonitorError> {
    let engine = DefaultGradientEngine::new(&DEFAULT_BUCKETS, DEFAULT_PIXEL_COUNT)?;
    let sensor = SimulatedSensor {
        reading,
        faulty: false,
    };
    let mut monitor = Monitor::new(engine, sensor, FrameBuffer::new(), ConsoleSink, &TAPS)?
        .with_poll_interval(poll_interval);
    monitor.start();
    Ok(monitor)
}

struct PreviewApp {
    monitor: PreviewMonitor,
    /// Wall-clock reference for the monitor clock
    started: StdInstant,
    /// Deadline of the next poll
    next_poll: Instant,
    /// Error that stopped the monitor
    failure: Option<MonitorError>,
    /// Outcome of the last poll
    last_outcome: Option<StepOutcome>,

    // UI state
    temperature: f32,
    humidity: f32,
    faulty: bool,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Result<Self, MonitorError> {
        let temperature = 16.0;
        let humidity = 45.0;
        let monitor = build_monitor(
            Reading::new(temperature, humidity),
            Duration::from_secs(PREVIEW_POLL_INTERVAL_SECS),
        )?;

        Ok(Self {
            monitor,
            started: StdInstant::now(),
            next_poll: Instant::from_millis(0),
            failure: None,
            last_outcome: None,
            temperature,
            humidity,
            faulty: false,
            led_size: LED_SIZE,
        })
    }

    /// Current monitor time
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Instant {
        Instant::from_millis(self.started.elapsed().as_millis() as u64)
    }

    /// Push UI inputs into the simulated sensor
    fn sync_sensor(&mut self) {
        let sensor = self.monitor.sensor_mut();
        sensor.reading = Reading::new(self.temperature, self.humidity);
        sensor.faulty = self.faulty;
    }

    /// Poll the monitor if its deadline passed
    fn poll(&mut self) {
        if self.failure.is_some() {
            return;
        }
        let now = self.now();
        if now < self.next_poll {
            return;
        }

        self.sync_sensor();
        match self.monitor.step(now) {
            Ok(result) => {
                self.last_outcome = Some(result.outcome);
                self.next_poll = result.next_deadline;
            }
            Err(error) => {
                self.monitor.finish();
                self.failure = Some(error);
            }
        }
    }

    /// Restart after a failure
    fn restart(&mut self) {
        let reading = Reading::new(self.temperature, self.humidity);
        match build_monitor(reading, Duration::from_secs(PREVIEW_POLL_INTERVAL_SECS)) {
            Ok(monitor) => {
                self.monitor = monitor;
                self.failure = None;
                self.last_outcome = None;
                self.faulty = false;
                self.next_poll = self.now();
            }
            Err(error) => self.failure = Some(error),
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        ctx.request_repaint_after(std::time::Duration::from_millis(100));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <SensorControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Temperature:");
                        ui.add(
                            egui::Slider::new(&mut self.temperature, 5.0..=40.0).suffix(" °C"),
                        );
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Humidity:");
                        ui.add(
                            egui::Slider::new(&mut self.humidity, 0.0..=100.0).suffix(" %"),
                        );
                    });

                    ui.add_space(4.0);

                    ui.checkbox(&mut self.faulty, "Sensor fault");
                });
                // </SensorControls>
                ui.add_space(16.0);
                // <StripControls>
                ui.vertical(|ui| {
                    if ui.button("👆 Tap").clicked() {
                        TAPS.record(self.now());
                    }

                    ui.add_space(4.0);

                    ui.label(format!("Brightness: {}", self.monitor.brightness().as_str()));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 8.0..=64.0));
                    });
                });
                // </StripControls>
            });

            ui.add_space(16.0);

            match (self.failure, self.last_outcome) {
                (Some(error), _) => {
                    ui.horizontal(|ui| {
                        ui.colored_label(egui::Color32::RED, format!("Stopped: {error}"));
                        if ui.button("Restart").clicked() {
                            self.restart();
                        }
                    });
                }
                (None, Some(StepOutcome::Rendered(reading))) => {
                    ui.label(format!(
                        "Showing {:.1} °C, {:.1} %",
                        reading.temperature, reading.humidity
                    ));
                }
                (None, Some(StepOutcome::Unchanged)) => {
                    ui.label("Reading unchanged");
                }
                (None, Some(StepOutcome::Retrying { errors })) => {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("Sensor error {errors}, retrying"),
                    );
                }
                (None, None) => {
                    ui.label("Waiting for first reading");
                }
            }

            ui.add_space(16.0);

            // === LED Display ===
            let frame = self.monitor.display().frame();
            let led_pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let width = frame.len() as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, led_pitch), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let x = origin.x + i as f32 * led_pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
