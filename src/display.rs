//! Display seam and strip drivers

use core::fmt;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::{BLACK, Rgb, dim};

/// Failure kinds of a display write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    WriteFailed,
}

impl DisplayError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WriteFailed => "write_failed",
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract LED strip driver
///
/// Pixels are staged with `set_pixel` and become visible on `flush`.
pub trait PixelDriver {
    /// Stage a pixel colour with a brightness factor (0.0-1.0)
    fn set_pixel(&mut self, index: usize, colour: Rgb, brightness: f32);

    /// Write staged pixels to the strip
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// In-memory strip
///
/// Keeps the dimmed colours of the last flush. Used by previews and tests.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    staged: [Rgb; N],
    frame: [Rgb; N],
    flushes: usize,
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            staged: [BLACK; N],
            frame: [BLACK; N],
            flushes: 0,
        }
    }

    /// Colours visible after the last flush
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    /// Number of flushes so far
    pub const fn flushes(&self) -> usize {
        self.flushes
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelDriver for FrameBuffer<N> {
    fn set_pixel(&mut self, index: usize, colour: Rgb, brightness: f32) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = dim(colour, brightness);
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.frame = self.staged;
        self.flushes += 1;
        Ok(())
    }
}

/// Adapter for any `smart-leds` strip writer (WS2812, APA102, ...)
pub struct SmartLedsDriver<W, const N: usize> {
    writer: W,
    staged: [RGB8; N],
}

impl<W, const N: usize> SmartLedsDriver<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            staged: [BLACK; N],
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> PixelDriver for SmartLedsDriver<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn set_pixel(&mut self, index: usize, colour: Rgb, brightness: f32) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = dim(colour, brightness);
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.writer
            .write(self.staged.iter().copied())
            .map_err(|_| DisplayError::WriteFailed)
    }
}
