//! Default temperature palette
//!
//! Thresholds are in degrees Celsius and tuned for an indoor room display.

use crate::color::Rgb;
use crate::gradient::Bucket;

/// Number of pixels on a Blinkt! strip
pub const DEFAULT_PIXEL_COUNT: usize = 8;

pub const COLOUR_BLUE: Rgb = Rgb { r: 10, g: 10, b: 226 };
pub const COLOUR_ORANGE: Rgb = Rgb { r: 120, g: 20, b: 0 };
pub const COLOUR_SALMON: Rgb = Rgb { r: 160, g: 10, b: 1 };
pub const COLOUR_CORAL: Rgb = Rgb { r: 255, g: 1, b: 1 };
pub const COLOUR_RED: Rgb = Rgb { r: 255, g: 0, b: 100 };

pub const DEFAULT_BUCKET_COUNT: usize = 5;

/// Default bucket table, cold to hot
pub const DEFAULT_BUCKETS: [Bucket; DEFAULT_BUCKET_COUNT] = [
    Bucket::new("blue", 14.0, COLOUR_BLUE),
    Bucket::new("orange", 18.0, COLOUR_ORANGE),
    Bucket::new("salmon", 22.0, COLOUR_SALMON),
    Bucket::new("coral", 26.0, COLOUR_CORAL),
    Bucket::new("red", 30.0, COLOUR_RED),
];

const _: () = assert!(DEFAULT_PIXEL_COUNT > 0);
