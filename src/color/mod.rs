mod palette;

pub use palette::{
    COLOUR_BLUE, COLOUR_CORAL, COLOUR_ORANGE, COLOUR_RED, COLOUR_SALMON, DEFAULT_BUCKET_COUNT,
    DEFAULT_BUCKETS, DEFAULT_PIXEL_COUNT,
};
use smart_leds::RGB8;

use crate::math8::{scale8, unit_to_u8};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Dim a color by a brightness factor (0.0-1.0)
#[inline]
pub fn dim(color: Rgb, brightness: f32) -> Rgb {
    let scale = unit_to_u8(brightness);
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
