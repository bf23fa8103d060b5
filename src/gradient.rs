//! Temperature gradient engine
//!
//! Maps a sensor value onto a strip of pixels using a table of colour
//! buckets. Each bucket anchors a colour at a threshold; a value between
//! two adjacent thresholds splits the strip into a run of the lower colour
//! followed by a run of the upper colour, proportional to where the value
//! sits between them.

use core::fmt;

use heapless::Vec;

use crate::color::Rgb;

/// Pixel colours produced by a lookup
pub type Pixels<const N: usize> = Vec<Rgb, N>;

/// Colour anchor at a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// Diagnostic name, not used in computation
    name: &'static str,
    /// Value at which the colour is pure
    threshold: f32,
    colour: Rgb,
}

impl Bucket {
    /// Create a new bucket
    pub const fn new(name: &'static str, threshold: f32, colour: Rgb) -> Self {
        Self {
            name,
            threshold,
            colour,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    pub const fn colour(&self) -> Rgb {
        self.colour
    }
}

/// Reasons a bucket table is rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The bucket table is empty
    NoBuckets,
    /// More buckets than the engine can hold
    TooManyBuckets { count: usize, capacity: usize },
    /// Pixel count is zero or exceeds the frame capacity
    InvalidPixelCount { count: usize, capacity: usize },
    /// A threshold is NaN or infinite
    NonFiniteThreshold,
}

/// Errors returned by the gradient engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientError {
    Configuration(ConfigurationError),
    /// No adjacent bucket pair matched an in-range value.
    ///
    /// Only reachable for a NaN lookup value.
    Invariant,
}

impl From<ConfigurationError> for GradientError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBuckets => f.write_str("at least one bucket is required"),
            Self::TooManyBuckets { count, capacity } => {
                write!(f, "{count} buckets exceed capacity of {capacity}")
            }
            Self::InvalidPixelCount { count, capacity } => {
                write!(f, "pixel count {count} is outside 1..={capacity}")
            }
            Self::NonFiniteThreshold => f.write_str("bucket threshold is not finite"),
        }
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(error) => write!(f, "invalid gradient configuration: {error}"),
            Self::Invariant => f.write_str("no bucket pair matched the value"),
        }
    }
}

/// Gradient engine over a sorted bucket table
///
/// * `MAX_BUCKETS` - capacity of the bucket table
/// * `MAX_PIXELS` - capacity of a produced frame
///
/// Immutable after construction, lookups are pure.
#[derive(Debug, Clone)]
pub struct GradientEngine<const MAX_BUCKETS: usize, const MAX_PIXELS: usize> {
    buckets: Vec<Bucket, MAX_BUCKETS>,
    pixel_count: usize,
}

impl<const MAX_BUCKETS: usize, const MAX_PIXELS: usize> GradientEngine<MAX_BUCKETS, MAX_PIXELS> {
    /// Create a new engine
    ///
    /// Buckets may be given in any order; they are stable-sorted by threshold,
    /// so buckets sharing a threshold keep their relative order.
    pub fn new(buckets: &[Bucket], pixel_count: usize) -> Result<Self, GradientError> {
        if buckets.is_empty() {
            return Err(ConfigurationError::NoBuckets.into());
        }
        if pixel_count == 0 || pixel_count > MAX_PIXELS {
            return Err(ConfigurationError::InvalidPixelCount {
                count: pixel_count,
                capacity: MAX_PIXELS,
            }
            .into());
        }
        if buckets.iter().any(|bucket| !bucket.threshold.is_finite()) {
            return Err(ConfigurationError::NonFiniteThreshold.into());
        }

        let mut sorted: Vec<Bucket, MAX_BUCKETS> =
            Vec::from_slice(buckets).map_err(|()| ConfigurationError::TooManyBuckets {
                count: buckets.len(),
                capacity: MAX_BUCKETS,
            })?;
        sort_by_threshold(&mut sorted);

        Ok(Self {
            buckets: sorted,
            pixel_count,
        })
    }

    /// Buckets in ascending threshold order
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Compute the pixel colours for a value
    ///
    /// Values at or beyond the outermost thresholds clamp to the outermost
    /// colours. A value on a shared interior threshold resolves against the
    /// lower adjacent pair, which yields the full upper colour.
    pub fn pixels_for(&self, value: f32) -> Result<Pixels<MAX_PIXELS>, GradientError> {
        let (Some(first), Some(last)) = (self.buckets.first(), self.buckets.last()) else {
            return Err(GradientError::Invariant);
        };
        if value <= first.threshold {
            return self.uniform(first.colour);
        }
        if value >= last.threshold {
            return self.uniform(last.colour);
        }

        for pair in self.buckets.windows(2) {
            let (bottom, top) = (&pair[0], &pair[1]);
            if bottom.threshold <= value && value <= top.threshold {
                let top_count = self.top_pixel_count(bottom, top, value);
                return self.split(bottom.colour, top.colour, top_count);
            }
        }

        Err(GradientError::Invariant)
    }

    /// Fill a frame with a single colour
    pub fn uniform(&self, colour: Rgb) -> Result<Pixels<MAX_PIXELS>, GradientError> {
        self.split(colour, colour, 0)
    }

    /// Number of pixels showing the upper colour, rounded half to even
    ///
    /// Computed in `f64` so spans between extreme `f32` thresholds stay finite.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn top_pixel_count(&self, bottom: &Bucket, top: &Bucket, value: f32) -> usize {
        let bottom = f64::from(bottom.threshold);
        let span = f64::from(top.threshold) - bottom;
        if span <= 0.0 {
            return self.pixel_count;
        }
        let scaled = self.pixel_count as f64 * (f64::from(value) - bottom) / span;
        (libm::rint(scaled) as usize).min(self.pixel_count)
    }

    fn split(
        &self,
        bottom: Rgb,
        top: Rgb,
        top_count: usize,
    ) -> Result<Pixels<MAX_PIXELS>, GradientError> {
        let mut pixels = Pixels::new();
        pixels
            .resize(self.pixel_count - top_count, bottom)
            .map_err(|()| GradientError::Invariant)?;
        pixels
            .resize(self.pixel_count, top)
            .map_err(|()| GradientError::Invariant)?;
        Ok(pixels)
    }
}

/// Stable insertion sort, `core` has no stable slice sort
fn sort_by_threshold(buckets: &mut [Bucket]) {
    for i in 1..buckets.len() {
        let mut j = i;
        while j > 0 && buckets[j - 1].threshold > buckets[j].threshold {
            buckets.swap(j - 1, j);
            j -= 1;
        }
    }
}
