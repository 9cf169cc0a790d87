//! Core value types shared by the sampler, hue mapper and driver.

use palette::Srgb;

/// An 8-bit RGB color, one brightness value (0-255) per channel.
pub type RgbColor = Srgb<u8>;

/// One raw reading from a 3-axis accelerometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    /// X axis magnitude.
    pub x: i16,

    /// Y axis magnitude.
    pub y: i16,

    /// Z axis magnitude.
    pub z: i16,
}

impl AxisSample {
    /// Creates a new sample.
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Per-axis offset subtracted from raw readings so that a resting axis reads zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisBias {
    /// Offset subtracted from the X axis.
    pub x: i16,

    /// Offset subtracted from the Y axis.
    pub y: i16,

    /// Offset subtracted from the Z axis.
    pub z: i16,
}

impl AxisBias {
    /// No offset; for sensors that already report signed, zero-centered values.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a bias with an individual offset per axis.
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Zero-g center of an analog sensor read through a `bits`-wide converter.
    ///
    /// A 10-bit converter reads 0..=1023, so its mid-scale is 512. Returns
    /// `None` for `bits` outside `1..=15`, whose center does not fit an `i16`.
    /// Signed 16-bit sensors are already zero-centered; use [`AxisBias::ZERO`].
    pub const fn mid_scale(bits: u8) -> Option<Self> {
        if bits == 0 || bits > 15 {
            return None;
        }

        let center = (1u16 << (bits - 1)) as i16;
        Some(Self::new(center, center, center))
    }

    /// Subtracts the bias from a raw sample, widening to avoid overflow.
    #[inline]
    pub fn apply(&self, sample: AxisSample) -> (i32, i32, i32) {
        (
            i32::from(sample.x) - i32::from(self.x),
            i32::from(sample.y) - i32::from(self.y),
            i32::from(sample.z) - i32::from(self.z),
        )
    }
}

impl Default for AxisBias {
    fn default() -> Self {
        Self::new(512, 512, 512)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Averaging window of zero samples.
    ZeroWindow,

    /// Zero-length sampling tick.
    ZeroTickInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroWindow => {
                write!(f, "averaging window must hold at least one sample")
            }
            ConfigError::ZeroTickInterval => {
                write!(f, "tick interval must be at least one millisecond")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
