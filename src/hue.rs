//! Angle to rainbow color mapping.
//!
//! The spectrum is split into six segments of 256 positions each. Within a
//! segment exactly one channel fades while the other two are pinned at 0 or 255:
//!
//! | segment | red      | green    | blue     |
//! |---------|----------|----------|----------|
//! | 0       | 255      | fade in  | 0        |
//! | 1       | fade out | 255      | 0        |
//! | 2       | 0        | 255      | fade in  |
//! | 3       | 0        | fade out | 255      |
//! | 4       | fade in  | 0        | 255      |
//! | 5       | 255      | 0        | fade out |

use core::f32::consts::PI;

use palette::Srgb;

use crate::types::RgbColor;

/// Number of positions in one segment.
pub const SEGMENT_WIDTH: u16 = 256;

/// Number of positions across the whole spectrum.
pub const COLOR_POSITIONS: u16 = SEGMENT_WIDTH * 6;

const MAX_POSITION: u16 = COLOR_POSITIONS - 1;

/// Converts a folded angle (`0..=π`) into a spectrum position (`0..=1535`).
///
/// The range is reversed so that an untilted sensor sits at the top of the
/// spectrum. Angles slightly outside `0..=π` clamp to the nearest end; NaN is
/// treated as zero.
pub fn color_position(angle: f32) -> u16 {
    let max = f32::from(MAX_POSITION);
    let scaled = libm::roundf(angle * max / PI);
    let position = if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, max) as u16
    };

    MAX_POSITION - position
}

/// Returns the rainbow color at a spectrum position.
///
/// Positions at or past [`COLOR_POSITIONS`] wrap onto pure red.
pub fn rainbow_color(position: u16) -> RgbColor {
    if position >= COLOR_POSITIONS {
        return Srgb::new(255, 0, 0);
    }

    let fade_in = (position % SEGMENT_WIDTH) as u8;
    let fade_out = 255 - fade_in;

    match position / SEGMENT_WIDTH {
        0 => Srgb::new(255, fade_in, 0),
        1 => Srgb::new(fade_out, 255, 0),
        2 => Srgb::new(0, 255, fade_in),
        3 => Srgb::new(0, fade_out, 255),
        4 => Srgb::new(fade_in, 0, 255),
        _ => Srgb::new(255, 0, fade_out),
    }
}

/// Maps a folded tilt angle straight to its rainbow color.
#[inline]
pub fn map_angle(angle: f32) -> RgbColor {
    rainbow_color(color_position(angle))
}
