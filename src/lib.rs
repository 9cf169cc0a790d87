#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AngleSampler`**: Averages the folded tilt angle over a fixed window of raw samples
//! - **`map_angle`**: Maps an angle in `0..=π` onto a six-segment rainbow
//! - **`ColorTransition`**: Fades the visible color toward a target over a fixed duration
//! - **`TiltLight`**: Runs the sampling loop, one call to `tick` per sampling interval
//! - **`TiltConfig`**: Window size, fade duration, tick interval and calibration bias
//! - **`AxisSensor`**: Trait to implement for your accelerometer
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`DiagnosticSink`**: Optional consumer of raw readings and angle estimates
//!
//! Colors are `Srgb<u8>` (0-255 per channel). Interpolation is integer-only and
//! happens channel by channel in RGB space.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod config;
pub mod diagnostic;
pub mod hue;
pub mod sampler;
pub mod tilt;
pub mod time;
pub mod transition;
pub mod types;

pub use config::{TiltConfig, TiltConfigBuilder};
pub use diagnostic::{Diagnostic, DiagnosticSink, NoDiagnostics};
pub use hue::{color_position, map_angle, rainbow_color};
pub use sampler::{AngleSampler, instantaneous_angle};
pub use tilt::{AxisSensor, InvertedLed, RgbLed, TickReport, TiltLight};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use transition::{ColorTransition, TransitionError, TransitionState};
pub use types::{AxisBias, AxisSample, ConfigError, RgbColor};

/// All channels off.
pub const BLACK: RgbColor = Srgb::new(0, 0, 0);
/// Full red.
pub const RED: RgbColor = Srgb::new(255, 0, 0);
/// Full green.
pub const GREEN: RgbColor = Srgb::new(0, 255, 0);
/// Full blue.
pub const BLUE: RgbColor = Srgb::new(0, 0, 255);
