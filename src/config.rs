//! Tunable parameters for the tilt-to-color loop.

use crate::time::TimeDuration;
use crate::types::{AxisBias, ConfigError};

/// Default number of samples averaged into one angle estimate.
pub const DEFAULT_WINDOW_SIZE: u16 = 8;

/// Default duration of the fade toward each new target color.
pub const DEFAULT_TRANSITION_MS: u64 = 100;

/// Default sampling cadence.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 20;

/// Validated loop configuration.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig<D: TimeDuration> {
    window_size: u16,
    transition_duration: D,
    tick_interval: D,
    bias: AxisBias,
}

impl<D: TimeDuration> TiltConfig<D> {
    /// Creates a new config builder preloaded with the defaults.
    pub fn builder() -> TiltConfigBuilder<D> {
        TiltConfigBuilder::new()
    }

    /// Samples averaged per angle estimate.
    pub fn window_size(&self) -> u16 {
        self.window_size
    }

    /// Fade duration applied to every new target color.
    pub fn transition_duration(&self) -> D {
        self.transition_duration
    }

    /// Delay the firmware loop should sleep between ticks.
    pub fn tick_interval(&self) -> D {
        self.tick_interval
    }

    /// Calibration offset subtracted from raw axis readings.
    pub fn bias(&self) -> AxisBias {
        self.bias
    }
}

impl<D: TimeDuration> Default for TiltConfig<D> {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            transition_duration: D::from_millis(DEFAULT_TRANSITION_MS),
            tick_interval: D::from_millis(DEFAULT_TICK_INTERVAL_MS),
            bias: AxisBias::default(),
        }
    }
}

/// Builder for constructing validated configs.
#[derive(Debug)]
pub struct TiltConfigBuilder<D: TimeDuration> {
    config: TiltConfig<D>,
}

impl<D: TimeDuration> TiltConfigBuilder<D> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: TiltConfig::default(),
        }
    }

    /// Sets how many samples are averaged into one angle estimate.
    pub fn window_size(mut self, window_size: u16) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Sets the fade duration for each new target color.
    ///
    /// Zero is allowed and makes every new target appear instantly.
    pub fn transition_duration(mut self, duration: D) -> Self {
        self.config.transition_duration = duration;
        self
    }

    /// Sets the sampling cadence.
    pub fn tick_interval(mut self, interval: D) -> Self {
        self.config.tick_interval = interval;
        self
    }

    /// Sets the per-axis calibration offset.
    pub fn bias(mut self, bias: AxisBias) -> Self {
        self.config.bias = bias;
        self
    }

    /// Builds and validates the config.
    ///
    /// # Errors
    /// * `ZeroWindow` - The averaging window holds no samples
    /// * `ZeroTickInterval` - The tick interval is zero
    pub fn build(self) -> Result<TiltConfig<D>, ConfigError> {
        if self.config.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        if self.config.tick_interval.as_millis() == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(self.config)
    }
}

impl<D: TimeDuration> Default for TiltConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
