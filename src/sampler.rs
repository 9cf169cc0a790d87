//! Windowed averaging of the tilt angle.
//!
//! Each raw sample is reduced to the rotation angle around the sensor's Z axis,
//! folded into `0..=π` so that both rotation directions sweep the same half-turn,
//! and accumulated until the window is full.

use crate::types::{AxisBias, AxisSample};

/// Rotation angle of a single sample in radians, folded into `0..=π`.
///
/// The four-quadrant arctangent of the bias-corrected Y and X axes covers
/// `-π..=π`; taking its absolute value drops the rotation direction.
pub fn instantaneous_angle(sample: AxisSample, bias: AxisBias) -> f32 {
    let (x, y, _) = bias.apply(sample);
    libm::fabsf(libm::atan2f(y as f32, x as f32))
}

/// Accumulates angle samples and emits their average once per window.
#[derive(Debug, Clone)]
pub struct AngleSampler {
    bias: AxisBias,
    window_size: u16,
    sum: f32,
    count: u16,
}

impl AngleSampler {
    /// Creates an empty sampler.
    ///
    /// A `window_size` of zero is treated as one.
    pub fn new(window_size: u16, bias: AxisBias) -> Self {
        Self {
            bias,
            window_size: window_size.max(1),
            sum: 0.0,
            count: 0,
        }
    }

    /// Adds one raw reading to the running sum.
    ///
    /// Returns `true` once the window is full. Readings offered to a full window
    /// are dropped until [`drain`](Self::drain) empties it.
    pub fn ingest(&mut self, sample: AxisSample) -> bool {
        if self.is_ready() {
            return true;
        }

        self.sum += instantaneous_angle(sample, self.bias);
        self.count += 1;
        self.is_ready()
    }

    /// Returns `sum / window_size` and resets the accumulator.
    ///
    /// Draining before the window is full yields an underweighted average.
    pub fn drain(&mut self) -> f32 {
        let average = self.sum / f32::from(self.window_size);
        self.sum = 0.0;
        self.count = 0;
        average
    }

    /// Returns true if a full window has been collected.
    pub fn is_ready(&self) -> bool {
        self.count >= self.window_size
    }

    /// Samples collected in the current window.
    pub fn sample_count(&self) -> u16 {
        self.count
    }

    /// Samples per window.
    pub fn window_size(&self) -> u16 {
        self.window_size
    }

    /// Calibration offset applied to every reading.
    pub fn bias(&self) -> AxisBias {
        self.bias
    }
}
