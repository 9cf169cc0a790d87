//! Tilt-driven RGB light with periodic retargeting.
//!
//! Provides [`TiltLight`], which owns the angle sampler and the color transition
//! and runs one iteration of the sampling loop per [`tick`](TiltLight::tick).
//! Also defines the [`AxisSensor`] and [`RgbLed`] traits for hardware abstraction.

use crate::config::TiltConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, NoDiagnostics};
use crate::hue::map_angle;
use crate::sampler::AngleSampler;
use crate::time::{TimeInstant, TimeSource};
use crate::transition::ColorTransition;
use crate::types::{AxisSample, RgbColor};
use crate::BLACK;
use palette::Srgb;

/// Trait for abstracting the accelerometer.
///
/// Implement this for your sensor hardware (ADC channels, I2C/SPI device, ...).
/// Range checking of the readings is the implementation's responsibility.
pub trait AxisSensor {
    /// Reads one raw sample from all three axes.
    fn read(&mut self) -> AxisSample;
}

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow
/// the light to control it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Channels are 0-255 brightness values. Implementations should scale
    /// these to their hardware's native format (e.g., PWM duty cycles).
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: RgbColor);
}

/// Adapter for active-low output stages such as common-anode LEDs.
///
/// Writes `255 - value` on every channel of the wrapped LED.
#[derive(Debug)]
pub struct InvertedLed<L: RgbLed>(L);

impl<L: RgbLed> InvertedLed<L> {
    /// Wraps an active-low LED.
    pub fn new(led: L) -> Self {
        Self(led)
    }

    /// Returns the wrapped LED.
    pub fn inner(&self) -> &L {
        &self.0
    }

    /// Unwraps and returns the LED.
    pub fn into_inner(self) -> L {
        self.0
    }
}

impl<L: RgbLed> RgbLed for InvertedLed<L> {
    fn set_color(&mut self, color: RgbColor) {
        self.0
            .set_color(Srgb::new(255 - color.red, 255 - color.green, 255 - color.blue));
    }
}

/// Outcome of a single loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Color written to the LED this tick.
    pub color: RgbColor,
    /// Averaged angle, present on ticks that closed a sampling window.
    pub averaged_angle: Option<f32>,
    /// Target color handed to the transition this tick, if it was accepted.
    pub new_goal: Option<RgbColor>,
}

// `Srgb<u8>` has no `defmt::Format`, so colors are logged as channel tuples.
#[cfg(feature = "defmt")]
impl defmt::Format for TickReport {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "TickReport color=({=u8}, {=u8}, {=u8}) averaged_angle={} new_goal={}",
            self.color.red,
            self.color.green,
            self.color.blue,
            self.averaged_angle,
            self.new_goal.map(|c| (c.red, c.green, c.blue))
        );
    }
}

/// Drives an RGB LED from accelerometer tilt.
///
/// Each tick reads one sample; every `window_size` ticks the averaged angle is
/// mapped to a rainbow color and, if the previous fade has settled, becomes the
/// new fade target. The LED is updated on every tick.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Sensor implementation type
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
/// * `G` - Diagnostic sink type
pub struct TiltLight<'t, I, S, L, T, G = NoDiagnostics>
where
    I: TimeInstant,
    S: AxisSensor,
    L: RgbLed,
    T: TimeSource<I>,
    G: DiagnosticSink,
{
    sensor: S,
    led: L,
    diagnostics: G,
    time_source: &'t T,
    config: TiltConfig<I::Duration>,
    sampler: AngleSampler,
    transition: ColorTransition<I>,
    ticks: u32,
}

impl<'t, I, S, L, T> TiltLight<'t, I, S, L, T, NoDiagnostics>
where
    I: TimeInstant,
    S: AxisSensor,
    L: RgbLed,
    T: TimeSource<I>,
{
    /// Creates a light with the LED turned off and no diagnostic output.
    pub fn new(sensor: S, led: L, time_source: &'t T, config: TiltConfig<I::Duration>) -> Self {
        Self::with_diagnostics(sensor, led, NoDiagnostics, time_source, config)
    }
}

impl<'t, I, S, L, T, G> TiltLight<'t, I, S, L, T, G>
where
    I: TimeInstant,
    S: AxisSensor,
    L: RgbLed,
    T: TimeSource<I>,
    G: DiagnosticSink,
{
    /// Creates a light with the LED turned off, reporting each averaged angle to `diagnostics`.
    pub fn with_diagnostics(
        sensor: S,
        mut led: L,
        diagnostics: G,
        time_source: &'t T,
        config: TiltConfig<I::Duration>,
    ) -> Self {
        led.set_color(BLACK);

        Self {
            sensor,
            led,
            diagnostics,
            time_source,
            sampler: AngleSampler::new(config.window_size(), config.bias()),
            transition: ColorTransition::new(BLACK, time_source.now()),
            config,
            ticks: 0,
        }
    }

    /// Runs one iteration of the sampling loop.
    ///
    /// Call this every [`tick_interval`](Self::tick_interval).
    pub fn tick(&mut self) -> TickReport {
        let now = self.time_source.now();
        let sample = self.sensor.read();
        self.ticks = self.ticks.wrapping_add(1);

        self.transition.tick(now);

        let mut averaged_angle = None;
        let mut new_goal = None;

        if self.sampler.ingest(sample) {
            let angle = self.sampler.drain();
            self.diagnostics.emit(&Diagnostic::new(sample, angle));
            averaged_angle = Some(angle);

            let target = map_angle(angle);
            match self
                .transition
                .set_goal(target, self.config.transition_duration(), now)
            {
                Ok(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "angle {=f32} -> goal ({=u8}, {=u8}, {=u8})",
                        angle,
                        target.red,
                        target.green,
                        target.blue
                    );
                    new_goal = Some(target);
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("angle {=f32} dropped: {}", angle, _err);
                }
            }
        }

        let color = self.transition.tick(now);
        self.led.set_color(color);

        TickReport {
            color,
            averaged_angle,
            new_goal,
        }
    }

    /// Returns the color last written to the LED.
    pub fn current_color(&self) -> RgbColor {
        self.transition.current_color()
    }

    /// Returns true if the LED has reached the latest target color.
    pub fn is_settled(&self) -> bool {
        self.transition.is_settled()
    }

    /// Returns the number of ticks run so far (wraps on overflow).
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Returns the configured delay between ticks.
    pub fn tick_interval(&self) -> I::Duration {
        self.config.tick_interval()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TiltConfig<I::Duration> {
        &self.config
    }

    /// Returns the angle sampler.
    pub fn sampler(&self) -> &AngleSampler {
        &self.sampler
    }

    /// Returns the color transition.
    pub fn transition(&self) -> &ColorTransition<I> {
        &self.transition
    }

    /// Returns the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns the diagnostic sink.
    pub fn diagnostics(&self) -> &G {
        &self.diagnostics
    }

    /// Consumes the light and hands back the hardware.
    pub fn release(self) -> (S, L, G) {
        (self.sensor, self.led, self.diagnostics)
    }
}
