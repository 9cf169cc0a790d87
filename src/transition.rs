//! Time-based color transitions.
//!
//! Provides [`ColorTransition`], which fades the visible color from wherever it
//! currently is toward a target color over a fixed duration. The engine is
//! driven by explicit `now` instants, so it produces the same colors whether it
//! is ticked every millisecond or every 50.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::RgbColor;
use palette::Srgb;

/// The current state of a color transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionState {
    /// Current color equals the target color. Ready for a new goal.
    Settled,
    /// Fading between the start color and the target color.
    Transitioning,
}

/// Errors that can occur when changing the goal of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionError {
    /// A transition is still in flight; the request was ignored.
    Busy {
        /// Milliseconds left until the in-flight transition settles.
        remaining_ms: u64,
    },
}

impl core::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransitionError::Busy { remaining_ms } => {
                write!(
                    f,
                    "transition in progress, settles in {} ms",
                    remaining_ms
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransitionError {}

/// Animates an RGB color toward successive targets.
///
/// Goals are only accepted once the previous fade has reached its end time; a
/// goal offered mid-flight is rejected and leaves the running fade untouched.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct ColorTransition<I: TimeInstant> {
    state: TransitionState,
    start_color: RgbColor,
    target_color: RgbColor,
    current_color: RgbColor,
    start_time: I,
    duration: I::Duration,
}

impl<I: TimeInstant> ColorTransition<I> {
    /// Creates a settled transition resting on `initial`.
    pub fn new(initial: RgbColor, now: I) -> Self {
        Self {
            state: TransitionState::Settled,
            start_color: initial,
            target_color: initial,
            current_color: initial,
            start_time: now,
            duration: I::Duration::ZERO,
        }
    }

    /// Starts fading from the current color to `target` over `duration`.
    ///
    /// A zero `duration` jumps to `target` immediately.
    ///
    /// A fade whose end time has passed counts as settled even if it has not
    /// been ticked since; the new fade then starts from its target color.
    ///
    /// # Errors
    /// * `Busy` - `now` is still before the previous transition's end time
    pub fn set_goal(
        &mut self,
        target: RgbColor,
        duration: I::Duration,
        now: I,
    ) -> Result<(), TransitionError> {
        if self.state == TransitionState::Transitioning {
            let remaining_ms = self.remaining_millis(now);
            if remaining_ms > 0 {
                return Err(TransitionError::Busy { remaining_ms });
            }

            // End time has passed without a tick; settle before retargeting.
            self.current_color = self.target_color;
            self.state = TransitionState::Settled;
        }

        self.start_color = self.current_color;
        self.target_color = target;
        self.start_time = now;
        self.duration = duration;

        if duration.as_millis() == 0 {
            self.current_color = target;
        } else {
            self.state = TransitionState::Transitioning;
        }

        Ok(())
    }

    /// Advances the transition to `now` and returns the resulting color.
    pub fn tick(&mut self, now: I) -> RgbColor {
        if self.state == TransitionState::Settled {
            return self.current_color;
        }

        let elapsed = now.duration_since(self.start_time).as_millis();
        let total = self.duration.as_millis();

        if elapsed >= total {
            self.current_color = self.target_color;
            self.state = TransitionState::Settled;
        } else {
            self.current_color = Srgb::new(
                lerp_channel(self.start_color.red, self.target_color.red, elapsed, total),
                lerp_channel(self.start_color.green, self.target_color.green, elapsed, total),
                lerp_channel(self.start_color.blue, self.target_color.blue, elapsed, total),
            );
        }

        self.current_color
    }

    /// Returns true once the target color has been reached.
    pub fn is_settled(&self) -> bool {
        self.state == TransitionState::Settled
    }

    /// Returns the current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Returns the color computed by the latest [`tick`](Self::tick).
    pub fn current_color(&self) -> RgbColor {
        self.current_color
    }

    /// Returns the color being faded toward.
    pub fn target_color(&self) -> RgbColor {
        self.target_color
    }

    /// Returns the color the current fade started from.
    pub fn start_color(&self) -> RgbColor {
        self.start_color
    }

    /// Returns the instant the current fade started.
    pub fn start_time(&self) -> I {
        self.start_time
    }

    /// Returns the instant the current fade ends, or `None` if it overflows the clock.
    pub fn end_time(&self) -> Option<I> {
        self.start_time.checked_add(self.duration)
    }

    fn remaining_millis(&self, now: I) -> u64 {
        let elapsed = now.duration_since(self.start_time).as_millis();
        self.duration.as_millis().saturating_sub(elapsed)
    }
}

/// Integer linear interpolation between two channel values.
///
/// Exact at both ends and monotonic in `elapsed`; requires `elapsed < total`.
fn lerp_channel(from: u8, to: u8, elapsed: u64, total: u64) -> u8 {
    let delta = i64::from(to) - i64::from(from);
    let step = delta * elapsed as i64 / total as i64;
    (i64::from(from) + step).clamp(0, 255) as u8
}
