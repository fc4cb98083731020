//! Driver Configuration
//!
//! All tuning constants in one record: sensitivities per input modality,
//! gesture thresholds, animation duration, idle-snap delay and epsilon.
//! Defaults reproduce the reference feel; `from_env` allows overriding the
//! sensitivities without recompiling.

use std::time::Duration;

use crate::steps::{STEPS_PER_MONTH, TOTAL_STEPS};

/// Tuning constants for a [`crate::ScrollDriver`].
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Total discrete takes in the sequence.
    pub total_steps: u32,
    /// Takes per month group.
    pub steps_per_month: u32,
    /// Wheel pixels that amount to one full take.
    pub wheel_px_per_step: f64,
    /// Pixel height of one wheel "line" (for line-mode deltas).
    pub wheel_line_height_px: f64,
    /// Drag pixels that amount to one full take.
    pub touch_px_per_step: f64,
    /// Minimum accumulated drag distance for a gesture to count;
    /// anything smaller is a tap and returns to the origin take.
    pub gesture_min_px: f64,
    /// Duration of the end-of-drag snap animation.
    pub gesture_snap: Duration,
    /// Input silence required before the idle snap fires.
    pub idle_delay: Duration,
    /// Distance from a take boundary below which the idle snap does nothing.
    pub snap_epsilon: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            total_steps: TOTAL_STEPS,
            steps_per_month: STEPS_PER_MONTH,
            wheel_px_per_step: 180.0,
            wheel_line_height_px: 16.0,
            touch_px_per_step: 80.0,
            gesture_min_px: 16.0,
            gesture_snap: Duration::from_millis(260),
            idle_delay: Duration::from_millis(220),
            snap_epsilon: 0.0025,
        }
    }
}

impl DriverConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    ///
    /// Recognized variables: `YEARBOOK_WHEEL_PX_PER_STEP`,
    /// `YEARBOOK_TOUCH_PX_PER_STEP`, `YEARBOOK_GESTURE_SNAP_MS`,
    /// `YEARBOOK_IDLE_SNAP_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            wheel_px_per_step: env_f64("YEARBOOK_WHEEL_PX_PER_STEP")
                .unwrap_or(defaults.wheel_px_per_step),
            touch_px_per_step: env_f64("YEARBOOK_TOUCH_PX_PER_STEP")
                .unwrap_or(defaults.touch_px_per_step),
            gesture_snap: env_ms("YEARBOOK_GESTURE_SNAP_MS").unwrap_or(defaults.gesture_snap),
            idle_delay: env_ms("YEARBOOK_IDLE_SNAP_MS").unwrap_or(defaults.idle_delay),
            ..defaults
        }
    }

    /// Override the step counts (e.g. when the content map is shorter).
    #[must_use]
    pub fn with_steps(mut self, total_steps: u32, steps_per_month: u32) -> Self {
        self.total_steps = total_steps;
        self.steps_per_month = steps_per_month.max(1);
        self
    }

    /// Override the wheel sensitivity.
    #[must_use]
    pub fn with_wheel_px_per_step(mut self, px: f64) -> Self {
        self.wheel_px_per_step = px;
        self
    }

    /// Override the touch sensitivity.
    #[must_use]
    pub fn with_touch_px_per_step(mut self, px: f64) -> Self {
        self.touch_px_per_step = px;
        self
    }

    /// Override the idle-snap delay.
    #[must_use]
    pub fn with_idle_delay(mut self, delay: Duration) -> Self {
        self.idle_delay = delay;
        self
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn env_ms(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}
