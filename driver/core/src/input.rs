//! Input Interpretation
//!
//! Converts raw event payloads into progress deltas or absolute targets,
//! with a distinct sensitivity per modality so one "take" feels equivalent
//! across devices. Wheel and touch produce proportional deltas; keys
//! produce absolute targets.

use crate::config::DriverConfig;
use crate::events::{NavAction, NavKey, WheelUnit};
use crate::progress::{clamp_progress, MAX_PROGRESS};
use crate::steps::progress_for_step;

/// Progress delta contributed by one wheel event.
///
/// Line-mode deltas are converted to pixels first. The caller adds the
/// result to current progress; the store's clamp handles trackpad momentum
/// overshoot.
#[must_use]
pub fn wheel_delta_progress(config: &DriverConfig, delta_y: f64, unit: WheelUnit) -> f64 {
    if !delta_y.is_finite() || config.total_steps == 0 {
        return 0.0;
    }
    let px = match unit {
        WheelUnit::Pixels => delta_y,
        WheelUnit::Lines => delta_y * config.wheel_line_height_px,
    };
    px / (config.wheel_px_per_step * f64::from(config.total_steps))
}

/// Progress delta contributed by a drag movement of `dy` pixels
/// (swipe-up positive).
#[must_use]
pub fn touch_delta_progress(config: &DriverConfig, dy: f64) -> f64 {
    if !dy.is_finite() || config.total_steps == 0 {
        return 0.0;
    }
    dy / (config.touch_px_per_step * f64::from(config.total_steps))
}

/// Absolute progress target for a navigation key pressed at `current`.
#[must_use]
pub fn key_target(config: &DriverConfig, current: f64, key: NavKey) -> f64 {
    if config.total_steps == 0 {
        return 0.0;
    }
    let one_step = progress_for_step(1, config.total_steps);
    match key.action() {
        NavAction::StepForward => clamp_progress(current + one_step),
        NavAction::StepBack => clamp_progress(current - one_step),
        NavAction::JumpStart => 0.0,
        NavAction::JumpEnd => MAX_PROGRESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> DriverConfig {
        DriverConfig::default()
    }

    #[test]
    fn test_wheel_pixels_map_proportionally() {
        // One full step worth of pixels moves exactly 1/52.
        let d = wheel_delta_progress(&cfg(), 180.0, WheelUnit::Pixels);
        assert!((d - 1.0 / 52.0).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_lines_convert_at_line_height() {
        let lines = wheel_delta_progress(&cfg(), 2.0, WheelUnit::Lines);
        let px = wheel_delta_progress(&cfg(), 32.0, WheelUnit::Pixels);
        assert!((lines - px).abs() < 1e-12);
    }

    #[test]
    fn test_touch_uses_its_own_sensitivity() {
        let d = touch_delta_progress(&cfg(), 80.0);
        assert!((d - 1.0 / 52.0).abs() < 1e-12);
        assert!(touch_delta_progress(&cfg(), -80.0) < 0.0);
    }

    #[test]
    fn test_non_finite_deltas_are_ignored() {
        assert!(wheel_delta_progress(&cfg(), f64::NAN, WheelUnit::Pixels) == 0.0);
        assert!(touch_delta_progress(&cfg(), f64::INFINITY) == 0.0);
    }

    #[test]
    fn test_key_steps_are_exact() {
        let from = 10.0 / 52.0;
        let forward = key_target(&cfg(), from, NavKey::Down);
        assert!((forward - 11.0 / 52.0).abs() < 1e-12);

        // Retreat from 0 clamps, never goes negative.
        assert!(key_target(&cfg(), 0.0, NavKey::Up) == 0.0);
    }

    #[test]
    fn test_home_and_end_jump() {
        assert!(key_target(&cfg(), 0.7, NavKey::Home) == 0.0);
        let end = key_target(&cfg(), 0.1, NavKey::End);
        assert!(end < 1.0 && end > 0.999);
    }
}
