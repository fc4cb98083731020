//! Idle Snap
//!
//! A debounce deadline re-armed on every progress change. When input goes
//! silent for the full delay and progress sits between take boundaries, the
//! driver snaps it to the nearest one. This runs alongside the gesture
//! resolver's own end-of-drag snapping; both converge on the same
//! discretization but trigger on different conditions (input silence vs.
//! explicit release).

use std::time::{Duration, Instant};

use crate::progress::clamp_progress;
use crate::steps::nearest_step;

/// Debounced idle-snap timer. Only the most recent arming survives; this is
/// a debounce, not a queue.
#[derive(Debug)]
pub struct IdleSnap {
    delay: Duration,
    epsilon: f64,
    deadline: Option<Instant>,
}

impl IdleSnap {
    /// Create a disarmed timer.
    #[must_use]
    pub fn new(delay: Duration, epsilon: f64) -> Self {
        Self {
            delay,
            epsilon,
            deadline: None,
        }
    }

    /// Re-arm the deadline `delay` after `now`, replacing any pending one.
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Fires at most once per arming.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The progress value to snap to, or `None` when `progress` is already
    /// within epsilon of the nearest take boundary.
    #[must_use]
    pub fn snap_target(&self, progress: f64, total_steps: u32) -> Option<f64> {
        if total_steps == 0 {
            return None;
        }
        let nearest = f64::from(nearest_step(progress, total_steps)) / f64::from(total_steps);
        if (progress - nearest).abs() < self.epsilon {
            None
        } else {
            Some(clamp_progress(nearest))
        }
    }
}
