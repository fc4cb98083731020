//! Snap Animation
//!
//! A cancellable tween sampled once per frame by the driver's `tick`. The
//! tween is an owned token: dropping or replacing it cancels the animation,
//! so at most one driver-owned animation runs at a time and a new gesture
//! cleanly interrupts the previous one.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing curves for snap animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    /// No easing.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
}

impl Ease {
    /// Apply the curve to a normalized time `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A progress tween from one value to another over a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    ease: Ease,
}

impl Tween {
    /// Start a tween at `started`. Zero durations are bumped to 1ms so the
    /// animation always completes instead of dividing by zero.
    #[must_use]
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            started,
            duration: duration.max(Duration::from_millis(1)),
            ease,
        }
    }

    /// Value at time `now`. Clamped to the endpoint once the duration has
    /// elapsed; times before `started` sample the starting value.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.ease.apply(t);
        self.from + (self.to - self.from) * eased
    }

    /// Whether the tween has reached its endpoint at time `now`.
    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// The value the tween is heading toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }
}
