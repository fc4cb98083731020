//! Gesture Resolution
//!
//! Tracks a single drag gesture from touch-start to release and decides the
//! take it should settle on. During the drag the driver keeps emitting live
//! progress for visual feedback; this module only owns the bookkeeping
//! (start progress, accumulated delta) and the end-of-drag decision.
//!
//! Decision rules on release:
//! - accumulated distance below the threshold: a tap — return to the take
//!   nearest the start progress, cancelling the drag;
//! - otherwise round the current float position toward the drag direction
//!   (`ceil` advancing, `floor` retreating); if that lands back on the
//!   origin take, force one full take in the drag direction so the gesture
//!   always does something perceptible.
//!
//! Move or end events without a preceding start are no-ops.

use crate::config::DriverConfig;
use crate::steps::nearest_step;

/// Ephemeral per-drag state.
#[derive(Clone, Copy, Debug)]
struct GestureState {
    start_progress: f64,
    last_y: f64,
    dy_sum: f64,
}

/// Resolves drag gestures into settle targets.
#[derive(Debug, Default)]
pub struct GestureResolver {
    active: Option<GestureState>,
}

impl GestureResolver {
    /// Create a resolver with no gesture in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a gesture at pointer position `y`, recording the progress the
    /// drag started from. Restarting mid-gesture simply replaces the state.
    pub fn start(&mut self, y: f64, current_progress: f64) {
        if !y.is_finite() {
            return;
        }
        self.active = Some(GestureState {
            start_progress: current_progress,
            last_y: y,
            dy_sum: 0.0,
        });
    }

    /// Record a pointer move; returns the raw vertical delta in pixels
    /// (swipe-up positive) to feed the live sensitivity mapping, or `None`
    /// if no gesture is active or the move is degenerate.
    pub fn movement(&mut self, y: f64) -> Option<f64> {
        if !y.is_finite() {
            return None;
        }
        let state = self.active.as_mut()?;
        let dy = state.last_y - y;
        state.last_y = y;
        state.dy_sum += dy;
        Some(dy)
    }

    /// Finish the gesture, returning the take index to settle on, or `None`
    /// if no gesture was in flight.
    pub fn end(&mut self, config: &DriverConfig, current_progress: f64) -> Option<u32> {
        let state = self.active.take()?;
        if config.total_steps == 0 {
            return None;
        }
        let last = i64::from(config.total_steps) - 1;
        let origin = i64::from(nearest_step(state.start_progress, config.total_steps));

        let target = if state.dy_sum.abs() < config.gesture_min_px {
            // Tap or negligible drag: back to the origin take.
            origin
        } else {
            let float_steps = current_progress * f64::from(config.total_steps);
            let advancing = state.dy_sum > 0.0;
            let candidate = if advancing {
                float_steps.ceil() as i64
            } else {
                float_steps.floor() as i64
            };
            if candidate == origin {
                // The drag cleared the threshold but stayed inside the
                // origin bucket: force exactly one take in its direction.
                if advancing {
                    origin + 1
                } else {
                    origin - 1
                }
            } else {
                candidate
            }
        };

        Some(target.clamp(0, last) as u32)
    }
}
