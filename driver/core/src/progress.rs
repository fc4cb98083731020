//! Progress Store
//!
//! The single authoritative holder of the progress scalar, plus subscriber
//! fan-out. Everything else in the system either writes to this store (the
//! driver's input paths) or derives its view from the value it holds.
//!
//! # Clamping contract
//!
//! The stored value is always in `[0, MAX_PROGRESS]`. The upper bound is
//! exclusive of 1.0 so that `floor(progress * total_steps)` never overflows
//! into a bucket past the last step. Non-finite input never reaches the
//! stored value: `NaN` and `-inf` clamp to `0.0`, `+inf` to [`MAX_PROGRESS`].
//!
//! # Subscriber isolation
//!
//! Subscribers are invoked synchronously, in registration order, all with
//! the same fully-updated value. Each callback runs under `catch_unwind` so
//! a panicking consumer cannot block the rest of the fan-out; the panic is
//! logged and swallowed. Callbacks receive only the new value, never a
//! handle back to the store, so re-entrant `set` from inside a notification
//! is not expressible.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Largest value the store will hold; just under 1 so the step mapping
/// never produces an out-of-range bucket.
pub const MAX_PROGRESS: f64 = 1.0 - 1e-6;

/// Clamp an arbitrary value to the valid progress range.
///
/// `NaN` maps to `0.0`; infinities clamp to the nearest boundary.
#[must_use]
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_PROGRESS)
}

/// Handle returned by [`ProgressStore::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut(f64)>;

/// Holds the progress scalar and the subscriber list.
///
/// One store exists per [`crate::ScrollDriver`] instance; there are no
/// process-wide singletons, so multiple drivers (e.g. in tests) never
/// interfere.
pub struct ProgressStore {
    value: f64,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Callback)>,
}

impl ProgressStore {
    /// Create a store at progress 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current progress, always in `[0, MAX_PROGRESS]`.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Clamp `value`, store it, and notify every subscriber with the new
    /// value in registration order.
    pub fn set(&mut self, value: f64) {
        self.value = clamp_progress(value);
        let current = self.value;
        for (id, callback) in &mut self.subscribers {
            let outcome = catch_unwind(AssertUnwindSafe(|| callback(current)));
            if outcome.is_err() {
                tracing::warn!(subscriber = id.0, "progress subscriber panicked; continuing");
            }
        }
    }

    /// Register a subscriber; returns the id to pass to [`off`](Self::off).
    pub fn on(&mut self, callback: impl FnMut(f64) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Unknown ids are a no-op.
    pub fn off(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
