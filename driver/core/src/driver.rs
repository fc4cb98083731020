//! Scroll Driver
//!
//! The facade that owns the progress store and all snapping logic. Surfaces
//! feed it raw [`InputEvent`]s and call [`ScrollDriver::tick`] once per
//! frame; consumers either subscribe for push notifications or poll
//! [`ScrollDriver::progress`] and re-derive their view through the step
//! mapper.
//!
//! Time is always passed in rather than sampled internally, so tests drive
//! the driver with synthetic instants and never sleep.

use std::time::Instant;

use crate::animation::{Ease, Tween};
use crate::config::DriverConfig;
use crate::events::{InputEvent, NavKey, WheelUnit};
use crate::gesture::GestureResolver;
use crate::input;
use crate::progress::{clamp_progress, ProgressStore, SubscriberId};
use crate::snap::IdleSnap;
use crate::steps::{month_index, progress_for_step, step_index};

/// The virtual scroll driver: one authoritative progress value, fanned out
/// to every consumer.
///
/// An explicit instance owned by whoever bootstraps the surface; create as
/// many as you like (tests routinely run several side by side).
pub struct ScrollDriver {
    config: DriverConfig,
    store: ProgressStore,
    gesture: GestureResolver,
    idle: IdleSnap,
    tween: Option<Tween>,
}

impl ScrollDriver {
    /// Create a driver at progress 0 with the given tuning.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        let idle = IdleSnap::new(config.idle_delay, config.snap_epsilon);
        Self {
            config,
            store: ProgressStore::new(),
            gesture: GestureResolver::new(),
            idle,
            tween: None,
        }
    }

    /// The driver's tuning constants.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Current progress in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.store.get()
    }

    /// Current take index derived from progress.
    #[must_use]
    pub fn step(&self) -> u32 {
        step_index(self.store.get(), self.config.total_steps)
    }

    /// Current month group derived from the take index.
    #[must_use]
    pub fn month(&self) -> u32 {
        month_index(self.step(), self.config.steps_per_month)
    }

    /// Whether a snap animation is currently running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Register a progress subscriber.
    pub fn on(&mut self, callback: impl FnMut(f64) + 'static) -> SubscriberId {
        self.store.on(callback)
    }

    /// Remove a progress subscriber. Unknown ids are a no-op.
    pub fn off(&mut self, id: SubscriberId) {
        self.store.off(id)
    }

    /// Set progress directly (clamped), cancelling any running animation.
    pub fn set_progress(&mut self, value: f64, now: Instant) {
        self.tween = None;
        self.apply(value, now);
    }

    /// Feed one raw input event. Wheel and key input apply immediately;
    /// touch input runs through the gesture lifecycle and kicks off a snap
    /// animation on release. Any new input cancels a running animation.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Wheel { delta_y, unit } => {
                self.tween = None;
                let delta = input::wheel_delta_progress(&self.config, delta_y, unit);
                self.apply(self.store.get() + delta, now);
            }
            InputEvent::Key(key) => {
                self.tween = None;
                let target = input::key_target(&self.config, self.store.get(), key);
                self.apply(target, now);
            }
            InputEvent::TouchStart { y } => {
                self.tween = None;
                // A held finger is not idle; the timer stays down until the
                // gesture produces movement or ends.
                self.idle.cancel();
                self.gesture.start(y, self.store.get());
            }
            InputEvent::TouchMove { y } => {
                if let Some(dy) = self.gesture.movement(y) {
                    let delta = input::touch_delta_progress(&self.config, dy);
                    self.apply(self.store.get() + delta, now);
                }
            }
            InputEvent::TouchEnd => {
                if let Some(target_step) = self.gesture.end(&self.config, self.store.get()) {
                    self.animate_to_step(target_step, now);
                }
            }
        }
    }

    /// Advance the driver by one frame: sample the snap animation if one is
    /// running, otherwise let the idle timer settle progress onto the
    /// nearest take boundary.
    pub fn tick(&mut self, now: Instant) {
        if let Some(tween) = self.tween {
            if tween.is_done(now) {
                // Land exactly on the endpoint; interpolation can stop an
                // ulp short of it.
                self.apply(tween.target(), now);
                self.tween = None;
            } else {
                self.apply(tween.sample(now), now);
            }
            // Tween frames keep re-arming the idle timer, so the two
            // snapping paths never fight over the value.
            return;
        }

        if self.idle.take_due(now) {
            if let Some(target) = self
                .idle
                .snap_target(self.store.get(), self.config.total_steps)
            {
                tracing::debug!(target, "idle snap to nearest take");
                self.apply(target, now);
            }
        }
    }

    /// Convenience for keyboard handling in surfaces that have already
    /// decoded the key.
    pub fn press(&mut self, key: NavKey, now: Instant) {
        self.handle_event(InputEvent::Key(key), now);
    }

    /// Convenience for wheel handling with pixel deltas.
    pub fn wheel_px(&mut self, delta_y: f64, now: Instant) {
        self.handle_event(
            InputEvent::Wheel {
                delta_y,
                unit: WheelUnit::Pixels,
            },
            now,
        );
    }

    fn animate_to_step(&mut self, step: u32, now: Instant) {
        let target = clamp_progress(progress_for_step(step, self.config.total_steps));
        tracing::debug!(step, target, "gesture settled, animating");
        self.tween = Some(Tween::new(
            self.store.get(),
            target,
            now,
            self.config.gesture_snap,
            Ease::OutCubic,
        ));
    }

    /// Write a value into the store and re-arm the idle timer. All mutation
    /// paths funnel through here.
    fn apply(&mut self, value: f64, now: Instant) {
        self.store.set(value);
        self.idle.rearm(now);
    }
}
