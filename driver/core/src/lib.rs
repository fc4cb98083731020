//! Yearbook Core - Headless Virtual Scroll Driver
//!
//! This crate provides the navigation core for yearbook, completely
//! independent of any UI framework. It converts raw input (wheel, drag,
//! keyboard) into a single normalized progress value in `[0, 1)` and fans
//! that value out to every visual consumer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       UI Surfaces                            │
//! │  ┌─────────┐  ┌─────────┐  ┌───────────────────────────────┐ │
//! │  │   TUI   │  │  WebUI  │  │        Headless / tests       │ │
//! │  │(ratatui)│  │         │  │                               │ │
//! │  └────┬────┘  └────┬────┘  └──────────────┬────────────────┘ │
//! │       │            │                      │                  │
//! │       └────────────┴──────────────────────┘                  │
//! │                    InputEvent (up)                           │
//! │                    progress (down)                           │
//! └────────────────────────┼─────────────────────────────────────┘
//!                          │
//! ┌────────────────────────┼─────────────────────────────────────┐
//! │                  SCROLL DRIVER CORE                          │
//! │  ┌─────────────────────┴───────────────────────────────────┐ │
//! │  │                    ScrollDriver                          │ │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐ │ │
//! │  │  │ Progress │  │ Gesture  │  │   Idle   │  │  Snap    │ │ │
//! │  │  │  Store   │  │ Resolver │  │   Snap   │  │  Tween   │ │ │
//! │  │  └──────────┘  └──────────┘  └──────────┘  └──────────┘ │ │
//! │  └──────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every consumer derives its discrete position through the same pure
//! mapping ([`step_index`] / [`month_index`]), which is what keeps all
//! visual subsystems agreeing on "which take" is current.
//!
//! # Key Types
//!
//! - [`ScrollDriver`]: owns the progress scalar and all snapping logic
//! - [`InputEvent`]: raw input reported by a surface
//! - [`DriverConfig`]: tuning constants (sensitivities, delays, epsilon)
//! - [`ContentMap`]: the 52-take content model consumers index into
//! - [`DateMap`]: per-take dates resolved from the content map
//!
//! # Quick Start
//!
//! ```
//! use std::time::Instant;
//! use yearbook_core::{DriverConfig, InputEvent, ScrollDriver, WheelUnit};
//!
//! let mut driver = ScrollDriver::new(DriverConfig::default());
//! let now = Instant::now();
//!
//! // A wheel notch nudges progress forward.
//! driver.handle_event(
//!     InputEvent::Wheel { delta_y: 180.0, unit: WheelUnit::Pixels },
//!     now,
//! );
//! assert_eq!(driver.step(), 1);
//!
//! // Surfaces tick the driver once per frame to advance animations
//! // and the idle-snap timer.
//! driver.tick(now);
//! ```
//!
//! # Module Overview
//!
//! - [`animation`]: cancellable ease-out tweens sampled per frame
//! - [`config`]: driver tuning constants
//! - [`content`]: content map model (takes, cards, stickers)
//! - [`dates`]: per-take date resolution and month labels
//! - [`driver`]: the [`ScrollDriver`] facade
//! - [`events`]: raw input events from surfaces
//! - [`gesture`]: drag lifecycle and end-of-drag step resolution
//! - [`input`]: per-modality sensitivity mapping
//! - [`progress`]: the progress scalar and subscriber fan-out
//! - [`snap`]: idle-snap debounce timer
//! - [`steps`]: pure progress -> step -> month mapping
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It is pure navigation logic that can drive any surface.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod config;
pub mod content;
pub mod dates;
pub mod driver;
pub mod events;
pub mod gesture;
pub mod input;
pub mod progress;
pub mod snap;
pub mod steps;

// Re-exports for convenience
pub use animation::{Ease, Tween};
pub use config::DriverConfig;
pub use content::{Card, CardKind, ContentError, ContentMap, DateSpec, Sticker, Take};
pub use dates::{month_label, month_labels, DateMap, TakeDate, DEFAULT_DAY};
pub use driver::ScrollDriver;
pub use events::{InputEvent, NavAction, NavKey, WheelUnit};
pub use gesture::GestureResolver;
pub use progress::{clamp_progress, ProgressStore, SubscriberId, MAX_PROGRESS};
pub use steps::{
    month_index, nearest_step, progress_for_step, step_index, MONTHS, STEPS_PER_MONTH, TOTAL_STEPS,
};
