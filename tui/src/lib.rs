//! Yearbook TUI - Terminal surface for the year-of-takes scrapbook
//!
//! A full-screen terminal presentation: a starry night background, a
//! polaroid frame with the current take's photo and caption, a date chip,
//! content cards, and a progress gauge with month labels.
//!
//! # Architecture
//!
//! The TUI is a thin client of `yearbook-core`:
//!
//! 1. Terminal events (keys, mouse wheel, drags) become `InputEvent`s
//! 2. The `ScrollDriver` turns them into one progress value
//! 3. `DisplayState` re-derives the visible take/month/date each frame
//! 4. Widgets render from `DisplayState` only
//!
//! No navigation logic lives here; the driver owns all of it.

pub mod app;
pub mod display;
pub mod theme;
pub mod widgets;

pub use app::App;
