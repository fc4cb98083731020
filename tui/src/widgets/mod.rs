//! Presentation Widgets
//!
//! Each widget renders one consumer of the progress signal: the starry
//! background, the polaroid frame, the date chip, the progress gauge with
//! month labels, and the card stack. All of them draw from [`crate::display::DisplayState`]
//! and never talk to the driver directly.

mod cards;
mod date_chip;
mod polaroid;
mod progress_bar;
mod starry;

pub use cards::CardStack;
pub use date_chip::DateChip;
pub use polaroid::PolaroidFrame;
pub use progress_bar::ProgressGauge;
pub use starry::StarryNight;
