//! Theme and Colors
//!
//! The scrapbook palette: a deep night sky behind a cream polaroid frame,
//! with a rose accent for everything interactive.

use ratatui::style::Color;

// ============================================================================
// Night Sky
// ============================================================================

/// Background - deep blue night
pub const NIGHT_SKY: Color = Color::Rgb(10, 12, 26);

/// Faint star
pub const STAR_DIM: Color = Color::Rgb(90, 96, 130);

/// Bright star at full twinkle
pub const STAR_BRIGHT: Color = Color::Rgb(230, 234, 255);

// ============================================================================
// Polaroid Frame
// ============================================================================

/// Frame border - aged cream
pub const POLAROID_CREAM: Color = Color::Rgb(245, 240, 225);

/// Photo area placeholder
pub const PHOTO_DARK: Color = Color::Rgb(28, 32, 43);

/// Photo area hint text
pub const PHOTO_HINT: Color = Color::Rgb(120, 128, 150);

/// Handwritten caption ink
pub const INK: Color = Color::Rgb(60, 54, 48);

// ============================================================================
// Accents
// ============================================================================

/// Signature rose accent (dates, active month, fill)
pub const ACCENT_ROSE: Color = Color::Rgb(255, 140, 160);

/// Inactive month label
pub const MONTH_IDLE: Color = Color::Rgb(110, 110, 125);

/// Card heading
pub const CARD_TITLE: Color = Color::Rgb(235, 225, 205);

/// Card body text
pub const CARD_BODY: Color = Color::Rgb(170, 175, 190);

/// General dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);
