//! Starry Night Background
//!
//! A deterministic star field: positions come from a seeded RNG so the sky
//! doesn't reshuffle between frames, while brightness twinkles over time
//! and the overall density drifts upward as the year progresses (the
//! mood-driven background parameter).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::theme;

const STAR_GLYPHS: [char; 3] = ['·', '✦', '✧'];

/// Full-area night sky.
pub struct StarryNight {
    progress: f64,
    frame: u64,
}

impl StarryNight {
    /// Create the sky for the current progress and frame counter.
    #[must_use]
    pub fn new(progress: f64, frame: u64) -> Self {
        Self { progress, frame }
    }
}

impl Widget for StarryNight {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(theme::NIGHT_SKY);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_style(background);
            }
        }
        if area.width == 0 || area.height == 0 {
            return;
        }

        // One star per ~40 cells at the start of the year, densifying to
        // one per ~25 by the end.
        let cells = u32::from(area.width) * u32::from(area.height);
        let density = 40.0 - 15.0 * self.progress.clamp(0.0, 1.0);
        let count = (f64::from(cells) / density).ceil() as u32;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for star in 0..count {
            let x = area.left() + rng.gen_range(0..area.width);
            let y = area.top() + rng.gen_range(0..area.height);
            let glyph = STAR_GLYPHS[rng.gen_range(0..STAR_GLYPHS.len())];
            let phase = rng.gen_range(0..16u64);

            // Slow twinkle: each star brightens on its own phase.
            let bright = (self.frame / 4 + phase + u64::from(star)) % 16 < 3;
            let color = if bright {
                theme::STAR_BRIGHT
            } else {
                theme::STAR_DIM
            };
            buf[(x, y)]
                .set_char(glyph)
                .set_style(Style::default().fg(color).bg(theme::NIGHT_SKY));
        }
    }
}
