//! Date Chip
//!
//! The `DD / MM / YYYY` block that travels with the polaroid frame.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use yearbook_core::TakeDate;

use crate::theme;

/// One-line date display for the current take.
pub struct DateChip {
    date: TakeDate,
}

impl DateChip {
    /// Chip for the given date.
    #[must_use]
    pub fn new(date: TakeDate) -> Self {
        Self { date }
    }

    /// Width the chip needs to render fully.
    #[must_use]
    pub fn width() -> u16 {
        "00 / 00 / 0000".len() as u16
    }
}

impl Widget for DateChip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let text = self.date.to_string();
        let style = Style::default()
            .fg(theme::ACCENT_ROSE)
            .add_modifier(Modifier::ITALIC);
        buf.set_stringn(area.x, area.y, &text, area.width as usize, style);
    }
}
