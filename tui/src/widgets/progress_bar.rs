//! Progress Gauge
//!
//! The bottom shell: a fine-grained fill reflecting raw progress across all
//! 52 takes, an indicator glyph riding the fill, and the 13 month labels
//! with the active month highlighted.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme;

/// Progress track plus month labels.
pub struct ProgressGauge<'a> {
    progress: f64,
    month_labels: &'a [String],
    active_month: u32,
}

impl<'a> ProgressGauge<'a> {
    /// Gauge for the current frame.
    #[must_use]
    pub fn new(progress: f64, month_labels: &'a [String], active_month: u32) -> Self {
        Self {
            progress,
            month_labels,
            active_month,
        }
    }
}

impl Widget for ProgressGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let progress = self.progress.clamp(0.0, 1.0);

        // Track row: filled portion in the accent color, indicator at the
        // boundary, remainder dimmed.
        let inner_w = area.width - 2;
        let filled = (f64::from(inner_w) * progress).floor() as u16;
        let track_y = area.y;
        for i in 0..inner_w {
            let (ch, color) = if i < filled {
                ('━', theme::ACCENT_ROSE)
            } else if i == filled {
                ('●', theme::ACCENT_ROSE)
            } else {
                ('─', theme::DIM_GRAY)
            };
            buf[(area.x + 1 + i, track_y)]
                .set_char(ch)
                .set_style(Style::default().fg(color).bg(theme::NIGHT_SKY));
        }

        // Month labels row: evenly spaced slots, active month highlighted.
        if area.height < 2 || self.month_labels.is_empty() {
            return;
        }
        let labels_y = area.y + 1;
        let slots = self.month_labels.len() as u16;
        let slot_w = area.width / slots;
        if slot_w == 0 {
            // Too narrow for all labels: show only the active one.
            if let Some(label) = self.month_labels.get(self.active_month as usize) {
                let style = Style::default()
                    .fg(theme::ACCENT_ROSE)
                    .bg(theme::NIGHT_SKY)
                    .add_modifier(Modifier::BOLD);
                buf.set_stringn(area.x + 1, labels_y, label, (area.width - 2) as usize, style);
            }
            return;
        }
        for (i, label) in self.month_labels.iter().enumerate() {
            let active = i as u32 == self.active_month;
            let style = if active {
                Style::default()
                    .fg(theme::ACCENT_ROSE)
                    .bg(theme::NIGHT_SKY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::MONTH_IDLE).bg(theme::NIGHT_SKY)
            };
            // Narrow slots fall back to the 3-letter month.
            let text = if (label.len() as u16) <= slot_w {
                label.clone()
            } else {
                label.chars().take(3).collect()
            };
            let x = area.x + i as u16 * slot_w;
            buf.set_stringn(x, labels_y, &text, slot_w as usize, style);
        }
    }
}
