//! Card Stack
//!
//! The side panel listing the current take's auxiliary cards. Each card
//! type gets a small tag line and a body; embeds and links can't open in
//! a terminal, so they render as references.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use textwrap::wrap;

use yearbook_core::{Card, CardKind};

use crate::theme;

/// Stack of content cards for the current take.
pub struct CardStack<'a> {
    cards: &'a [Card],
}

impl<'a> CardStack<'a> {
    /// Stack over the given cards.
    #[must_use]
    pub fn new(cards: &'a [Card]) -> Self {
        Self { cards }
    }
}

impl Widget for CardStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height == 0 || self.cards.is_empty() {
            return;
        }
        let title_style = Style::default()
            .fg(theme::CARD_TITLE)
            .bg(theme::NIGHT_SKY)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(theme::CARD_BODY).bg(theme::NIGHT_SKY);
        let tag_style = Style::default().fg(theme::ACCENT_ROSE).bg(theme::NIGHT_SKY);

        let width = (area.width - 2) as usize;
        let mut y = area.y;
        for card in self.cards {
            if y >= area.bottom() {
                break;
            }
            let (tag, body) = describe(&card.kind);
            let tag_w = tag.chars().count();
            buf.set_stringn(area.x, y, tag, width, tag_style);
            if !card.title.is_empty() && (tag_w as u16) + 2 < area.width {
                buf.set_stringn(
                    area.x + tag_w as u16 + 1,
                    y,
                    &card.title,
                    width - tag_w - 1,
                    title_style,
                );
            }
            y += 1;
            for line in wrap(&body, width) {
                if y >= area.bottom() {
                    break;
                }
                buf.set_stringn(area.x + 2, y, &line, width, body_style);
                y += 1;
            }
            // Blank spacer row between cards.
            y += 1;
        }
    }
}

fn describe(kind: &CardKind) -> (&'static str, String) {
    match kind {
        CardKind::Location { city, country } => ("• local", format!("{city}, {country}")),
        CardKind::Text { text } => ("• nota", text.clone()),
        CardKind::Music { embed } => ("• música", embed.clone()),
        CardKind::Link { url, label } => (
            "• link",
            label.clone().unwrap_or_else(|| url.clone()),
        ),
        CardKind::Video { embed } => ("• clipe", embed.clone()),
    }
}
