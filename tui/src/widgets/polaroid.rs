//! Polaroid Frame
//!
//! The centerpiece: a cream-bordered frame with a photo area, the take's
//! handwritten caption underneath, and the date chip tucked into the
//! bottom border. Terminals can't show the actual photo, so the photo area
//! renders a dark pane with the image reference and title as a hint.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use textwrap::wrap;

use yearbook_core::TakeDate;

use crate::theme;
use crate::widgets::DateChip;

/// The polaroid card for the current take.
pub struct PolaroidFrame<'a> {
    title: &'a str,
    caption: &'a str,
    image: &'a str,
    date: TakeDate,
    stickers: usize,
}

impl<'a> PolaroidFrame<'a> {
    /// Frame for one take.
    #[must_use]
    pub fn new(
        title: &'a str,
        caption: &'a str,
        image: &'a str,
        date: TakeDate,
        stickers: usize,
    ) -> Self {
        Self {
            title,
            caption,
            image,
            date,
            stickers,
        }
    }
}

impl Widget for PolaroidFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 6 {
            return;
        }
        let frame_style = Style::default().fg(theme::INK).bg(theme::POLAROID_CREAM);

        // Cream card.
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_style(frame_style);
            }
        }

        // Photo pane: inset 2 columns / 1 row, leaving a wide bottom
        // border like a real polaroid.
        let photo = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width - 4,
            area.height.saturating_sub(5),
        );
        let photo_style = Style::default().fg(theme::PHOTO_HINT).bg(theme::PHOTO_DARK);
        for y in photo.top()..photo.bottom() {
            for x in photo.left()..photo.right() {
                buf[(x, y)].set_char(' ').set_style(photo_style);
            }
        }

        // Image hint centered in the pane.
        if photo.height > 0 {
            let hint = if self.image.is_empty() {
                "( sem foto )".to_string()
            } else {
                photo_hint(self.image)
            };
            let y = photo.y + photo.height / 2;
            let x = photo.x + photo.width.saturating_sub(hint.len() as u16) / 2;
            buf.set_stringn(x, y, &hint, photo.width as usize, photo_style);

            if !self.title.is_empty() && photo.height > 2 {
                let x = photo.x + photo.width.saturating_sub(self.title.len() as u16) / 2;
                buf.set_stringn(
                    x,
                    photo.y + photo.height / 2 - 1,
                    self.title,
                    photo.width as usize,
                    photo_style.add_modifier(Modifier::BOLD),
                );
            }
        }

        // Caption on the bottom border, wrapped and centered.
        let caption_area = Rect::new(
            area.x + 2,
            photo.bottom() + 1,
            area.width - 4,
            area.bottom().saturating_sub(photo.bottom() + 1),
        );
        let caption_style = frame_style.add_modifier(Modifier::ITALIC);
        if !self.caption.is_empty() && caption_area.height > 1 {
            for (i, line) in wrap(self.caption, caption_area.width as usize)
                .iter()
                .take(caption_area.height.saturating_sub(1) as usize)
                .enumerate()
            {
                let x = caption_area.x
                    + caption_area.width.saturating_sub(line.len() as u16) / 2;
                buf.set_stringn(
                    x,
                    caption_area.y + i as u16,
                    line,
                    caption_area.width as usize,
                    caption_style,
                );
            }
        }

        // Date chip bottom-right, stickers hinted bottom-left.
        let chip_w = DateChip::width();
        if area.width > chip_w + 2 {
            let chip_area = Rect::new(
                area.right() - chip_w - 2,
                area.bottom() - 1,
                chip_w,
                1,
            );
            DateChip::new(self.date).render(chip_area, buf);
        }
        if self.stickers > 0 {
            let hint = "♥".repeat(self.stickers.min(3));
            buf.set_stringn(
                area.x + 2,
                area.bottom() - 1,
                &hint,
                (area.width - 4) as usize,
                Style::default().fg(theme::ACCENT_ROSE).bg(theme::POLAROID_CREAM),
            );
        }
    }
}

fn photo_hint(image: &str) -> String {
    // Show just the file name, not the whole path.
    let name = image.rsplit('/').next().unwrap_or(image);
    format!("[ {name} ]")
}
