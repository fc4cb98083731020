//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, mouse, resize)
//! - ScrollDriver for all progress decisions
//! - DisplayState for rendering
//!
//! Terminal events become driver input events: the mouse wheel maps to
//! wheel deltas, a left-button drag maps to the touch lifecycle (rows are
//! scaled to pixels), and navigation keys map to one-step moves. The app
//! never writes progress directly; everything goes through the driver.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use yearbook_core::{ContentMap, DateMap, InputEvent, NavKey, ScrollDriver, DEFAULT_DAY};

use crate::display::DisplayState;
use crate::widgets::{CardStack, PolaroidFrame, ProgressGauge, StarryNight};

/// Wheel notch in driver pixels. Terminals report notches, not pixels.
const MOUSE_WHEEL_PX: f64 = 60.0;

/// One terminal row in driver pixels, for drag gestures.
const ROW_PX: f64 = 16.0;

/// Card panel width when the current take has cards.
const CARD_PANEL_WIDTH: u16 = 34;

/// Progress gauge height (track row + month labels).
const GAUGE_HEIGHT: u16 = 2;

/// Main application state.
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The scroll driver, sole owner of progress.
    driver: ScrollDriver,
    /// Loaded takes and date overrides.
    content: ContentMap,
    /// Resolved per-take dates.
    dates: DateMap,
    /// Display state derived from the driver each frame.
    display: DisplayState,
    /// Left button held, touch gesture in flight.
    dragging: bool,
    /// Frame counter for twinkle animation.
    frame: u64,
}

impl App {
    /// Create a new App instance over the given content.
    #[must_use]
    pub fn new(driver: ScrollDriver, content: ContentMap) -> Self {
        let config = driver.config();
        let dates = DateMap::resolve(
            &content,
            config.total_steps,
            config.steps_per_month,
            DEFAULT_DAY,
        );
        let months = config.total_steps.div_ceil(config.steps_per_month);
        Self {
            running: true,
            driver,
            content,
            dates,
            display: DisplayState::new(months),
            dragging: false,
            frame: 0,
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~30 FPS keeps the snap animation smooth without burning CPU.
        let frame_duration = Duration::from_millis(33);
        let mut event_stream = EventStream::new();

        // Render the initial frame immediately so the user sees the UI.
        self.update(Instant::now());
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events have priority over the frame tick.
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            // Resizes are picked up by the next draw.
                            Event::Resize(..) => {}
                            _ => {}
                        }
                    }
                }

                () = tokio::time::sleep(frame_duration) => {}
            }

            self.update(Instant::now());
            self.render(terminal)?;

            // Frame rate limiting.
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: event::KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            KeyCode::Down | KeyCode::Char('j') => self.driver.press(NavKey::Down, now),
            KeyCode::Up | KeyCode::Char('k') => self.driver.press(NavKey::Up, now),
            KeyCode::PageDown => self.driver.press(NavKey::PageDown, now),
            KeyCode::PageUp => self.driver.press(NavKey::PageUp, now),
            KeyCode::Char(' ') => self.driver.press(NavKey::Space, now),
            KeyCode::Home => self.driver.press(NavKey::Home, now),
            KeyCode::End => self.driver.press(NavKey::End, now),

            _ => {}
        }
    }

    /// Handle mouse input. Scroll notches become wheel deltas; a held left
    /// button becomes a touch gesture with rows scaled to pixels.
    fn handle_mouse(&mut self, mouse: event::MouseEvent) {
        let now = Instant::now();
        let y = f64::from(mouse.row) * ROW_PX;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.driver.wheel_px(MOUSE_WHEEL_PX, now),
            MouseEventKind::ScrollUp => self.driver.wheel_px(-MOUSE_WHEEL_PX, now),

            MouseEventKind::Down(MouseButton::Left) => {
                self.dragging = true;
                self.driver.handle_event(InputEvent::TouchStart { y }, now);
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                self.driver.handle_event(InputEvent::TouchMove { y }, now);
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                self.dragging = false;
                self.driver.handle_event(InputEvent::TouchEnd, now);
            }
            _ => {}
        }
    }

    /// Advance the driver one frame and re-derive the view.
    fn update(&mut self, now: Instant) {
        self.driver.tick(now);
        self.frame = self.frame.wrapping_add(1);
        self.display.refresh(
            self.driver.progress(),
            self.driver.config(),
            &self.content,
            &self.dates,
        );
    }

    /// Render the UI.
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let display = &self.display;
        let frame_count = self.frame;
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            StarryNight::new(display.progress, frame_count).render(area, buf);

            let main = Rect::new(
                area.x,
                area.y,
                area.width,
                area.height.saturating_sub(GAUGE_HEIGHT),
            );

            // Card panel on the right when the take has cards and there is
            // room for it next to the polaroid.
            let has_panel = !display.cards.is_empty() && main.width > CARD_PANEL_WIDTH + 30;
            let stage = if has_panel {
                Rect::new(main.x, main.y, main.width - CARD_PANEL_WIDTH, main.height)
            } else {
                main
            };

            let polaroid = centered(stage, 48, 18);
            PolaroidFrame::new(
                &display.title,
                &display.caption,
                &display.image,
                display.date,
                display.stickers,
            )
            .render(polaroid, buf);

            if has_panel {
                let panel = Rect::new(
                    main.right() - CARD_PANEL_WIDTH + 2,
                    main.y + 2,
                    CARD_PANEL_WIDTH - 4,
                    main.height.saturating_sub(4),
                );
                CardStack::new(&display.cards).render(panel, buf);
            }

            let gauge = Rect::new(
                area.x,
                area.bottom().saturating_sub(GAUGE_HEIGHT),
                area.width,
                GAUGE_HEIGHT.min(area.height),
            );
            ProgressGauge::new(display.progress, &display.month_labels, display.month)
                .render(gauge, buf);
        })?;

        Ok(())
    }
}

/// A `w`-by-`h` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 48, 18);
        assert_eq!(rect.width, 48);
        assert_eq!(rect.height, 18);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_centered_shrinks_in_small_area() {
        let area = Rect::new(0, 0, 20, 8);
        let rect = centered(area, 48, 18);
        assert!(rect.width <= 18);
        assert!(rect.height <= 6);
    }
}
