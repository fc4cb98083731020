//! Display State
//!
//! The per-frame view state the widgets render from. The TUI is a thin
//! client: every frame it reads the driver's progress and re-derives which
//! take is visible through the core's step mapper, so this surface can
//! never disagree with any other consumer about "where" the presentation
//! is.

use yearbook_core::{
    month_index, month_labels, step_index, Card, ContentMap, DateMap, DriverConfig, TakeDate,
};

/// Everything the widgets need for one frame.
#[derive(Clone, Debug)]
pub struct DisplayState {
    /// Raw progress in `[0, 1)`.
    pub progress: f64,
    /// Current take index.
    pub take: u32,
    /// Current month group.
    pub month: u32,
    /// Resolved date for the take.
    pub date: TakeDate,
    /// Take title.
    pub title: String,
    /// Take caption.
    pub caption: String,
    /// Photo reference for the take.
    pub image: String,
    /// Cards attached to the take.
    pub cards: Vec<Card>,
    /// Number of stickers on the take.
    pub stickers: usize,
    /// Month labels for the progress gauge, built once.
    pub month_labels: Vec<String>,
}

impl DisplayState {
    /// Create the initial state for a sequence of `months` month groups.
    #[must_use]
    pub fn new(months: u32) -> Self {
        Self {
            progress: 0.0,
            take: 0,
            month: 0,
            date: TakeDate {
                day: 1,
                month: 11,
                year: 2024,
            },
            title: String::new(),
            caption: String::new(),
            image: String::new(),
            cards: Vec::new(),
            stickers: 0,
            month_labels: month_labels(months),
        }
    }

    /// Recompute the view for the current progress value.
    pub fn refresh(
        &mut self,
        progress: f64,
        config: &DriverConfig,
        content: &ContentMap,
        dates: &DateMap,
    ) {
        self.progress = progress;
        let take = step_index(progress, config.total_steps);
        let first_frame = self.title.is_empty() && self.caption.is_empty();
        let take_changed = take != self.take || first_frame;
        self.take = take;
        self.month = month_index(take, config.steps_per_month);
        self.date = dates.date_for(take);

        // Per-take content only changes on take boundaries.
        if take_changed {
            if let Some(item) = content.take(take) {
                self.title = item.title.clone();
                self.caption = item.caption.clone();
                self.image = item.image.clone();
                self.cards = item.cards.clone();
                self.stickers = item.stickers.len();
            } else {
                self.title = format!("Take {}", take + 1);
                self.caption.clear();
                self.image.clear();
                self.cards.clear();
                self.stickers = 0;
            }
        }
    }
}
