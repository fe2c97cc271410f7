// src/app/state.rs
//! Application state definitions

use std::time::{Duration, Instant};

use crate::features::{QuoteList, RotationState, Settings, StarField, TextReveal};
use crate::ui::animation::Presence;
use crate::ui::components::{hint, quote_display};

/// Main application state
pub struct App {
    /// Settings, quotes and window state
    pub core: CoreState,
    /// Rotation, animations and decorations
    pub ui: UiState,
}

/// Configuration and window state
pub struct CoreState {
    pub settings: Settings,
    pub quotes: QuoteList,
    pub is_fullscreen: bool,
    /// Last known window size
    pub viewport: iced::Size,
}

impl CoreState {
    pub fn new(settings: Settings, quotes: QuoteList) -> Self {
        let viewport = settings.window.size();
        let is_fullscreen = settings.display.fullscreen;
        Self {
            settings,
            quotes,
            is_fullscreen,
            viewport,
        }
    }
}

/// UI state for one mount of the quote view
pub struct UiState {
    /// Which quote is active and whether the transition lock is held
    pub rotation: RotationState,
    /// Keyed enter/exit of the quote layer
    pub presence: Presence<usize>,
    /// Word reveal of the quote currently on screen
    pub reveal: TextReveal,
    /// Generated once at mount, never regenerated
    pub star_field: StarField,
    /// Pending cooldown timer; replacing or dropping it aborts the timer
    pub cooldown: Option<iced::task::Handle>,
    /// When the view was mounted
    pub mounted_at: Instant,
    /// Time of the latest frame, used by `view`
    pub now: Instant,
}

impl UiState {
    pub fn new(quotes: &QuoteList, star_count: usize, now: Instant) -> Self {
        let rotation = RotationState::new();
        let first = rotation.active_index();
        Self {
            presence: Presence::new(first, now),
            reveal: reveal_for(quotes, first),
            rotation,
            star_field: StarField::new(star_count),
            cooldown: None,
            mounted_at: now,
            now,
        }
    }

    /// Advance animations to `now`, refreshing the reveal on a key swap
    pub fn tick(&mut self, quotes: &QuoteList, now: Instant) {
        let before = *self.presence.key();
        self.presence.tick(now);
        let shown = *self.presence.key();
        if shown != before {
            self.reveal = reveal_for(quotes, shown);
        }
        self.now = now;
    }

    pub fn since_mount(&self) -> Duration {
        self.now.saturating_duration_since(self.mounted_at)
    }

    /// Any one-shot animation still running at `now`
    pub fn has_active_animations(&self, now: Instant) -> bool {
        let since_mount = now.saturating_duration_since(self.mounted_at);
        let since_enter = self.presence.since_enter(now);
        self.presence.is_animating()
            || !quote_display::is_settled(&self.reveal, since_enter)
            || !hint::HINT_FADE.is_done(since_mount)
    }
}

/// Word reveal for the quote at `index`
pub fn reveal_for(quotes: &QuoteList, index: usize) -> TextReveal {
    TextReveal::new(
        &quotes.get(index).quoted_text(),
        quote_display::REVEAL_DURATION,
    )
}
