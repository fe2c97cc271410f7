//! Quote layer
//!
//! The current quote, centred over its glow. The quote text reveals word
//! by word once its block has started fading in; the author follows later.
//! Presence opacity and scale from the keyed transition apply to everything.

use std::time::Duration;

use iced::widget::{Row, Space, column, container, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::quotes::Quote;
use crate::features::text_reveal::TextReveal;
use crate::ui::animation::Fade;
use crate::ui::components::glow;
use crate::ui::theme;

/// Word reveal length
pub const REVEAL_DURATION: Duration = Duration::from_secs(2);
/// Quote block fade-in, started shortly after the enter
pub const TEXT_FADE: Fade = Fade::new(Duration::from_millis(500), Duration::from_secs(1));
/// Author fade-in, after the reveal is well under way
pub const AUTHOR_FADE: Fade = Fade::new(Duration::from_millis(2500), Duration::from_secs(1));
/// Distance the text blocks rise while fading in
const RISE: f32 = 20.0;
/// Widest the quote block gets
const MAX_WIDTH: f32 = 768.0;
const WORD_SPACING: f32 = 12.0;

/// Everything the quote layer needs for one frame
pub struct QuoteFrame<'a> {
    pub quote: &'a Quote,
    pub reveal: &'a TextReveal,
    /// Time since this quote started entering
    pub since_enter: Duration,
    /// Time since mount, for the glow loop
    pub since_mount: Duration,
    /// Presence opacity of the keyed transition
    pub opacity: f32,
    /// Presence scale of the keyed transition
    pub scale: f32,
    /// Window width, for line breaking
    pub viewport_width: f32,
}

/// Reveal, fades and author all finished
pub fn is_settled(reveal: &TextReveal, since_enter: Duration) -> bool {
    let reveal_done = reveal.is_complete(since_enter.saturating_sub(TEXT_FADE.delay));
    reveal_done && TEXT_FADE.is_done(since_enter) && AUTHOR_FADE.is_done(since_enter)
}

/// Approximate characters per line for a given width and font size
fn chars_per_line(viewport_width: f32, size: f32) -> usize {
    let width = (viewport_width - 64.0).clamp(160.0, MAX_WIDTH);
    // Bold Latin glyphs average a bit over half the font size
    ((width / (size * 0.55)) as usize).max(8)
}

/// Build the quote layer
pub fn view<'a>(frame: QuoteFrame<'a>) -> Element<'a, Message> {
    let size = theme::QUOTE_SIZE * frame.scale;

    // Quote text, word by word
    let text_fade = TEXT_FADE.progress(frame.since_enter);
    let reveal_elapsed = frame.since_enter.saturating_sub(TEXT_FADE.delay);
    let lines = frame
        .reveal
        .lines(chars_per_line(frame.viewport_width, size));

    let quote_lines = column(lines.into_iter().map(|range| {
        Row::with_children(range.map(|i| {
            let word_opacity = frame.reveal.word_opacity(i, reveal_elapsed);
            let alpha = frame.opacity * text_fade * word_opacity;
            text(frame.reveal.words()[i].clone())
                .size(size)
                .font(theme::quote_font())
                .color(theme::faded(theme::TEXT_PRIMARY, alpha))
                .into()
        }))
        .spacing(WORD_SPACING * frame.scale)
        .into()
    }))
    .spacing(8)
    .align_x(Alignment::Center);

    let quote_block = container(quote_lines)
        .padding(Padding::new(0.0).top(TEXT_FADE.rise(frame.since_enter, RISE)))
        .height(size * 3.5 + RISE)
        .align_y(Alignment::End);

    // Author
    let author_fade = AUTHOR_FADE.progress(frame.since_enter);
    let author = container(
        text(frame.quote.attribution())
            .size(theme::AUTHOR_SIZE * frame.scale)
            .font(theme::author_font())
            .color(theme::faded(
                theme::TEXT_SECONDARY,
                frame.opacity * author_fade,
            )),
    )
    .padding(Padding::new(0.0).top(AUTHOR_FADE.rise(frame.since_enter, RISE)));

    let content = column![quote_block, Space::new().height(32), author]
        .align_x(Alignment::Center)
        .max_width(MAX_WIDTH)
        .padding(32);

    let glow_layer = container(glow::view(frame.since_mount, frame.opacity, frame.scale))
        .center(Fill);

    stack![glow_layer, container(content).center(Fill)]
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_get_short_lines() {
        let wide = chars_per_line(1920.0, theme::QUOTE_SIZE);
        let narrow = chars_per_line(480.0, theme::QUOTE_SIZE);
        assert!(narrow < wide);
        assert!(narrow >= 8);
    }

    #[test]
    fn settles_after_reveal_and_author() {
        let reveal = TextReveal::new(
            "\u{201C}Imagination is more important than knowledge.\u{201D}",
            REVEAL_DURATION,
        );
        assert!(!is_settled(&reveal, Duration::from_secs(2)));
        // Author ends at 3.5s; reveal ends at 0.5s + 5 * 0.2s + 2s
        assert!(!is_settled(&reveal, Duration::from_millis(3400)));
        assert!(is_settled(&reveal, Duration::from_millis(3500)));
    }
}
