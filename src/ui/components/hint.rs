//! Instructional hint at the bottom of the window
//!
//! Fades and rises in once, a second after mount. It never changes with the
//! quote.

use std::time::Duration;

use iced::widget::{container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::animation::Fade;
use crate::ui::theme;

pub const HINT_TEXT: &str = "Click anywhere to explore the next quote";
pub const HINT_FADE: Fade = Fade::new(Duration::from_secs(1), Duration::from_millis(500));
const RISE: f32 = 20.0;
const BOTTOM_MARGIN: f32 = 24.0;

pub fn view<'a>(since_mount: Duration) -> Element<'a, Message> {
    let progress = HINT_FADE.progress(since_mount);
    let rise = HINT_FADE.rise(since_mount, RISE);

    container(
        text(HINT_TEXT)
            .size(theme::HINT_SIZE)
            .color(theme::faded(theme::TEXT_MUTED, progress)),
    )
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding(Padding::new(0.0).bottom(BOTTOM_MARGIN - rise))
    .into()
}
