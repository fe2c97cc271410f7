// src/app/view.rs
//! Application view rendering

use iced::widget::{container, mouse_area, stack};
use iced::{Element, Fill, mouse};

use super::App;
use super::message::Message;
use crate::ui::components::{QuoteFrame, hint, quote_display, star_field};
use crate::ui::theme;

impl App {
    /// Build the quote view: stars, quote layer and hint over a dark sky
    pub fn view(&self) -> Element<'_, Message> {
        let ui = &self.ui;
        let since_mount = ui.since_mount();

        // Static stars when power saving
        let twinkle = if self.core.settings.display.power_saving_mode {
            None
        } else {
            Some(since_mount.as_secs_f32())
        };

        let index = *ui.presence.key();
        let quote_layer = quote_display::view(QuoteFrame {
            quote: self.core.quotes.get(index),
            reveal: &ui.reveal,
            since_enter: ui.presence.since_enter(ui.now),
            since_mount,
            opacity: ui.presence.opacity(),
            scale: ui.presence.scale(),
            viewport_width: self.core.viewport.width,
        });

        let content = stack![
            star_field::view(&ui.star_field, twinkle),
            quote_layer,
            hint::view(since_mount),
        ];

        // The whole window is the click target
        mouse_area(
            container(content)
                .width(Fill)
                .height(Fill)
                .style(theme::sky),
        )
        .on_press(Message::Advance)
        .interaction(mouse::Interaction::Pointer)
        .into()
    }
}
