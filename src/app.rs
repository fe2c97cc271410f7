//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use std::time::Instant;

use iced::{Task, Theme};

use crate::features::{QuoteList, Settings};
pub use message::Message;
pub use state::App;
use state::{CoreState, UiState};

impl App {
    /// Mount the quote view with explicit settings and mount time
    pub fn with_settings(settings: Settings, now: Instant) -> (Self, Task<Message>) {
        let quotes = QuoteList::builtin();
        let star_count = settings.starfield.star_count();

        let core = CoreState::new(settings, quotes);
        let ui = UiState::new(&core.quotes, star_count, now);
        tracing::info!(
            "Mounted quote view: {} quotes, {} stars, cooldown {:?}",
            core.quotes.len(),
            ui.star_field.len(),
            core.settings.carousel.cooldown()
        );

        let mut app = Self { core, ui };

        // The cooldown timer is armed whenever the index is set, including at mount
        let ticket = app.ui.rotation.arm_cooldown();
        let init_task = app.arm_cooldown(ticket);

        (app, init_task)
    }

    /// Window settings derived from the loaded configuration
    pub fn window_settings(settings: &Settings) -> iced::window::Settings {
        iced::window::Settings {
            size: settings.window.size(),
            min_size: Some(iced::Size::new(320.0, 240.0)),
            fullscreen: settings.display.fullscreen,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "quote-universe".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        crate::ui::theme::app_theme()
    }

    /// Window title shows the author of the quote on screen
    pub fn title(&self) -> String {
        let quote = self.core.quotes.get(*self.ui.presence.key());
        format!("Quote Universe - {}", quote.author)
    }

    /// Subscriptions for animation frames, keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let now = Instant::now();

        // 1. One-shot animations (transitions, reveal, hint)
        let has_animations = self.ui.has_active_animations(now);

        // 2. Endless loops (star twinkle, glow turn)
        let loops_running = self.loops_running();

        // 3. Animation frames (vsync rate when needed)
        let animation_sub =
            if subscription_logic::needs_animation_subscription(has_animations, loops_running) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        // 4. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 5. Window resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, keyboard_sub, resize_sub])
    }

    /// The glow turns and stars twinkle forever unless power saving is on
    fn loops_running(&self) -> bool {
        !self.core.settings.display.power_saving_mode
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_animations: bool, loops_running: bool) -> bool {
        has_animations || loops_running
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::subscription_logic::*;
    use super::*;

    fn mount(settings: Settings) -> (App, Instant) {
        let now = Instant::now();
        (App::with_settings(settings, now).0, now)
    }

    #[test]
    fn frames_follow_animation_sources() {
        assert!(!needs_animation_subscription(false, false));
        assert!(needs_animation_subscription(true, false));
        assert!(needs_animation_subscription(false, true));
        assert!(needs_animation_subscription(true, true));
    }

    #[test]
    fn mounts_idle_on_first_quote_with_configured_stars() {
        let (app, _) = mount(Settings::default());
        assert_eq!(app.ui.rotation.active_index(), 0);
        assert!(!app.ui.rotation.is_transitioning());
        assert_eq!(app.ui.star_field.len(), 200);
        assert!(app.ui.cooldown.is_some(), "mount arms a cooldown");
        assert_eq!(app.title(), "Quote Universe - Steve Jobs");
    }

    #[test]
    fn star_count_comes_from_settings() {
        let mut settings = Settings::default();
        settings.starfield.count = 12;
        let (app, _) = mount(settings);
        assert_eq!(app.ui.star_field.len(), 12);
    }

    #[test]
    fn glow_keeps_frames_running_without_stars() {
        let mut settings = Settings::default();
        settings.starfield.count = 0;
        let (app, _) = mount(settings);
        assert_eq!(app.ui.star_field.len(), 0);
        assert!(app.loops_running());

        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        let (app, _) = mount(settings);
        assert!(!app.loops_running());
    }

    #[test]
    fn stars_survive_frames_and_renders() {
        let (mut app, _) = mount(Settings::default());
        let before = app.ui.star_field.stars().to_vec();

        for _ in 0..5 {
            let _ = app.update(Message::AnimationTick);
            let _ = app.view();
        }
        let _ = app.update(Message::WindowResized(iced::Size::new(640.0, 480.0)));
        let _ = app.view();

        assert_eq!(app.ui.star_field.stars(), before.as_slice());
    }

    #[test]
    fn mount_animations_finish() {
        let (app, now) = mount(Settings::default());
        assert!(app.ui.has_active_animations(now));
        // Presence enter still needs a tick to settle, so only the timed parts
        // are checked here
        let later = now + Duration::from_secs(10);
        assert!(crate::ui::components::hint::HINT_FADE.is_done(later - now));
        assert!(crate::ui::components::quote_display::is_settled(
            &app.ui.reveal,
            app.ui.presence.since_enter(later)
        ));
    }
}
