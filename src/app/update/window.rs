// src/app/update/window.rs
//! Window message handlers

use iced::Task;
use iced::window;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.viewport = *size;
                Some(Task::none())
            }

            Message::ToggleFullscreen => Some(self.set_fullscreen(!self.core.is_fullscreen)),

            Message::ExitFullscreen => {
                if self.core.is_fullscreen {
                    Some(self.set_fullscreen(false))
                } else {
                    Some(Task::none())
                }
            }

            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }

    /// Switch window mode and remember the choice
    fn set_fullscreen(&mut self, fullscreen: bool) -> Task<Message> {
        self.core.is_fullscreen = fullscreen;
        self.core.settings.display.fullscreen = fullscreen;
        tracing::info!("Setting fullscreen: {}", fullscreen);

        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };

        Task::batch([
            window::latest().and_then(move |id| window::set_mode(id, mode)),
            Task::perform(
                helpers::save_settings(self.core.settings.clone()),
                |result| Message::SettingsSaved(result.map_err(|e| format!("{:#}", e))),
            ),
        ])
    }
}
