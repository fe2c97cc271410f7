// src/app/update/keyboard.rs
//! Keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => match key {
                Key::Named(Named::F11) => Some(self.update(Message::ToggleFullscreen)),
                Key::Named(Named::Escape) => Some(self.update(Message::ExitFullscreen)),
                _ => Some(Task::none()),
            },
            _ => None,
        }
    }
}
