// src/app/update/animation.rs
//! Animation frame handlers

use iced::Task;
use std::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation-related messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.ui.tick(&self.core.quotes, Instant::now());
                Some(Task::none())
            }
            _ => None,
        }
    }
}
