// src/app/update/rotation.rs
//! Quote rotation message handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::CooldownTicket;

impl App {
    /// Handle rotation-related messages
    pub fn handle_rotation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Advance => {
                let len = self.core.quotes.len();
                match self.ui.rotation.advance(len) {
                    Some(ticket) => {
                        let index = self.ui.rotation.active_index();
                        self.ui.presence.set_key(index);
                        tracing::debug!("Advanced to quote {} of {}", index + 1, len);
                        Some(self.arm_cooldown(ticket))
                    }
                    None => {
                        tracing::debug!("Advance dropped, transition in progress");
                        Some(Task::none())
                    }
                }
            }

            Message::CooldownExpired(ticket) => {
                if self.ui.rotation.cooldown_expire(*ticket) {
                    self.ui.cooldown = None;
                    tracing::debug!("Cooldown expired, rotation idle");
                } else {
                    tracing::trace!("Ignoring stale cooldown {:?}", ticket);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Start the cooldown timer for `ticket`.
    ///
    /// The handle is kept in `ui.cooldown`; storing a new one drops and
    /// aborts the previous timer.
    pub(crate) fn arm_cooldown(&mut self, ticket: CooldownTicket) -> Task<Message> {
        let delay = self.core.settings.carousel.cooldown();
        let (task, handle) = Task::perform(helpers::cooldown(delay), move |_| {
            Message::CooldownExpired(ticket)
        })
        .abortable();
        self.ui.cooldown = Some(handle.abort_on_drop());
        task
    }
}
