// src/app/update/reveal.rs
//! Scroll tracking and reveal sampling

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle scroll messages feeding the section reveal latches
    pub fn handle_reveal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Scrolled(offset) => {
                self.ui.scroll_offset = *offset;
                if self.core.motion_enabled() {
                    // Samples arrive in scroll order; the latches keep their
                    // one-shot contract, so re-entering the viewport is inert
                    self.ui.sample_reveals();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
