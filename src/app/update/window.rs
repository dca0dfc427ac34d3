// src/app/update/window.rs
//! Window resize and close handling

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::PageMetrics;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.window_size = *size;
                self.core.settings.window.width = size.width;
                self.core.settings.window.height = size.height;
                self.ui.metrics = PageMetrics::new(*size);
                if self.core.motion_enabled() {
                    // A resize can bring a section into view without a scroll
                    self.ui.sample_reveals();
                }
                Some(Task::none())
            }

            Message::RequestClose => {
                // Release the follower loop and every reveal subscription
                // before the window goes away; both are idempotent
                self.ui.follower.teardown();
                self.ui.reveals.disconnect_all();
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("failed to save settings: {}", e);
                }
                tracing::info!("shutting down");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
