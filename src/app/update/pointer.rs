// src/app/update/pointer.rs
//! Pointer tracking, hover state, and the animation frame tick

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle pointer and animation messages
    pub fn handle_pointer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PointerMoved(position) => {
                self.core.pointer_position = *position;
                if self.core.cursor_trail_enabled()
                    && self.ui.follower.pointer_moved(*position)
                {
                    tracing::debug!("cursor follower armed");
                }
                Some(Task::none())
            }

            Message::PointerLeft => {
                self.ui.follower.clear_hover();
                self.ui.hover_emphasis.set_hovered(None);
                self.ui.cursor_glow.fade_out();
                Some(Task::none())
            }

            Message::HoverEnter(id) => {
                self.ui.follower.enter(*id);
                self.ui.hover_emphasis.set_hovered(Some(*id));
                self.ui.cursor_glow.fade_in();
                Some(Task::none())
            }

            Message::HoverLeave(id) => {
                // Ignored by the follower when the pointer already moved on
                // to another interactive element
                self.ui.follower.leave(*id);
                if !self.ui.follower.is_over_interactive() {
                    self.ui.hover_emphasis.set_hovered(None);
                    self.ui.cursor_glow.fade_out();
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.follower.tick();
                self.ui.reveals.tick(now);
                self.ui.hover_emphasis.tick(now);
                self.ui.cursor_glow.tick(now);
                self.ui.nav_overlay_animation.tick(now);
                self.ui.cleanup_animations();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
