//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::{InteractiveId, Message};
pub use state::{App, CoreState, SectionReveals, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            reduced_motion = settings.display.reduced_motion,
            cursor_trail = settings.display.cursor_trail,
            "settings loaded"
        );

        let core = CoreState::new(settings);
        let mut ui = UiState::new(core.window_size);

        if core.settings.display.reduced_motion {
            // Everything is visible immediately and nothing transitions
            ui.reveals.force_all_shown();
        } else {
            // Whatever is already in view at launch (the hero) reveals now
            ui.sample_reveals();
        }

        (Self { core, ui }, Task::none())
    }

    /// Window title
    pub fn title(&self) -> String {
        crate::features::content::SITE.window_title.to_string()
    }

    /// Application theme (the page paints its own palette)
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Subscriptions for animation frames, pointer tracking, and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Animation frames (~display refresh). Stays live while any
        //    transition runs, and permanently once the follower has armed.
        let needs_frames = subscription_logic::needs_frame_subscription(
            self.ui.has_active_animations(),
            self.ui.follower.is_armed(),
            self.core.motion_enabled(),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Pointer events feeding the cursor marker
        let pointer_sub = if subscription_logic::needs_pointer_subscription(
            self.core.settings.display.cursor_trail,
            self.core.motion_enabled(),
        ) {
            iced::event::listen().filter_map(|event| match event {
                iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                    Some(Message::PointerMoved(position))
                }
                iced::Event::Mouse(iced::mouse::Event::CursorLeft) => Some(Message::PointerLeft),
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 3. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([animation_sub, pointer_sub, resize_sub, close_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frame ticks run while any transition is in flight or the follower
    /// loop is armed; the armed loop never disarms on pointer idleness, so
    /// arming keeps frames live for the rest of the session.
    pub fn needs_frame_subscription(
        has_animations: bool,
        follower_armed: bool,
        motion_enabled: bool,
    ) -> bool {
        motion_enabled && (has_animations || follower_armed)
    }

    /// Pointer tracking exists only for the cursor marker
    pub fn needs_pointer_subscription(cursor_trail: bool, motion_enabled: bool) -> bool {
        cursor_trail && motion_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frame_subscription {
        use super::*;

        #[test]
        fn idle_page_needs_no_frames() {
            assert!(!needs_frame_subscription(false, false, true));
        }

        #[test]
        fn transitions_request_frames() {
            assert!(needs_frame_subscription(true, false, true));
        }

        #[test]
        fn armed_follower_keeps_frames_alive() {
            // No transition in flight, but the follower loop re-arms itself
            // every tick once any motion has occurred
            assert!(needs_frame_subscription(false, true, true));
        }

        #[test]
        fn reduced_motion_gates_everything() {
            assert!(!needs_frame_subscription(true, false, false));
            assert!(!needs_frame_subscription(false, true, false));
            assert!(!needs_frame_subscription(true, true, false));
        }
    }

    mod property_pointer_subscription {
        use super::*;

        #[test]
        fn cursor_trail_controls_pointer_tracking() {
            assert!(needs_pointer_subscription(true, true));
            assert!(!needs_pointer_subscription(false, true));
        }

        #[test]
        fn reduced_motion_disables_pointer_tracking() {
            assert!(!needs_pointer_subscription(true, false));
        }

        #[test]
        fn pointer_tracking_is_independent_of_animations() {
            // The pointer subscription must not depend on whether any
            // transition happens to be running
            for has_animations in [false, true] {
                let _ = has_animations;
                assert!(needs_pointer_subscription(true, true));
            }
        }
    }
}
