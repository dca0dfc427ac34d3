// src/app/update/navigation.rs
//! Section navigation, the nav overlay, and external links

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(section) => {
                // Selecting a destination always dismisses the overlay
                if self.ui.nav_overlay_open {
                    self.ui.nav_overlay_open = false;
                    self.ui.nav_overlay_animation.fade_out();
                }
                let target_y = self.ui.metrics.scroll_target(*section);
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new("page_scroll"),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::BackToTop => Some(iced::widget::operation::scroll_to(
                iced::widget::Id::new("page_scroll"),
                iced::widget::scrollable::AbsoluteOffset {
                    x: Some(0.0),
                    y: Some(0.0),
                },
            )),

            Message::OpenNavOverlay => {
                self.ui.nav_overlay_open = true;
                self.ui.nav_overlay_animation.fade_in();
                Some(Task::none())
            }

            Message::CloseNavOverlay => {
                self.ui.nav_overlay_open = false;
                self.ui.nav_overlay_animation.fade_out();
                Some(Task::none())
            }

            Message::OpenLink(url) => {
                tracing::info!(%url, "opening external link");
                let url = url.to_string();
                Some(Task::perform(helpers::open_link(url), |result| {
                    match result {
                        Ok(()) => Message::Noop,
                        Err(e) => Message::LinkOpenFailed(e.to_string()),
                    }
                }))
            }

            Message::LinkOpenFailed(error) => {
                // Silent degradation: the link simply does not open
                tracing::warn!(%error, "failed to open external link");
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
