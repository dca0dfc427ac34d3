//! Section header widget
//!
//! Displays a section title that fades and slides in with its reveal
//! progress. Uses a generic Message type so it stays free of application
//! types.

use iced::Element;
use iced::widget::{Space, column, text};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// `progress` is the section's reveal progress in [0, 1]; it scales the
/// title's alpha and a small upward slide.
pub fn view<'a, Message: 'a>(title: &'a str, progress: f32) -> Element<'a, Message> {
    let offset = (1.0 - progress) * crate::ui::animation::reveal::REVEAL_OFFSET;

    let title_text = text(title)
        .size(28)
        .color(theme::faded(theme::LIGHT, progress))
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    column![Space::new().height(offset), title_text]
        .spacing(0)
        .into()
}
