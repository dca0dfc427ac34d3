//! About section

use iced::widget::{Space, column, text};
use iced::{Element, Padding};

use crate::app::Message;
use crate::features::content::SiteContent;
use crate::ui::theme;
use crate::ui::widgets::section_header;

/// Build the about section
pub fn view(site: &'static SiteContent, progress: f32) -> Element<'static, Message> {
    let body = text(site.about_body)
        .size(15)
        .color(theme::faded(theme::MUTED, progress));

    column![
        section_header::view(site.about_title, progress),
        Space::new().height(16),
        body,
    ]
    .max_width(680)
    .padding(Padding::new(0.0).top(48.0).bottom(48.0))
    .into()
}
