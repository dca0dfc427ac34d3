//! Footer bar
//! Copyright note and the back-to-top link.

use iced::widget::{Space, button, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::SiteContent;
use crate::ui::icons;
use crate::ui::layout::{CONTENT_MAX_WIDTH, FOOTER_HEIGHT, PAGE_PADDING};
use crate::ui::theme;

/// Build the footer bar
pub fn view(site: &'static SiteContent) -> Element<'static, Message> {
    let note = text(site.footer_note).size(12).color(theme::SOFT);

    let back_to_top = button(
        row![
            text(site.back_to_top).size(12),
            svg(svg::Handle::from_memory(icons::ARROW_UP.as_bytes()))
                .width(14)
                .height(14)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ACCENT),
                }),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .style(theme::accent_link_button)
    .on_press(Message::BackToTop);

    let bar = row![
        note,
        Space::new().width(Fill),
        mouse_area(back_to_top)
            .on_enter(Message::HoverEnter(InteractiveId::BackToTop))
            .on_exit(Message::HoverLeave(InteractiveId::BackToTop)),
    ]
    .align_y(Alignment::Center)
    .width(Fill);

    container(
        container(bar)
            .width(Fill)
            .max_width(CONTENT_MAX_WIDTH)
            .padding(Padding::new(0.0).left(PAGE_PADDING).right(PAGE_PADDING)),
    )
    .width(Fill)
    .height(FOOTER_HEIGHT)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::chrome_bar)
    .into()
}
