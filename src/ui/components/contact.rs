//! Contact section
//! Pitch card with the external contact links. Every link opens in the
//! system browser or mail client.

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::{ContactLink, SiteContent};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::section_header;

/// Build the contact section
pub fn view(site: &'static SiteContent, progress: f32, narrow: bool) -> Element<'static, Message> {
    let pitch = column![
        text(site.contact_pitch)
            .size(22)
            .color(theme::faded(theme::LIGHT, progress))
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(site.contact_hint)
            .size(13)
            .color(theme::faded(theme::MUTED, progress)),
    ]
    .spacing(6);

    let mut links = row![].spacing(12).align_y(Alignment::Center);
    for link in ContactLink::ALL {
        links = links.push(link_button(link, progress));
    }

    let card_body: Element<'static, Message> = if narrow {
        column![pitch, Space::new().height(20), links]
            .width(Fill)
            .into()
    } else {
        row![pitch, Space::new().width(Fill), links]
            .align_y(Alignment::Center)
            .width(Fill)
            .into()
    };

    let card = container(card_body)
        .width(Fill)
        .padding(24)
        .style(move |theme_ref| {
            let mut style = theme::card(theme_ref);
            if let Some(iced::Background::Color(color)) = style.background {
                style.background = Some(iced::Background::Color(theme::faded(color, progress)));
            }
            style.border.color = theme::faded(style.border.color, progress);
            style
        });

    column![
        section_header::view(site.contact_title, progress),
        Space::new().height(24),
        card,
    ]
    .padding(Padding::new(0.0).top(48.0).bottom(48.0))
    .into()
}

fn link_button(link: ContactLink, progress: f32) -> Element<'static, Message> {
    let id = InteractiveId::Contact(link);
    let style = move |theme_ref: &iced::Theme, status| {
        let base = if link.is_primary() {
            theme::accent_button(theme_ref, status)
        } else {
            theme::outline_button(theme_ref, status)
        };
        theme::fade_button_style(base, progress)
    };

    let label: Element<'static, Message> = if link.is_primary() {
        row![
            svg(svg::Handle::from_memory(icons::MAIL.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ON_ACCENT),
                }),
            text(link.label()).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    } else {
        text(link.label()).size(14).into()
    };

    let target = button(label)
        .padding(Padding::new(10.0).left(20.0).right(20.0))
        .style(style)
        .on_press(Message::OpenLink(link.url()));

    mouse_area(target)
        .on_enter(Message::HoverEnter(id))
        .on_exit(Message::HoverLeave(id))
        .into()
}
