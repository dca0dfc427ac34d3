//! Sticky header component
//! Brand mark on the left, nav links and the contact CTA on the right.
//! On narrow windows the links collapse behind a menu button that opens
//! the nav overlay.

use iced::widget::{Space, button, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::SiteContent;
use crate::ui::Section;
use crate::ui::icons;
use crate::ui::layout::{CONTENT_MAX_WIDTH, HEADER_HEIGHT, PAGE_PADDING};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Build the sticky header bar
pub fn view(site: &'static SiteContent, narrow: bool) -> Element<'static, Message> {
    let logo = row![
        svg(svg::Handle::from_memory(icons::LOGO_MARK.as_bytes()))
            .width(28)
            .height(28)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
        text(site.brand)
            .size(18)
            .color(theme::ACCENT)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let trailing: Element<'static, Message> = if narrow {
        let menu_button = button(
            svg(svg::Handle::from_memory(icons::MENU.as_bytes()))
                .width(20)
                .height(20)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::LIGHT),
                }),
        )
        .padding(10)
        .style(theme::glass_icon_button)
        .on_press(Message::OpenNavOverlay);

        mouse_area(menu_button)
            .on_enter(Message::HoverEnter(InteractiveId::MenuButton))
            .on_exit(Message::HoverLeave(InteractiveId::MenuButton))
            .into()
    } else {
        let mut links = row![].spacing(4).align_y(Alignment::Center);
        for section in Section::NAV {
            links = links.push(nav_link(section));
        }

        let cta = button(text(site.header_cta).size(14).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }))
        .padding(Padding::new(8.0).left(20.0).right(20.0))
        .style(theme::accent_button)
        .on_press(Message::Navigate(Section::Contact));

        row![
            links,
            Space::new().width(16),
            mouse_area(cta)
                .on_enter(Message::HoverEnter(InteractiveId::HeaderCta))
                .on_exit(Message::HoverLeave(InteractiveId::HeaderCta)),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    let bar = row![logo, Space::new().width(Fill), trailing]
        .align_y(Alignment::Center)
        .width(Fill);

    container(
        container(bar)
            .width(Fill)
            .max_width(CONTENT_MAX_WIDTH)
            .padding(Padding::new(0.0).left(PAGE_PADDING).right(PAGE_PADDING)),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::chrome_bar)
    .into()
}

fn nav_link(section: Section) -> Element<'static, Message> {
    let id = InteractiveId::NavLink(section);
    let link = button(text(section.label()).size(14))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(theme::link_button)
        .on_press(Message::Navigate(section));

    mouse_area(link)
        .on_enter(Message::HoverEnter(id))
        .on_exit(Message::HoverLeave(id))
        .into()
}
