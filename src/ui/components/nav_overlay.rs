//! Full-window nav overlay for narrow layouts
//! Opened from the header menu button; dismisses on selection or close.

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::SiteContent;
use crate::ui::Section;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the nav overlay. Returns an empty element until the open
/// transition has any visible progress.
pub fn view(site: &'static SiteContent, progress: f32) -> Element<'static, Message> {
    if progress < 0.01 {
        return Space::new().width(0).height(0).into();
    }

    let close_button = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(20)
            .height(20)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::LIGHT),
            }),
    )
    .padding(10)
    .style(theme::glass_icon_button)
    .on_press(Message::CloseNavOverlay);

    let top_bar = row![
        Space::new().width(Fill),
        mouse_area(close_button)
            .on_enter(Message::HoverEnter(InteractiveId::OverlayClose))
            .on_exit(Message::HoverLeave(InteractiveId::OverlayClose)),
    ]
    .padding(16);

    let mut links = column![].spacing(8).align_x(Alignment::Center);
    for section in Section::NAV {
        links = links.push(overlay_link(section, progress));
    }

    let cta = button(text(site.header_cta).size(16))
        .padding(Padding::new(12.0).left(28.0).right(28.0))
        .style(move |theme_ref, status| {
            theme::fade_button_style(theme::accent_button(theme_ref, status), progress)
        })
        .on_press(Message::Navigate(Section::Contact));

    let body = column![
        links,
        Space::new().height(32),
        mouse_area(cta)
            .on_enter(Message::HoverEnter(InteractiveId::HeaderCta))
            .on_exit(Message::HoverLeave(InteractiveId::HeaderCta)),
    ]
    .align_x(Alignment::Center);

    container(column![
        top_bar,
        container(body)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    ])
    .width(Fill)
    .height(Fill)
    .style(move |theme_ref| {
        let mut style = theme::overlay_backdrop(theme_ref);
        if let Some(iced::Background::Color(color)) = style.background {
            style.background = Some(iced::Background::Color(theme::faded(color, progress)));
        }
        style
    })
    .into()
}

fn overlay_link(section: Section, progress: f32) -> Element<'static, Message> {
    let id = InteractiveId::OverlayLink(section);
    let link = button(
        text(section.label())
            .size(28)
            .color(theme::faded(theme::LIGHT, progress))
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(8)
    .style(theme::link_button)
    .on_press(Message::Navigate(section));

    mouse_area(link)
        .on_enter(Message::HoverEnter(id))
        .on_exit(Message::HoverLeave(id))
        .into()
}
