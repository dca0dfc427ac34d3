//! Selected-work section
//! One showcase card per video: a 16:9 stage with a play badge, title, and
//! a "watch" hint. Activating a card opens the video in the system browser;
//! nothing is embedded or played in-process.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::SiteContent;
use crate::ui::animation::HoverEmphasis;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::section_header;

/// Build the selected-work section
pub fn view(
    site: &'static SiteContent,
    progress: f32,
    video_height: f32,
    emphasis: &HoverEmphasis<InteractiveId>,
) -> Element<'static, Message> {
    let mut cards = column![].spacing(24);
    for (index, video) in site.showcase.iter().enumerate() {
        let id = InteractiveId::ShowcaseCard(index);
        let glow = emphasis.level(&id);

        // 16:9 stage with a centered play badge
        let play_badge = container(
            svg(svg::Handle::from_memory(icons::PLAY.as_bytes()))
                .width(26)
                .height(26)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ON_ACCENT),
                }),
        )
        .width(64)
        .height(64)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(theme::with_alpha(
                theme::ACCENT,
                0.85 + 0.15 * glow,
            ))),
            border: iced::Border {
                radius: 32.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let stage = container(
            stack![
                container(Space::new().width(Fill).height(video_height))
                    .width(Fill)
                    .height(video_height)
                    .style(|_theme| container::Style {
                        background: Some(iced::Background::Color(theme::INK)),
                        ..Default::default()
                    }),
                container(play_badge)
                    .width(Fill)
                    .height(video_height)
                    .align_x(Alignment::Center)
                    .align_y(Alignment::Center),
            ]
            .width(Fill)
            .height(video_height),
        )
        .width(Fill);

        let caption = row![
            column![
                text(video.title).size(18).font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
                text(video.summary).size(13).color(theme::SOFT),
            ]
            .spacing(4),
            Space::new().width(Fill),
            row![
                text("Watch on YouTube").size(13).color(theme::ACCENT),
                svg(svg::Handle::from_memory(icons::ARROW_UP_RIGHT.as_bytes()))
                    .width(16)
                    .height(16)
                    .style(|_theme, _status| svg::Style {
                        color: Some(theme::ACCENT),
                    }),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(16.0).left(20.0).right(20.0));

        let card = container(column![stage, caption])
            .width(Fill)
            .clip(true)
            .style(move |theme_ref| {
                let mut style = theme::showcase_card(theme_ref);
                style.shadow.color = theme::with_alpha(theme::ACCENT, 0.10 + 0.25 * glow);
                style
            });

        let hit = button(card)
            .padding(0)
            .style(theme::surface_button)
            .on_press(Message::OpenLink(video.url));

        cards = cards.push(
            mouse_area(hit)
                .on_enter(Message::HoverEnter(id))
                .on_exit(Message::HoverLeave(id)),
        );
    }

    column![
        section_header::view(site.work_title, progress),
        Space::new().height(24),
        cards,
    ]
    .padding(Padding::new(0.0).bottom(48.0))
    .into()
}
