//! Client feedback section
//! Three quote cards, side by side on wide windows and stacked on narrow
//! ones. Cards fade and slide with the section's reveal progress.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::features::content::{SiteContent, Testimonial};
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::section_header;

/// Build the feedback section
pub fn view(site: &'static SiteContent, progress: f32, narrow: bool) -> Element<'static, Message> {
    let cards: Element<'static, Message> = if narrow {
        let mut stacked = column![].spacing(16);
        for testimonial in site.testimonials {
            stacked = stacked.push(card(testimonial, progress));
        }
        stacked.into()
    } else {
        let mut shelf = row![].spacing(16);
        for testimonial in site.testimonials {
            shelf = shelf.push(card(testimonial, progress));
        }
        shelf.into()
    };

    column![
        section_header::view(site.feedback_title, progress),
        Space::new().height(24),
        cards,
    ]
    .padding(Padding::new(0.0).top(48.0).bottom(48.0))
    .into()
}

fn card(testimonial: &'static Testimonial, progress: f32) -> Element<'static, Message> {
    let quote = text(format!("\u{201c}{}\u{201d}", testimonial.quote))
        .size(14)
        .color(theme::faded(theme::MUTED, progress));

    let name = text(testimonial.name)
        .size(14)
        .color(theme::faded(theme::LIGHT, progress))
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        });

    let role = text(testimonial.role)
        .size(12)
        .color(theme::faded(theme::SOFT, progress));

    container(
        column![quote, Space::new().height(Fill), column![name, role].spacing(2)]
            .height(Fill),
    )
    .width(Fill)
    .height(172)
    .padding(20)
    .style(move |theme_ref| {
        let mut style = theme::card(theme_ref);
        if let Some(iced::Background::Color(color)) = style.background {
            style.background = Some(iced::Background::Color(theme::faded(color, progress)));
        }
        style.border.color = theme::faded(style.border.color, progress);
        style
    })
    .into()
}
