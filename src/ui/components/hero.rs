//! Hero section
//! Headline, tagline, and the two primary CTAs. The tagline and CTA row
//! fade and slide in with the hero's reveal progress.

use iced::widget::{Space, button, column, mouse_area, row, text};
use iced::{Element, Padding};

use crate::app::{InteractiveId, Message};
use crate::features::content::SiteContent;
use crate::ui::Section;
use crate::ui::theme::{self, EXTRA_BOLD_WEIGHT};

/// Build the hero section
pub fn view(site: &'static SiteContent, progress: f32, narrow: bool) -> Element<'static, Message> {
    let headline_size = if narrow { 34 } else { 48 };

    // The original paints this with a text gradient from light into the
    // accent; closest single-fill equivalent is a two-tone headline.
    let headline = column![
        text(site.hero_headline)
            .size(headline_size)
            .color(theme::LIGHT)
            .font(iced::Font {
                weight: EXTRA_BOLD_WEIGHT,
                ..Default::default()
            }),
        text(site.hero_headline_accent)
            .size(headline_size)
            .color(theme::ACCENT)
            .font(iced::Font {
                weight: EXTRA_BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .spacing(2);

    let tagline = text(site.hero_tagline)
        .size(16)
        .color(theme::faded(theme::MUTED, progress));

    let primary = button(text(site.hero_primary_cta).size(14))
        .padding(Padding::new(12.0).left(20.0).right(20.0))
        .style(move |theme_ref, status| {
            theme::fade_button_style(theme::accent_button(theme_ref, status), progress)
        })
        .on_press(Message::Navigate(Section::Work));

    let email = button(text(site.hero_email_cta).size(14))
        .padding(Padding::new(12.0).left(20.0).right(20.0))
        .style(move |theme_ref, status| {
            theme::fade_button_style(theme::outline_button(theme_ref, status), progress)
        })
        .on_press(Message::OpenLink(site.email_url));

    let actions = row![
        mouse_area(primary)
            .on_enter(Message::HoverEnter(InteractiveId::HeroPrimary))
            .on_exit(Message::HoverLeave(InteractiveId::HeroPrimary)),
        mouse_area(email)
            .on_enter(Message::HoverEnter(InteractiveId::HeroEmail))
            .on_exit(Message::HoverLeave(InteractiveId::HeroEmail)),
    ]
    .spacing(12);

    let offset = (1.0 - progress) * crate::ui::animation::reveal::REVEAL_OFFSET;

    column![
        headline,
        Space::new().height(16.0 + offset),
        tagline,
        Space::new().height(24),
        actions,
    ]
    .padding(Padding::new(0.0).top(64.0).bottom(64.0))
    .into()
}
