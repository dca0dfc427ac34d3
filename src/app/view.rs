// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::features::content::SITE;
use crate::ui::Section;
use crate::ui::layout::{CONTENT_MAX_WIDTH, HEADER_HEIGHT, PAGE_PADDING};
use crate::ui::{components, theme};

impl App {
    /// Build the page view
    pub fn view(&self) -> Element<'_, Message> {
        let narrow = self.ui.metrics.is_narrow();
        let reveals = &self.ui.reveals;
        let video_height = self.ui.metrics.content_width() * 9.0 / 16.0;

        let sections = column![
            components::hero::view(&SITE, reveals.progress(Section::Hero), narrow),
            components::showcase::view(
                &SITE,
                reveals.progress(Section::Work),
                video_height,
                &self.ui.hover_emphasis,
            ),
            components::testimonials::view(&SITE, reveals.progress(Section::Feedback), narrow),
            components::about::view(&SITE, reveals.progress(Section::About)),
            components::contact::view(&SITE, reveals.progress(Section::Contact), narrow),
        ];

        let content = container(
            container(sections)
                .width(Fill)
                .max_width(CONTENT_MAX_WIDTH)
                .padding(Padding::new(0.0).left(PAGE_PADDING).right(PAGE_PADDING)),
        )
        .width(Fill)
        .align_x(Alignment::Center);

        let page = scrollable(column![
            // Room for the sticky header so the hero starts below it
            Space::new().height(HEADER_HEIGHT),
            content,
            components::footer::view(&SITE),
        ])
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new("page_scroll"))
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
        .style(theme::page_scrollable);

        // Sticky header pinned over the scrolling content
        let header_overlay = container(components::header::view(&SITE, narrow)).width(Fill);

        // Nav overlay (narrow layout), gated on its fade progress
        let overlay_progress = self.ui.nav_overlay_animation.progress();
        let nav_overlay: Element<'_, Message> =
            if self.ui.nav_overlay_open || overlay_progress > 0.01 {
                components::nav_overlay::view(&SITE, overlay_progress)
            } else {
                Space::new().width(0).height(0).into()
            };

        // Cursor marker; hidden until the first pointer motion arms it
        let cursor_overlay: Element<'_, Message> =
            if self.core.cursor_trail_enabled() && self.ui.follower.is_armed() {
                components::cursor_overlay::view(
                    self.ui.follower.rendered(),
                    self.ui.cursor_glow.progress(),
                )
            } else {
                Space::new().width(0).height(0).into()
            };

        container(
            stack![page, header_overlay, nav_overlay, cursor_overlay]
                .width(Fill)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .style(theme::page)
        .into()
    }
}
