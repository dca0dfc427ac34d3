//! Page layout model
//!
//! The page is a single scrollable column of fixed sections, so every
//! section's vertical extent is a deterministic function of the viewport
//! size. [`PageMetrics`] captures those extents and answers the two
//! questions the rest of the app asks: how much of a section is currently
//! visible (feeding the reveal latches), and where to scroll to reach it
//! (feeding nav clicks).

use iced::Size;

/// Sticky header height in logical pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Maximum content column width
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

/// Horizontal page padding
pub const PAGE_PADDING: f32 = 16.0;

/// Below this window width the nav collapses behind the menu button and
/// testimonial cards stack vertically
pub const NARROW_BREAKPOINT: f32 = 760.0;

/// Footer bar height
pub const FOOTER_HEIGHT: f32 = 56.0;

const SECTION_PADDING_Y: f32 = 48.0;
const HEADING_BLOCK: f32 = 64.0;
const TESTIMONIAL_CARD_HEIGHT: f32 = 172.0;
const TESTIMONIAL_GAP: f32 = 16.0;
const TESTIMONIAL_COUNT: f32 = 3.0;

/// Page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Work,
    Feedback,
    About,
    Contact,
}

impl Section {
    /// All sections, in document order
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Work,
        Section::Feedback,
        Section::About,
        Section::Contact,
    ];

    /// Sections reachable from the header nav
    pub const NAV: [Section; 4] = [
        Section::Work,
        Section::Feedback,
        Section::About,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Work => "Work",
            Section::Feedback => "Feedback",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    fn index(&self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Work => 1,
            Section::Feedback => 2,
            Section::About => 3,
            Section::Contact => 4,
        }
    }
}

/// Vertical extent of one section within the scroll content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

/// Section spans for a given viewport size
#[derive(Debug, Clone)]
pub struct PageMetrics {
    viewport: Size,
    narrow: bool,
    content_width: f32,
    spans: [Span; 5],
    total_height: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 860.0))
    }
}

impl PageMetrics {
    pub fn new(viewport: Size) -> Self {
        let narrow = viewport.width < NARROW_BREAKPOINT;
        let content_width = (viewport.width - 2.0 * PAGE_PADDING).clamp(320.0, CONTENT_MAX_WIDTH);

        // 16:9 showcase card plus heading
        let video_height = content_width * 9.0 / 16.0;

        let hero_height = if narrow { 460.0 } else { 356.0 };
        let work_height = HEADING_BLOCK + video_height + SECTION_PADDING_Y;
        let feedback_cards = if narrow {
            TESTIMONIAL_COUNT * TESTIMONIAL_CARD_HEIGHT
                + (TESTIMONIAL_COUNT - 1.0) * TESTIMONIAL_GAP
        } else {
            TESTIMONIAL_CARD_HEIGHT
        };
        let feedback_height = HEADING_BLOCK + feedback_cards + 2.0 * SECTION_PADDING_Y;
        let about_height = HEADING_BLOCK + if narrow { 150.0 } else { 110.0 };
        let contact_height = HEADING_BLOCK + if narrow { 300.0 } else { 210.0 };

        let heights = [
            hero_height,
            work_height,
            feedback_height,
            about_height,
            contact_height,
        ];

        // Content starts with a header-height spacer so the sticky header
        // never covers the top of the hero
        let mut top = HEADER_HEIGHT;
        let mut spans = [Span {
            top: 0.0,
            height: 0.0,
        }; 5];
        for (span, height) in spans.iter_mut().zip(heights) {
            *span = Span { top, height };
            top += height;
        }

        Self {
            viewport,
            narrow,
            content_width,
            spans,
            total_height: top + FOOTER_HEIGHT,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn span(&self, section: Section) -> Span {
        self.spans[section.index()]
    }

    /// Fraction of a section currently inside the scroll window, in [0, 1]
    pub fn intersection_ratio(&self, section: Section, scroll_offset: f32) -> f32 {
        let span = self.span(section);
        if span.height <= 0.0 {
            return 0.0;
        }
        let window_top = scroll_offset;
        let window_bottom = scroll_offset + self.viewport.height;
        let visible_top = span.top.max(window_top);
        let visible_bottom = (span.top + span.height).min(window_bottom);
        ((visible_bottom - visible_top) / span.height).clamp(0.0, 1.0)
    }

    /// Absolute scroll offset that puts a section just under the header
    pub fn scroll_target(&self, section: Section) -> f32 {
        let max_offset = (self.total_height - self.viewport.height).max(0.0);
        (self.span(section).top - HEADER_HEIGHT - 12.0).clamp(0.0, max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> PageMetrics {
        PageMetrics::new(Size::new(1280.0, 860.0))
    }

    fn narrow() -> PageMetrics {
        PageMetrics::new(Size::new(600.0, 800.0))
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let metrics = wide();
        let mut previous_bottom = 0.0;
        for section in Section::ALL {
            let span = metrics.span(section);
            assert!(span.top >= previous_bottom);
            assert!(span.height > 0.0);
            previous_bottom = span.top + span.height;
        }
        assert!(metrics.total_height() >= previous_bottom);
    }

    #[test]
    fn hero_is_fully_visible_at_the_top() {
        let metrics = wide();
        assert_eq!(metrics.intersection_ratio(Section::Hero, 0.0), 1.0);
    }

    #[test]
    fn contact_is_hidden_at_the_top() {
        let metrics = wide();
        assert_eq!(metrics.intersection_ratio(Section::Contact, 0.0), 0.0);
    }

    #[test]
    fn ratios_stay_in_unit_range() {
        let metrics = wide();
        let mut offset = 0.0;
        while offset < metrics.total_height() {
            for section in Section::ALL {
                let ratio = metrics.intersection_ratio(section, offset);
                assert!((0.0..=1.0).contains(&ratio));
            }
            offset += 97.0;
        }
    }

    #[test]
    fn scrolling_to_a_section_makes_it_visible() {
        let metrics = wide();
        for section in Section::NAV {
            let target = metrics.scroll_target(section);
            assert!(metrics.intersection_ratio(section, target) > 0.18);
        }
    }

    #[test]
    fn scroll_targets_never_overshoot_the_page() {
        let metrics = wide();
        let max_offset = metrics.total_height() - metrics.viewport().height;
        for section in Section::ALL {
            assert!(metrics.scroll_target(section) <= max_offset.max(0.0));
        }
    }

    #[test]
    fn narrow_layout_stacks_testimonials() {
        assert!(
            narrow().span(Section::Feedback).height > wide().span(Section::Feedback).height,
            "stacked cards must make the feedback section taller"
        );
    }

    #[test]
    fn narrow_flag_follows_breakpoint() {
        assert!(narrow().is_narrow());
        assert!(!wide().is_narrow());
    }
}
