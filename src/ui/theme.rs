//! Theme for the portfolio page
//! Warm dark palette with a rose accent, plus container/button styles

use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector, color};

// ============================================================================
// Color Palette
// ============================================================================

/// Page background
pub const INK: Color = color!(0x1c1b1a);
/// Card and panel surfaces
pub const PAPER: Color = color!(0x2a2726);
/// Primary text
pub const LIGHT: Color = color!(0xf4f3ee);
/// Accent for CTAs, links, and the cursor marker
pub const ACCENT: Color = color!(0xe0afa0);
/// Secondary text
pub const MUTED: Color = color!(0xbcb8b1);
/// Tertiary text (roles, footer note)
pub const SOFT: Color = color!(0x8a817c);
/// Text on accent-filled surfaces
pub const ON_ACCENT: Color = color!(0x2b211c);

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;
pub const EXTRA_BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::ExtraBold;
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

/// Replace a color's alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Scale a color's alpha by a reveal/fade progress in [0, 1]
pub fn faded(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress.clamp(0.0, 1.0),
        ..color
    }
}

/// Hairline border used on cards and bars
fn hairline() -> Color {
    with_alpha(Color::WHITE, 0.06)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window page background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(INK)),
        text_color: Some(LIGHT),
        ..Default::default()
    }
}

/// Translucent sticky header / footer bar
pub fn chrome_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba8(32, 30, 29, 0.85))),
        border: Border {
            color: hairline(),
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain content card (testimonials, contact)
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        border: Border {
            color: hairline(),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

/// Showcase card with a heavier drop shadow
pub fn showcase_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.35),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the nav overlay
pub fn overlay_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba8(28, 27, 26, 0.96))),
        text_color: Some(LIGHT),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Accent glow used on hovered CTAs
fn accent_glow(level: f32) -> Shadow {
    Shadow {
        color: with_alpha(ACCENT, 0.45 * level),
        offset: Vector::ZERO,
        blur_radius: 18.0,
    }
}

/// Filled accent CTA
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, glow) = match status {
        button::Status::Hovered => (with_alpha(ACCENT, 0.9), 1.0),
        button::Status::Pressed => (with_alpha(ACCENT, 0.8), 0.6),
        _ => (ACCENT, 0.0),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: ON_ACCENT,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: accent_glow(glow),
        ..Default::default()
    }
}

/// Accent-outlined CTA on a transparent ground
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, glow) = match status {
        button::Status::Hovered => (with_alpha(ACCENT, 0.12), 1.0),
        button::Status::Pressed => (with_alpha(ACCENT, 0.2), 0.6),
        _ => (Color::TRANSPARENT, 0.0),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: LIGHT,
        border: Border {
            color: ACCENT,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: accent_glow(glow),
        ..Default::default()
    }
}

/// Bare text link (header nav, footer)
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => LIGHT,
        _ => MUTED,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Accent text link ("Back to top")
pub fn accent_link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(ACCENT, 0.8),
        _ => ACCENT,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Round translucent icon button (menu / close)
pub fn glass_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => with_alpha(Color::WHITE, 0.16),
        button::Status::Pressed => with_alpha(Color::WHITE, 0.22),
        _ => with_alpha(Color::WHITE, 0.08),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: LIGHT,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Invisible hit surface for whole-card targets (showcase card)
pub fn surface_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: LIGHT,
        ..Default::default()
    }
}

/// Scale a button style's colors by a reveal progress in [0, 1]
pub fn fade_button_style(mut style: button::Style, progress: f32) -> button::Style {
    if let Some(Background::Color(color)) = style.background {
        style.background = Some(Background::Color(faded(color, progress)));
    }
    style.text_color = faded(style.text_color, progress);
    style.border.color = faded(style.border.color, progress);
    style.shadow.color = faded(style.shadow.color, progress);
    style
}

// ============================================================================
// Scrollable Style
// ============================================================================

/// Page scrollbar on the dark ground
pub fn page_scrollable(_theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(with_alpha(SOFT, 0.5)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(PAPER),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: MUTED,
        },
    }
}
