//! Cursor marker overlay
//!
//! Draws a dot and a trailing ring at the follower's rendered position,
//! stacked over the whole page. The ring grows and the glow strengthens
//! while the pointer is over an interactive element. This overlay owns its
//! marker exclusively and never touches any other presentation.

use iced::widget::canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use crate::ui::animation::follower::{RING_RADIUS, RING_RADIUS_ACTIVE};
use crate::ui::theme;

/// Marker geometry for one frame
#[derive(Debug, Clone, Copy)]
struct CursorMarker {
    /// Smoothed marker position
    position: Point,
    /// Active-state progress in [0, 1] (over an interactive element)
    active: f32,
}

impl<Message> Program<Message> for CursorMarker {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let radius = RING_RADIUS + (RING_RADIUS_ACTIVE - RING_RADIUS) * self.active;

        // Soft glow halo, strongest in the active state
        frame.fill(
            &Path::circle(self.position, radius * 2.2),
            theme::with_alpha(theme::ACCENT, 0.06 + 0.12 * self.active),
        );

        // Trailing ring
        frame.stroke(
            &Path::circle(self.position, radius),
            Stroke::default()
                .with_width(1.5)
                .with_color(theme::with_alpha(theme::ACCENT, 0.8)),
        );

        // Center dot
        frame.fill(&Path::circle(self.position, 3.0), theme::ACCENT);

        vec![frame.into_geometry()]
    }
}

/// Build the full-window marker layer
pub fn view<'a, Message: 'a>(position: Point, active: f32) -> Element<'a, Message> {
    canvas(CursorMarker { position, active })
        .width(Fill)
        .height(Fill)
        .into()
}
