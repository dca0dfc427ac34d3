//! Application messages

use crate::features::content::ContactLink;
use crate::ui::Section;

/// Interactive elements tracked by the cursor follower and hover emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveId {
    /// Header nav link
    NavLink(Section),
    /// Header "Get in touch" CTA
    HeaderCta,
    /// Header menu button (narrow layout)
    MenuButton,
    /// Nav overlay link
    OverlayLink(Section),
    /// Nav overlay close button
    OverlayClose,
    /// Hero primary CTA
    HeroPrimary,
    /// Hero email CTA
    HeroEmail,
    /// Showcase card
    ShowcaseCard(usize),
    /// Contact section link
    Contact(ContactLink),
    /// Footer back-to-top link
    BackToTop,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op for tasks that only log
    Noop,

    // ============ Navigation ============
    /// Scroll to a page section
    Navigate(Section),
    /// Scroll back to the top of the page
    BackToTop,
    /// Open the full-window nav overlay (narrow layout)
    OpenNavOverlay,
    /// Close the nav overlay
    CloseNavOverlay,
    /// Open an external link in the system browser
    OpenLink(&'static str),
    /// External link could not be opened
    LinkOpenFailed(String),

    // ============ Scroll ============
    /// Page scrollable moved (absolute y offset in pixels)
    Scrolled(f32),

    // ============ Pointer ============
    /// Pointer moved (window coordinates)
    PointerMoved(iced::Point),
    /// Pointer left the window
    PointerLeft,
    /// Pointer entered an interactive element
    HoverEnter(InteractiveId),
    /// Pointer left an interactive element
    HoverLeave(InteractiveId),
    /// Animation frame
    AnimationTick,

    // ============ Window ============
    /// Window resized
    WindowResized(iced::Size),
    /// Window close requested
    RequestClose,
}
