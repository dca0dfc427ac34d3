// src/app/state.rs
//! Application state definitions

use iced::time::Instant;
use iced::{Point, Size};

use crate::app::message::InteractiveId;
use crate::features::Settings;
use crate::ui::animation::{FadeAnimation, HoverEmphasis, PointerFollower, RevealAnimation};
use crate::ui::{PageMetrics, Section};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, window metrics)
    pub core: CoreState,
    /// UI state (reveals, follower, overlay, animations)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub window_size: Size,
    /// Latest raw pointer position, window coordinates
    pub pointer_position: Point,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let window_size = settings.window.size();
        Self {
            settings,
            window_size,
            pointer_position: Point::ORIGIN,
        }
    }

    /// Motion is disabled globally by the reduced-motion preference
    pub fn motion_enabled(&self) -> bool {
        !self.settings.display.reduced_motion
    }

    /// The cursor marker runs only when enabled and motion is allowed
    pub fn cursor_trail_enabled(&self) -> bool {
        self.settings.display.cursor_trail && self.motion_enabled()
    }
}

/// One reveal latch per page section
pub struct SectionReveals {
    hero: RevealAnimation,
    work: RevealAnimation,
    feedback: RevealAnimation,
    about: RevealAnimation,
    contact: RevealAnimation,
}

impl Default for SectionReveals {
    fn default() -> Self {
        Self {
            hero: RevealAnimation::default(),
            work: RevealAnimation::default(),
            feedback: RevealAnimation::default(),
            about: RevealAnimation::default(),
            contact: RevealAnimation::default(),
        }
    }
}

impl SectionReveals {
    pub fn get(&self, section: Section) -> &RevealAnimation {
        match section {
            Section::Hero => &self.hero,
            Section::Work => &self.work,
            Section::Feedback => &self.feedback,
            Section::About => &self.about,
            Section::Contact => &self.contact,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut RevealAnimation {
        match section {
            Section::Hero => &mut self.hero,
            Section::Work => &mut self.work,
            Section::Feedback => &mut self.feedback,
            Section::About => &mut self.about,
            Section::Contact => &mut self.contact,
        }
    }

    /// Feed one intersection-ratio sample to a section's latch
    pub fn observe(&mut self, section: Section, ratio: f32) -> bool {
        self.get_mut(section).observe(ratio)
    }

    /// Reveal progress for a section, in [0, 1]
    pub fn progress(&self, section: Section) -> f32 {
        self.get(section).progress()
    }

    /// Latch every section fully shown without transitions (reduced motion)
    pub fn force_all_shown(&mut self) {
        for section in Section::ALL {
            self.get_mut(section).force_shown();
        }
    }

    /// Release every observation, fired or not; part of teardown
    pub fn disconnect_all(&mut self) {
        for section in Section::ALL {
            self.get_mut(section).disconnect();
        }
    }

    pub fn is_animating(&self) -> bool {
        Section::ALL
            .iter()
            .any(|section| self.get(*section).is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        for section in Section::ALL {
            self.get_mut(section).tick(now);
        }
    }
}

/// UI view state
pub struct UiState {
    /// Absolute scroll offset of the page scrollable
    pub scroll_offset: f32,
    /// Section spans for the current viewport
    pub metrics: PageMetrics,
    /// One-shot reveal latches
    pub reveals: SectionReveals,

    /// Cursor marker state
    pub follower: PointerFollower<InteractiveId>,
    /// Glow/grow transition while the pointer is over an interactive element
    pub cursor_glow: FadeAnimation,
    /// Hover emphasis for buttons and cards
    pub hover_emphasis: HoverEmphasis<InteractiveId>,

    /// Full-window nav overlay (narrow layout)
    pub nav_overlay_open: bool,
    pub nav_overlay_animation: FadeAnimation,
}

impl UiState {
    pub fn new(window_size: Size) -> Self {
        Self {
            scroll_offset: 0.0,
            metrics: PageMetrics::new(window_size),
            reveals: SectionReveals::default(),
            follower: PointerFollower::new(),
            cursor_glow: FadeAnimation::new(),
            hover_emphasis: HoverEmphasis::new(),
            nav_overlay_open: false,
            nav_overlay_animation: FadeAnimation::new(),
        }
    }

    /// Sample every section's intersection ratio against the current scroll
    /// position. Only first-crossing samples have any effect; the latches
    /// keep their one-shot contract.
    pub fn sample_reveals(&mut self) {
        for section in Section::ALL {
            let ratio = self
                .metrics
                .intersection_ratio(section, self.scroll_offset);
            self.reveals.observe(section, ratio);
        }
    }

    /// Check if any transition is currently in flight
    pub fn has_active_animations(&self) -> bool {
        self.reveals.is_animating()
            || self.hover_emphasis.is_animating()
            || self.cursor_glow.is_animating()
            || self.nav_overlay_animation.is_animating()
    }

    /// Drop settled fade-out slots; call periodically from the frame tick
    pub fn cleanup_animations(&mut self) {
        self.hover_emphasis.prune();
    }
}
