//! One-shot reveal-on-scroll
//!
//! A [`Revealer`] consumes intersection-ratio samples for a page region and
//! latches the first sample that crosses its visibility threshold. The
//! subscription is single-use: the first qualifying sample disconnects it,
//! so later samples (including the region scrolling back out of view) can
//! never un-reveal the region. [`RevealAnimation`] pairs the latch with a
//! 700 ms eased fade/slide transition.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fraction of a region that must be visible before it reveals
pub const DEFAULT_THRESHOLD: f32 = 0.18;

/// Upward slide distance while hidden, in logical pixels
pub const REVEAL_OFFSET: f32 = 8.0;

/// Reveal transition duration
const REVEAL_DURATION: Duration = Duration::from_millis(700);

/// Single-use visibility observer for one page region
#[derive(Debug, Clone, Copy)]
pub struct Revealer {
    threshold: f32,
    shown: bool,
    connected: bool,
}

impl Default for Revealer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Revealer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            shown: false,
            connected: true,
        }
    }

    /// Feed one intersection-ratio sample; returns true exactly once, on
    /// the sample that crosses the threshold.
    ///
    /// The crossing sample disconnects the observer, so every later call is
    /// inert regardless of the ratio.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.connected {
            return false;
        }
        if ratio >= self.threshold {
            self.shown = true;
            self.connected = false;
            return true;
        }
        false
    }

    /// Release the observation without revealing. Idempotent, and safe to
    /// call whether or not the reveal already fired.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Reveal latch plus its fade/slide transition
#[derive(Debug)]
pub struct RevealAnimation {
    revealer: Revealer,
    animation: Animated<f32>,
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealAnimation {
    pub fn new(threshold: f32) -> Self {
        Self {
            revealer: Revealer::new(threshold),
            animation: Animated::transition(0.0, Easing::EASE.with_duration(REVEAL_DURATION)),
        }
    }

    /// Feed a ratio sample; starts the transition on the crossing sample.
    /// Returns true when the reveal fired on this call.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.revealer.observe(ratio) {
            self.animation.update(1.0.into());
            return true;
        }
        false
    }

    /// Reveal immediately, skipping the transition (reduced-motion mode)
    pub fn force_shown(&mut self) {
        self.revealer.observe(1.0);
        self.revealer.disconnect();
        self.animation = Animated::transition(1.0, Easing::EASE.with_duration(REVEAL_DURATION));
    }

    pub fn disconnect(&mut self) {
        self.revealer.disconnect();
    }

    pub fn is_shown(&self) -> bool {
        self.revealer.is_shown()
    }

    /// Transition progress in [0, 1]; multiplies text/surface alpha and
    /// scales the slide offset in the views.
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Current upward slide offset in logical pixels
    pub fn offset(&self) -> f32 {
        (1.0 - self.progress()) * REVEAL_OFFSET
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance the transition; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot_and_monotone() {
        let mut revealer = Revealer::new(0.18);
        assert!(!revealer.observe(0.0));
        assert!(!revealer.observe(0.1));
        assert!(revealer.observe(0.2));
        assert!(revealer.is_shown());

        // Ratio dropping below the threshold never reverts the latch
        assert!(!revealer.observe(0.05));
        assert!(!revealer.observe(0.0));
        assert!(revealer.is_shown());
    }

    #[test]
    fn crossing_sample_disconnects() {
        let mut revealer = Revealer::new(0.18);
        assert!(revealer.observe(0.5));
        assert!(!revealer.is_connected());
        // Only the first qualifying sample reports the transition
        assert!(!revealer.observe(0.9));
    }

    #[test]
    fn threshold_boundary_fires() {
        let mut revealer = Revealer::new(0.18);
        assert!(revealer.observe(0.18));
    }

    #[test]
    fn never_visible_region_stays_hidden() {
        let mut revealer = Revealer::new(0.18);
        for _ in 0..1000 {
            assert!(!revealer.observe(0.05));
        }
        assert!(!revealer.is_shown());
    }

    #[test]
    fn disconnect_is_idempotent_and_final() {
        let mut revealer = Revealer::new(0.18);
        revealer.disconnect();
        revealer.disconnect();

        // No sample may fire after release
        assert!(!revealer.observe(1.0));
        assert!(!revealer.is_shown());
    }

    #[test]
    fn animation_starts_on_crossing_sample() {
        let mut reveal = RevealAnimation::new(0.18);
        assert_eq!(reveal.progress(), 0.0);
        assert!(reveal.offset() > 0.0);

        assert!(reveal.observe(0.3));
        assert!(reveal.is_shown());
        assert!(reveal.is_animating() || reveal.progress() > 0.0);
    }

    #[test]
    fn force_shown_skips_transition() {
        let mut reveal = RevealAnimation::new(0.18);
        reveal.force_shown();
        assert!(reveal.is_shown());
        assert_eq!(reveal.progress(), 1.0);
        assert_eq!(reveal.offset(), 0.0);
    }
}
