//! Hover emphasis animations
//!
//! Exactly one interactive element is under the pointer at a time, so the
//! manager only tracks the active element plus the one fading back out,
//! keeping per-frame work O(1) no matter how many elements the page tags.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover emphasis ramp (snappy in, soft out)
const EMPHASIS_DURATION: Duration = Duration::from_millis(200);

fn emphasis_easing() -> Easing {
    Easing::EASE_OUT.with_duration(EMPHASIS_DURATION)
}

/// Exclusive hover emphasis, keyed by interactive element
#[derive(Debug)]
pub struct HoverEmphasis<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active: Animated<f32>,
    fading_key: Option<K>,
    fading: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverEmphasis<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverEmphasis<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active: Animated::transition(0.0, emphasis_easing()),
            fading_key: None,
            fading: Animated::transition(0.0, emphasis_easing()),
        }
    }

    /// Move emphasis to `key`, demoting the previous element to the fading
    /// slot. Pass `None` to drop emphasis entirely.
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        if let Some(old) = self.active_key.take() {
            self.fading_key = Some(old);
            let level = *self.active.value();
            self.fading = Animated::transition(level, emphasis_easing());
            self.fading.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active = Animated::transition(0.0, emphasis_easing());
            self.active.update(1.0.into());
        }
    }

    /// Emphasis level for a key, in [0, 1]
    pub fn level(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading.value()
        } else {
            0.0
        }
    }

    /// Interpolate between two values by a key's emphasis level
    pub fn lerp(&self, key: &K, from: f32, to: f32) -> f32 {
        from + (to - from) * self.level(key)
    }

    pub fn is_hovered(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_animating() || self.fading.is_animating()
    }

    /// Drop the fading slot once it has settled back to zero
    pub fn prune(&mut self) {
        if self.fading_key.is_some()
            && *self.fading.value() < 0.01
            && self.fading.value() == self.fading.target()
        {
            self.fading_key = None;
        }
    }

    /// Advance both slots; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active.tick(now);
        self.fading.tick(now);
    }
}

/// Two-state fade for overlays and the cursor marker's active glow
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, Easing::EASE.with_duration(EMPHASIS_DURATION)),
        }
    }

    /// Fade toward the visible/active state
    pub fn fade_in(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade back toward the hidden/idle state
    pub fn fade_out(&mut self) {
        self.animation.update(0.0.into());
    }

    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_is_exclusive() {
        let mut emphasis: HoverEmphasis<u32> = HoverEmphasis::new();
        assert_eq!(emphasis.level(&1), 0.0);

        emphasis.set_hovered(Some(1));
        assert!(emphasis.is_hovered(&1));

        emphasis.set_hovered(Some(2));
        assert!(emphasis.is_hovered(&2));
        assert!(!emphasis.is_hovered(&1));
    }

    #[test]
    fn level_stays_in_unit_range() {
        let mut emphasis: HoverEmphasis<u32> = HoverEmphasis::new();
        for key in [1u32, 2, 3] {
            emphasis.set_hovered(Some(key));
            let level = emphasis.level(&key);
            assert!((0.0..=1.0).contains(&level));
        }
        emphasis.set_hovered(None);
        assert!((0.0..=1.0).contains(&emphasis.level(&3)));
    }

    #[test]
    fn redundant_set_is_a_no_op() {
        let mut emphasis: HoverEmphasis<u32> = HoverEmphasis::new();
        emphasis.set_hovered(Some(5));
        emphasis.set_hovered(Some(5));
        assert!(emphasis.is_hovered(&5));
    }

    #[test]
    fn fade_targets() {
        let mut fade = FadeAnimation::new();
        assert_eq!(fade.progress(), 0.0);

        fade.fade_in();
        assert!(fade.is_animating() || fade.progress() > 0.0);
    }
}
