//! Cursor follower state
//!
//! Smooths the raw pointer position toward a rendered marker position with
//! exponential decay, one step per animation frame. The loop arms itself on
//! the first pointer motion and stays armed until teardown; pointer samples
//! between frames overwrite each other (last write wins), so the marker is
//! rendered at display rate rather than input rate.

use iced::Point;

/// Fraction of the remaining distance covered per animation tick
pub const DECAY: f32 = 0.18;

/// Marker ring radius while idle, in logical pixels
pub const RING_RADIUS: f32 = 10.0;

/// Marker ring radius while over an interactive element
pub const RING_RADIUS_ACTIVE: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No pointer motion seen yet; no frame work is scheduled.
    Idle,
    /// Loop armed; re-arms itself every tick until teardown.
    Animating,
    /// Torn down; every input is ignored from here on.
    TornDown,
}

/// Pointer follower, generic over the interactive-element key
///
/// The follower owns exactly one conceptual loop handle: arming happens at
/// most once (first motion), and [`PointerFollower::teardown`] releases it
/// exactly once no matter how often it is called.
#[derive(Debug)]
pub struct PointerFollower<K: Copy + Eq> {
    /// Latest raw pointer position
    target: Point,
    /// Smoothed position actually drawn
    rendered: Point,
    decay: f32,
    phase: Phase,
    /// Interactive element currently under the pointer
    hovered: Option<K>,
}

impl<K: Copy + Eq> Default for PointerFollower<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> PointerFollower<K> {
    pub fn new() -> Self {
        Self::with_decay(DECAY)
    }

    /// Create a follower with a custom smoothing constant in (0, 1)
    pub fn with_decay(decay: f32) -> Self {
        Self {
            target: Point::ORIGIN,
            rendered: Point::ORIGIN,
            decay,
            phase: Phase::Idle,
            hovered: None,
        }
    }

    /// Record a raw pointer position; returns true when this motion armed
    /// the animation loop (i.e. the very first motion).
    ///
    /// Every call overwrites the previous target unconditionally.
    pub fn pointer_moved(&mut self, position: Point) -> bool {
        match self.phase {
            Phase::TornDown => false,
            Phase::Animating => {
                self.target = position;
                false
            }
            Phase::Idle => {
                self.target = position;
                self.phase = Phase::Animating;
                true
            }
        }
    }

    /// Advance the rendered position one smoothing step toward the target.
    ///
    /// Each step covers `decay` of the remaining distance, so the distance
    /// to the target shrinks geometrically and never increases.
    pub fn tick(&mut self) {
        if self.phase != Phase::Animating {
            return;
        }
        self.rendered.x += (self.target.x - self.rendered.x) * self.decay;
        self.rendered.y += (self.target.y - self.rendered.y) * self.decay;
    }

    /// Pointer entered an interactive element
    pub fn enter(&mut self, key: K) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.hovered = Some(key);
    }

    /// Pointer left an interactive element.
    ///
    /// Ignored unless `key` is still the current element, so a direct
    /// handoff to an adjacent interactive element (enter delivered before
    /// the stale leave) never drops the hover state in between.
    pub fn leave(&mut self, key: K) {
        if self.phase == Phase::TornDown {
            return;
        }
        if self.hovered == Some(key) {
            self.hovered = None;
        }
    }

    /// Clear the hover state unconditionally (pointer left the window)
    pub fn clear_hover(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.hovered = None;
    }

    pub fn is_over_interactive(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// Whether the animation loop has been armed (and not torn down)
    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Animating
    }

    pub fn rendered(&self) -> Point {
        self.rendered
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Release the loop and all pointer subscriptions.
    ///
    /// Idempotent: later calls (and any already-queued motion, tick, or
    /// hover notification) are no-ops.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.phase = Phase::TornDown;
        self.hovered = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Point, b: Point) -> f32 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn arms_on_first_motion_only() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        assert!(!follower.is_armed());

        assert!(follower.pointer_moved(Point::new(10.0, 10.0)));
        assert!(follower.is_armed());

        // Later motion keeps the existing loop
        assert!(!follower.pointer_moved(Point::new(20.0, 20.0)));
        assert!(follower.is_armed());
    }

    #[test]
    fn single_step_covers_decay_fraction() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.pointer_moved(Point::new(100.0, 100.0));
        follower.tick();

        assert!((follower.rendered().x - 18.0).abs() < 1e-3);
        assert!((follower.rendered().y - 18.0).abs() < 1e-3);
    }

    #[test]
    fn distance_decays_geometrically() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        let target = Point::new(100.0, 100.0);
        follower.pointer_moved(target);

        let mut remaining = distance(Point::ORIGIN, target);
        for _ in 0..20 {
            follower.tick();
            let next = distance(follower.rendered(), target);
            // Exactly (1 - decay) of the previous distance, and never more
            assert!((next - remaining * (1.0 - DECAY)).abs() < 1e-3);
            assert!(next <= remaining);
            remaining = next;
        }
    }

    #[test]
    fn converges_below_one_unit() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        let target = Point::new(100.0, 100.0);
        follower.pointer_moved(target);

        // 141.4 * 0.82^25 < 1
        for _ in 0..25 {
            follower.tick();
        }
        assert!(distance(follower.rendered(), target) < 1.0);
    }

    #[test]
    fn stationary_target_is_a_fixpoint() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.pointer_moved(Point::new(50.0, 0.0));
        for _ in 0..200 {
            follower.tick();
        }
        let settled = follower.rendered();
        follower.tick();
        assert!(distance(follower.rendered(), settled) < 1e-3);
    }

    #[test]
    fn intermediate_positions_are_overwritten() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.pointer_moved(Point::new(10.0, 0.0));
        follower.pointer_moved(Point::new(500.0, 0.0));
        follower.pointer_moved(Point::new(40.0, 0.0));
        follower.tick();

        // Only the last sample before the tick matters
        assert!((follower.rendered().x - 40.0 * DECAY).abs() < 1e-3);
    }

    #[test]
    fn hover_handoff_never_drops() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.enter(1);
        assert!(follower.is_over_interactive());

        // Adjacent element: enter arrives before the stale leave
        follower.enter(2);
        follower.leave(1);
        assert!(follower.is_over_interactive());
        assert_eq!(follower.hovered(), Some(2));

        follower.leave(2);
        assert!(!follower.is_over_interactive());
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.enter(7);
        follower.leave(3);
        assert_eq!(follower.hovered(), Some(7));
    }

    #[test]
    fn teardown_is_idempotent_and_final() {
        let mut follower: PointerFollower<u8> = PointerFollower::new();
        follower.pointer_moved(Point::new(100.0, 0.0));
        follower.tick();
        let frozen = follower.rendered();

        follower.teardown();
        follower.teardown();
        assert!(follower.is_torn_down());

        // Queued notifications after teardown must not mutate anything
        follower.pointer_moved(Point::new(900.0, 900.0));
        follower.tick();
        follower.enter(1);
        assert_eq!(follower.rendered(), frozen);
        assert!(!follower.is_armed());
        assert!(!follower.is_over_interactive());
    }
}
