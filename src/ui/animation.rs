//! Animation system for the portfolio page
//!
//! Three small pieces drive every moving part of the page:
//!
//! - [`reveal`]: one-shot reveal-on-scroll latches with a 700 ms fade/slide
//! - [`follower`]: the exponentially smoothed cursor marker
//! - [`hover`]: O(1) hover emphasis for interactive elements

pub mod follower;
mod hover;
pub mod reveal;

pub use follower::PointerFollower;
pub use hover::{FadeAnimation, HoverEmphasis};
pub use reveal::{RevealAnimation, Revealer};
