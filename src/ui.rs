//! UI module for the portfolio page
//! Warm dark aesthetic with a rose accent
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Page-specific UI with Message handling
//! - **Animation** (`animation`): Reveal, follower, and hover state

pub mod animation;
pub mod components;
pub mod icons;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::{PageMetrics, Section};
