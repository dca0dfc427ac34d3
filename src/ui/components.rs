//! UI Components module - page-specific composite components
//!
//! Components combine widgets with application state and are the only UI
//! layer that imports from `crate::app`.

pub mod about;
pub mod contact;
pub mod cursor_overlay;
pub mod footer;
pub mod header;
pub mod hero;
pub mod nav_overlay;
pub mod showcase;
pub mod testimonials;
