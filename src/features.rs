//! Feature modules - business logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod content;
pub mod settings;

pub use content::{ContactLink, SITE, SiteContent, Testimonial};
pub use settings::Settings;
