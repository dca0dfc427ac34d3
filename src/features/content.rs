//! Site content
//!
//! Every piece of copy, every link, and the showcase video in one typed
//! table. Views read from [`SITE`] instead of scattering string literals
//! through layout code.

/// A client quote shown in the feedback section
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// The embedded showcase piece; playback happens in the system browser
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseVideo {
    pub title: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

/// External contact targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactLink {
    Email,
    LinkedIn,
    GitHub,
}

impl ContactLink {
    pub const ALL: [ContactLink; 3] = [ContactLink::Email, ContactLink::LinkedIn, ContactLink::GitHub];

    pub fn label(&self) -> &'static str {
        match self {
            ContactLink::Email => "Email",
            ContactLink::LinkedIn => "LinkedIn",
            ContactLink::GitHub => "GitHub",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            ContactLink::Email => "mailto:you@example.com",
            ContactLink::LinkedIn => "https://www.linkedin.com/",
            ContactLink::GitHub => "https://github.com/",
        }
    }

    /// Email gets the filled CTA treatment, the rest are outlined
    pub fn is_primary(&self) -> bool {
        matches!(self, ContactLink::Email)
    }
}

/// All static copy and links for the page
#[derive(Debug)]
pub struct SiteContent {
    pub brand: &'static str,
    pub window_title: &'static str,

    pub hero_headline: &'static str,
    pub hero_headline_accent: &'static str,
    pub hero_tagline: &'static str,
    pub hero_primary_cta: &'static str,
    pub hero_email_cta: &'static str,

    pub header_cta: &'static str,

    pub work_title: &'static str,
    pub showcase: &'static [ShowcaseVideo],

    pub feedback_title: &'static str,
    pub testimonials: &'static [Testimonial],

    pub about_title: &'static str,
    pub about_body: &'static str,

    pub contact_title: &'static str,
    pub contact_pitch: &'static str,
    pub contact_hint: &'static str,

    pub footer_note: &'static str,
    pub back_to_top: &'static str,

    pub email_url: &'static str,
}

pub static SITE: SiteContent = SiteContent {
    brand: "M. aflah",
    window_title: "M. aflah - Video Editor",

    hero_headline: "I edit videos that",
    hero_headline_accent: "keep people watching.",
    hero_tagline: "Straight edits, clean sound, tight pacing. Real impact, no fluff.",
    hero_primary_cta: "See my work",
    hero_email_cta: "Email me",

    header_cta: "Get in touch",

    work_title: "Selected Work",
    showcase: &[ShowcaseVideo {
        title: "Showreel",
        summary: "A cut of recent client work. Opens on YouTube.",
        url: "https://www.youtube.com/watch?v=S841m3RpkFo",
    }],

    feedback_title: "Client Feedback",
    testimonials: &[
        Testimonial {
            name: "John Doe",
            role: "Marketing Manager",
            quote: "Clear comms and fast delivery. Strong sense of pacing.",
        },
        Testimonial {
            name: "Sarah Khan",
            role: "YouTube Creator",
            quote: "Retention jumped. Edits felt tight and professional.",
        },
        Testimonial {
            name: "Ali Reza",
            role: "Business Owner",
            quote: "Reliable and easy to work with.",
        },
    ],

    about_title: "About",
    about_body: "I'm M. aflah - video editor focused on story-first edits that keep viewers \
                 engaged and deliver the message cleanly. Tight pacing, clean audio, and an \
                 eye for retention.",

    contact_title: "Contact",
    contact_pitch: "Let's build something that performs.",
    contact_hint: "Share the goal, format, deadline, and any reference links.",

    footer_note: "\u{a9} 2026 \u{2022} M. aflah",
    back_to_top: "Back to top",

    email_url: "mailto:you@example.com",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_resolve() {
        for link in ContactLink::ALL {
            assert!(!link.label().is_empty());
            let url = link.url();
            assert!(url.starts_with("mailto:") || url.starts_with("https://"));
        }
    }

    #[test]
    fn site_table_is_complete() {
        assert_eq!(SITE.testimonials.len(), 3);
        assert_eq!(SITE.showcase.len(), 1);
        assert!(SITE.showcase[0].url.starts_with("https://"));
        assert!(SITE.email_url.starts_with("mailto:"));
    }
}
