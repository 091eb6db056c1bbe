//! Static page content.
//!
//! Pages are lists of `ContentSection`s. The renderer matches on every
//! variant, so adding a variant means teaching each front-end to draw it.

pub mod home;
pub mod pages;

pub use home::{home_page, BannerSlide, Slideshow, SLIDES, SLIDE_INTERVAL};
pub use pages::{footer, page, DISCORD_URL};

use serde::Serialize;

use crate::routes::Route;
use crate::utils::strip_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
    pub description: Option<&'static str>,
}

impl Link {
    pub const fn new(label: &'static str, url: &'static str) -> Self {
        Self {
            label,
            url,
            description: None,
        }
    }

    pub const fn described(
        label: &'static str,
        url: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            label,
            url,
            description: Some(description),
        }
    }

    /// Site-relative links navigate inside the app instead of the browser.
    pub fn internal_route(&self) -> Option<Route> {
        if self.url.starts_with('/') {
            Route::lookup(self.url)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Anniversary,
    Milestone,
    System,
    Other,
}

impl TimelineKind {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineKind::Anniversary => "Jubiläum",
            TimelineKind::Milestone => "Meilenstein",
            TimelineKind::System => "System",
            TimelineKind::Other => "Event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: TimelineKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentSection {
    Heading { title: &'static str, subtitle: Option<&'static str> },
    Paragraph(&'static str),
    Links { title: &'static str, links: Vec<Link> },
    Timeline(Vec<TimelineEntry>),
    Stats(Vec<Stat>),
    Bullets { title: &'static str, items: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<ContentSection>,
}

impl Page {
    /// Every link on the page, in reading order.
    pub fn links(&self) -> Vec<Link> {
        self.sections
            .iter()
            .filter_map(|section| match section {
                ContentSection::Links { links, .. } => Some(links.iter().copied()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Plain-text headline, with markup from the source stripped.
    pub fn plain_title(&self) -> String {
        strip_html(self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::is_safe_url;

    #[test]
    fn test_timeline_labels() {
        assert_eq!(TimelineKind::Anniversary.label(), "Jubiläum");
        assert_eq!(TimelineKind::Milestone.label(), "Meilenstein");
        assert_eq!(TimelineKind::Other.label(), "Event");
    }

    #[test]
    fn test_all_links_are_safe() {
        for route in Route::ALL {
            for link in page(route).links() {
                assert!(is_safe_url(link.url), "{} on {}", link.url, route);
            }
        }
        for link in footer().links() {
            assert!(is_safe_url(link.url), "{}", link.url);
        }
    }

    #[test]
    fn test_internal_links_resolve() {
        let legal: Vec<Option<Route>> = footer()
            .links()
            .iter()
            .filter(|l| l.url.starts_with('/'))
            .map(Link::internal_route)
            .collect();
        assert_eq!(legal, vec![Some(Route::Datenschutz), Some(Route::Impressum)]);
        assert_eq!(Link::new("Wiki", "https://wiki.tacticalteam.de/").internal_route(), None);
    }

    #[test]
    fn test_section_serializes_tagged() {
        let json = serde_json::to_value(ContentSection::Paragraph("Hallo")).unwrap();
        assert_eq!(json["type"], "paragraph");
    }
}
