//! Route table for the site's pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title shared by every page.
pub const BASE_TITLE: &str = "Tactical Training Team";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Aufstellung,
    Chronik,
    Medien,
    Mitmachen,
    Impressum,
    Datenschutz,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Aufstellung,
        Route::Chronik,
        Route::Medien,
        Route::Mitmachen,
        Route::Impressum,
        Route::Datenschutz,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Aufstellung => "/aufstellung",
            Route::Chronik => "/chronik",
            Route::Medien => "/medien",
            Route::Mitmachen => "/mitmachen",
            Route::Impressum => "/impressum",
            Route::Datenschutz => "/datenschutz",
        }
    }

    /// Exact lookup against the route table. Leading/trailing slashes and
    /// any query string are ignored.
    pub fn lookup(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path.trim_matches('/').to_ascii_lowercase();
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == segment)
    }

    /// Lookup with the catch-all: anything unknown lands on `Home`.
    pub fn from_path(path: &str) -> Route {
        Self::lookup(path).unwrap_or_default()
    }

    /// Short label for tab bars.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Aufstellung => "Aufstellung",
            Route::Chronik => "Chronik",
            Route::Medien => "Medien",
            Route::Mitmachen => "Mitmachen",
            Route::Impressum => "Impressum",
            Route::Datenschutz => "Datenschutz",
        }
    }

    /// Document title, e.g. "Chronik - Tactical Training Team".
    pub fn title(&self) -> String {
        match self {
            Route::Home => BASE_TITLE.to_string(),
            other => format!("{} - {}", other.label(), BASE_TITLE),
        }
    }

    pub fn next(&self) -> Route {
        let idx = self.index();
        Route::ALL[(idx + 1) % Route::ALL.len()]
    }

    pub fn prev(&self) -> Route {
        let idx = self.index();
        Route::ALL[(idx + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    pub fn index(&self) -> usize {
        Route::ALL.iter().position(|r| r == self).unwrap_or(0)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/chronik"), Route::Chronik);
        assert_eq!(Route::from_path("impressum/"), Route::Impressum);
        assert_eq!(Route::from_path("/Medien?tab=live"), Route::Medien);
    }

    #[test]
    fn test_catch_all_goes_home() {
        assert_eq!(Route::lookup("/admin"), None);
        assert_eq!(Route::from_path("/admin"), Route::Home);
        assert_eq!(Route::from_path("/chronik/2014"), Route::Home);
    }

    #[test]
    fn test_paths_round_trip_through_lookup() {
        for route in Route::ALL {
            assert_eq!(Route::lookup(route.path()), Some(route));
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Home.title(), "Tactical Training Team");
        assert_eq!(Route::Impressum.title(), "Impressum - Tactical Training Team");
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Route::Datenschutz.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Datenschutz);
        assert_eq!(Route::Home.next(), Route::Aufstellung);
    }
}
