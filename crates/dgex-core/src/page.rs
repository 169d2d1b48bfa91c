//! The closed set of top-level views.

use std::fmt;

/// One of the mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Training,
    Books,
    Community,
    Investment,
    Auth,
    Dashboard,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Training,
        Page::Books,
        Page::Community,
        Page::Investment,
        Page::Auth,
        Page::Dashboard,
    ];

    /// Stable lowercase identifier, used in logs.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Training => "training",
            Page::Books => "books",
            Page::Community => "community",
            Page::Investment => "investment",
            Page::Auth => "auth",
            Page::Dashboard => "dashboard",
        }
    }

    /// Maps a navbar label to its page. Unknown labels go home.
    pub fn from_nav_label(label: &str) -> Page {
        match label {
            "Formación" => Page::Training,
            "Libros" => Page::Books,
            "Comunidad" => Page::Community,
            "Inversión" => Page::Investment,
            "Entrar" => Page::Auth,
            _ => Page::Home,
        }
    }
}

/// Navbar menu labels, in display order.
pub const NAV_LABELS: [&str; 4] = ["Formación", "Libros", "Comunidad", "Inversión"];

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
