//! Navigation controller: which page is current.
//!
//! `navigate` is total. There is no history stack and no URL sync; the only
//! automatic transitions come from [`session`](crate::session).

use crate::page::Page;

/// Current page plus the session presence the dashboard gate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: Page,
    session_present: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on a given page (tests and deep links).
    pub fn starting_at(page: Page) -> Self {
        Self {
            current: page,
            session_present: false,
        }
    }

    /// The page last passed to [`navigate`](Self::navigate).
    pub fn current(&self) -> Page {
        self.current
    }

    /// Unconditionally replaces the current page.
    pub fn navigate(&mut self, page: Page) {
        if page != self.current {
            tracing::debug!(from = %self.current, to = %page, "navigate");
        }
        self.current = page;
    }

    /// Whether the session store last reported a session.
    pub fn session_present(&self) -> bool {
        self.session_present
    }

    pub(crate) fn set_session_present(&mut self, present: bool) {
        self.session_present = present;
    }

    /// Page that should actually be mounted.
    ///
    /// The dashboard is only rendered while a session is known; until then
    /// the auth view stands in for it.
    pub fn visible_page(&self) -> Page {
        match self.current {
            Page::Dashboard if !self.session_present => Page::Auth,
            page => page,
        }
    }
}
