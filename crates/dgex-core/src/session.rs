//! Session-driven page redirects.
//!
//! Two entry points, both run once per application lifetime:
//! - [`restore_session`] looks the session up at start.
//! - [`follow_session_changes`] reacts to every later change.
//!
//! Each change event reads the current page when it arrives, so a single
//! subscription stays correct across navigations.

use crate::backend::{Backend, Session, Subscription};
use crate::navigation::Navigator;
use crate::page::Page;
use crate::state::StateCell;
use futures::StreamExt;

/// Page to switch to after a session change, if any.
///
/// Present → dashboard. Absent while on the dashboard → home. Otherwise stay.
pub fn redirect_for(session_present: bool, current: Page) -> Option<Page> {
    match (session_present, current) {
        (true, _) => Some(Page::Dashboard),
        (false, Page::Dashboard) => Some(Page::Home),
        (false, _) => None,
    }
}

/// Applies one session change to the navigator.
pub fn apply_session_change(nav: &mut Navigator, session: Option<&Session>) {
    let present = session.is_some();
    nav.set_session_present(present);
    if let Some(page) = redirect_for(present, nav.current()) {
        nav.navigate(page);
    }
}

/// Start-up lookup. A found session moves to the dashboard.
///
/// A failed lookup or absent session leaves the page alone and is not an error.
pub async fn restore_session<C>(backend: &dyn Backend, nav: &C)
where
    C: StateCell<Navigator>,
{
    match backend.get_session().await {
        Ok(Some(_)) => {
            tracing::info!("existing session restored");
            nav.with_mut(|nav| {
                nav.set_session_present(true);
                nav.navigate(Page::Dashboard);
            });
        }
        Ok(None) => {
            tracing::debug!("no stored session");
        }
        Err(err) => {
            tracing::debug!(error = %err, "session lookup failed");
        }
    }
}

/// Drives redirects from a change subscription until the stream ends.
///
/// Dropping the returned future (scope teardown) drops the subscription,
/// which unsubscribes.
pub async fn follow_session_changes<C>(mut subscription: Subscription, nav: &C)
where
    C: StateCell<Navigator>,
{
    while let Some(session) = subscription.next().await {
        nav.with_mut(|nav| apply_session_change(nav, session.as_ref()));
    }
    tracing::debug!("session change stream closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::InMemoryBackend;
    use crate::error::BackendError;
    use crate::state::shared;

    #[test]
    fn test_redirect_rules() {
        for page in Page::ALL {
            assert_eq!(redirect_for(true, page), Some(Page::Dashboard));
        }
        assert_eq!(redirect_for(false, Page::Dashboard), Some(Page::Home));
        assert_eq!(redirect_for(false, Page::Books), None);
        assert_eq!(redirect_for(false, Page::Auth), None);
    }

    #[tokio::test]
    async fn test_restore_found_session() {
        let backend = InMemoryBackend::with_session(Session::with_token("t"));
        let nav = shared(Navigator::new());

        restore_session(&backend, &nav).await;
        assert_eq!(nav.snapshot().current(), Page::Dashboard);
        assert!(nav.snapshot().session_present());
    }

    #[tokio::test]
    async fn test_restore_failure_is_silent() {
        let backend = InMemoryBackend::new();
        backend.fail_next(BackendError::Network("offline".into()));
        let nav = shared(Navigator::starting_at(Page::Books));

        restore_session(&backend, &nav).await;
        assert_eq!(nav.snapshot().current(), Page::Books);
        assert!(!nav.snapshot().session_present());
    }

    #[tokio::test]
    async fn test_follow_reads_page_at_event_time() {
        let backend = InMemoryBackend::new();
        let nav = shared(Navigator::new());
        let subscription = backend.on_session_change();

        backend.set_session(Some(Session::with_token("t")));
        backend.set_session(None);
        backend.close_listeners();

        // Events queued before the loop runs still see the live page
        nav.with_mut(|n| n.navigate(Page::Community));
        follow_session_changes(subscription, &nav).await;

        // Sign-in moved to dashboard, sign-out then moved home
        assert_eq!(nav.snapshot().current(), Page::Home);
        assert!(!nav.snapshot().session_present());
    }

    #[tokio::test]
    async fn test_sign_out_elsewhere_stays_put() {
        let backend = InMemoryBackend::new();
        let nav = shared(Navigator::starting_at(Page::Training));
        let subscription = backend.on_session_change();

        backend.set_session(None);
        backend.close_listeners();
        follow_session_changes(subscription, &nav).await;

        assert_eq!(nav.snapshot().current(), Page::Training);
    }
}
