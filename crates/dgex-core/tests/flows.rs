//! End-to-end flows against the in-memory backend.
//!
//! These tests wire navigation, session redirects and both forms together the
//! way the app does, without any UI runtime:
//! 1. Session: start-up lookup, change subscription, redirects
//! 2. Forms: validation, single request, result mapping, field reset
//! 3. Effects: counter animation
//!
//! Run with: `cargo test -p dgex-core --test flows`

use dgex_core::auth::{self, AuthFlow, AuthMode, AuthOutcome, CONFIRMATION_MESSAGE};
use dgex_core::backend::{BackendCall, Credentials, Session};
use dgex_core::community::{
    CommunityFlow, CommunitySummary, CommunityValues, EducationLevel, Interest,
};
use dgex_core::config::COMMUNITY_COLLECTION;
use dgex_core::effects::CounterAnimation;
use dgex_core::form::{submit, FormState, FormStatus};
use dgex_core::session::{follow_session_changes, restore_session};
use dgex_core::state::{shared, StateCell};
use dgex_core::{Backend, InMemoryBackend, Navigator, Page};
use tokio::task::yield_now;

// ============================================================================
// Fixtures
// ============================================================================

fn community_values() -> CommunityValues {
    CommunityValues {
        full_name: "Ana María Pérez".into(),
        whatsapp: "+57 300 123 4567".into(),
        email: "ana@example.com".into(),
        country: "Colombia".into(),
        level: Some(EducationLevel::Professional),
        interests: vec![Interest::AlgorithmicTrading, Interest::Investing],
    }
}

// ============================================================================
// Navigation + session
// ============================================================================

#[test]
fn test_current_page_is_last_navigated() {
    let mut nav = Navigator::new();
    let mut expected = Page::Home;
    // Deterministic pseudo-random walk over all pages
    let mut seed = 7usize;
    for _ in 0..200 {
        seed = (seed * 31 + 11) % 97;
        expected = Page::ALL[seed % Page::ALL.len()];
        nav.navigate(expected);
    }
    assert_eq!(nav.current(), expected);
}

#[tokio::test]
async fn test_restored_session_opens_dashboard() {
    let backend = InMemoryBackend::with_session(Session::with_token("stored"));
    let nav = shared(Navigator::new());

    restore_session(&backend, &nav).await;

    let nav = nav.snapshot();
    assert_eq!(nav.current(), Page::Dashboard);
    assert_eq!(nav.visible_page(), Page::Dashboard);
}

#[tokio::test]
async fn test_session_events_redirect_within_one_event() {
    let backend = InMemoryBackend::new();
    let nav = shared(Navigator::starting_at(Page::Books));
    let subscription = backend.on_session_change();

    let follower = follow_session_changes(subscription, &nav);
    let driver = async {
        backend.set_session(Some(Session::with_token("t")));
        yield_now().await;
        assert_eq!(nav.snapshot().current(), Page::Dashboard);

        backend.set_session(None);
        yield_now().await;
        assert_eq!(nav.snapshot().current(), Page::Home);

        // Signed out away from the dashboard: no redirect
        nav.with_mut(|n| n.navigate(Page::Investment));
        backend.set_session(None);
        yield_now().await;
        assert_eq!(nav.snapshot().current(), Page::Investment);

        backend.close_listeners();
    };
    futures::join!(follower, driver);
}

#[tokio::test]
async fn test_sign_in_then_sign_out_round_trip() {
    let backend = InMemoryBackend::new();
    backend.add_account("ana@example.com", "secret");
    let nav = shared(Navigator::new());
    let form = shared(FormState::<AuthFlow>::new());
    let subscription = backend.on_session_change();

    nav.with_mut(|n| n.navigate(Page::Auth));
    form.with_mut(|f| {
        f.values.email = "ana@example.com".into();
        f.values.password = "secret".into();
    });

    let follower = follow_session_changes(subscription, &nav);
    let driver = async {
        assert!(submit(&form, &backend).await);
        yield_now().await;
        assert_eq!(
            form.snapshot().status(),
            &FormStatus::Success(AuthOutcome::SignedIn)
        );
        assert_eq!(nav.snapshot().visible_page(), Page::Dashboard);

        backend.sign_out().await.unwrap();
        yield_now().await;
        assert_eq!(nav.snapshot().current(), Page::Home);
        assert!(!nav.snapshot().session_present());

        backend.close_listeners();
    };
    futures::join!(follower, driver);
}

#[test]
fn test_dashboard_without_session_shows_auth() {
    let mut nav = Navigator::new();
    nav.navigate(Page::Dashboard);
    assert_eq!(nav.visible_page(), Page::Auth);
}

#[tokio::test]
async fn test_dropped_follower_unsubscribes() {
    let backend = InMemoryBackend::new();
    let nav = shared(Navigator::new());
    let subscription = backend.on_session_change();
    assert_eq!(backend.live_subscribers(), 1);

    drop(follow_session_changes(subscription, &nav));
    assert_eq!(backend.live_subscribers(), 0);
}

// ============================================================================
// Community form
// ============================================================================

#[tokio::test]
async fn test_community_missing_level_issues_no_insert() {
    let backend = InMemoryBackend::new();
    let form = shared(FormState::<CommunityFlow>::new());
    form.with_mut(|f| {
        f.values = community_values();
        f.values.level = None;
    });

    assert!(!submit(&form, &backend).await);
    assert_eq!(
        form.snapshot().status().error_message(),
        Some("Por favor selecciona tu nivel académico.")
    );
    assert_eq!(backend.insert_count(), 0);
}

#[tokio::test]
async fn test_community_missing_interest_issues_no_insert() {
    let backend = InMemoryBackend::new();
    let form = shared(FormState::<CommunityFlow>::new());
    form.with_mut(|f| {
        f.values = community_values();
        f.values.interests.clear();
    });

    assert!(!submit(&form, &backend).await);
    assert_eq!(
        form.snapshot().status().error_message(),
        Some("Selecciona al menos una preferencia.")
    );
    assert_eq!(backend.insert_count(), 0);
}

#[tokio::test]
async fn test_community_success_resets_and_summarises() {
    let backend = InMemoryBackend::new();
    let form = shared(FormState::<CommunityFlow>::new());
    form.with_mut(|f| f.values = community_values());

    assert!(submit(&form, &backend).await);
    assert_eq!(backend.insert_count(), 1);

    let state = form.snapshot();
    assert_eq!(
        state.status(),
        &FormStatus::Success(CommunitySummary {
            first_name: "Ana".into(),
            interest: Interest::AlgorithmicTrading,
        })
    );
    assert_eq!(state.values, CommunityValues::default());
    assert!(!state.in_flight());

    let rows = backend.records(COMMUNITY_COLLECTION);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "ana@example.com");
    assert_eq!(rows[0]["nivel_alcanzado"], "Profesional");
    assert!(rows[0]["created_at"].as_str().is_some_and(|s| s.ends_with('Z')));

    // "Send another" returns to the empty form
    form.with_mut(|f| f.clear_status());
    assert_eq!(form.snapshot().status(), &FormStatus::Idle);
}

#[tokio::test]
async fn test_community_duplicate_email() {
    let backend = InMemoryBackend::new();
    let first = shared(FormState::<CommunityFlow>::new());
    first.with_mut(|f| f.values = community_values());
    submit(&first, &backend).await;

    // A fresh mount of the page with the same email
    let second = shared(FormState::<CommunityFlow>::new());
    second.with_mut(|f| f.values = community_values());
    assert!(submit(&second, &backend).await);

    let message = second
        .snapshot()
        .status()
        .error_message()
        .map(str::to_string)
        .unwrap_or_default();
    assert!(message.contains("ya está registrado"), "got {:?}", message);
    assert_eq!(backend.insert_count(), 2);
    assert_eq!(backend.records(COMMUNITY_COLLECTION).len(), 1);
}

#[tokio::test]
async fn test_double_submit_guard() {
    let backend = InMemoryBackend::new();
    let form = shared(FormState::<CommunityFlow>::new());
    form.with_mut(|f| f.values = community_values());
    let gate = backend.hold_next_request();

    let first = submit(&form, &backend);
    let second = async {
        assert!(form.snapshot().in_flight());
        let issued = submit(&form, &backend).await;
        gate.release();
        issued
    };
    let (first, second) = futures::join!(first, second);

    assert!(first);
    assert!(!second);
    assert_eq!(backend.insert_count(), 1);
    assert!(!form.snapshot().in_flight());
}

// ============================================================================
// Auth form
// ============================================================================

#[tokio::test]
async fn test_sign_up_clears_fields_without_navigation() {
    let backend = InMemoryBackend::new();
    let nav = shared(Navigator::starting_at(Page::Auth));
    let form = shared(FormState::<AuthFlow>::new());
    let subscription = backend.on_session_change();

    form.with_mut(|f| {
        auth::toggle_mode(f);
        f.values.email = "new@example.com".into();
        f.values.password = "secret".into();
    });

    let follower = follow_session_changes(subscription, &nav);
    let driver = async {
        assert!(submit(&form, &backend).await);
        yield_now().await;
        backend.close_listeners();
    };
    futures::join!(follower, driver);

    assert_eq!(backend.sign_up_count(), 1);
    assert_eq!(
        backend.calls(),
        vec![BackendCall::SignUp {
            email: "new@example.com".into()
        }]
    );

    let state = form.snapshot();
    assert_eq!(state.values.mode, AuthMode::SignUp);
    assert!(state.values.email.is_empty());
    assert!(state.values.password.is_empty());
    match state.status() {
        FormStatus::Success(outcome) => assert_eq!(outcome.banner(), Some(CONFIRMATION_MESSAGE)),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(nav.snapshot().current(), Page::Auth);
}

#[tokio::test]
async fn test_existing_account_sign_up_reports_service_message() {
    let backend = InMemoryBackend::new();
    backend
        .sign_up(&Credentials::new("ana@example.com", "secret"))
        .await
        .unwrap();

    let form = shared(FormState::<AuthFlow>::new());
    form.with_mut(|f| {
        f.values.mode = AuthMode::SignUp;
        f.values.email = "ana@example.com".into();
        f.values.password = "other".into();
    });
    submit(&form, &backend).await;

    assert_eq!(
        form.snapshot().status().error_message(),
        Some("User already registered")
    );
    assert_eq!(form.snapshot().values.email, "ana@example.com");
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_counter_animation_properties() {
    let mut counter = CounterAnimation::new(100, 1000);
    let mut values = Vec::new();
    let mut t = 0.0;
    loop {
        let frame = counter.sample(t);
        values.push(frame.value);
        if frame.done {
            break;
        }
        t += 16.0;
    }

    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&100));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}
