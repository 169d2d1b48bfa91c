//! In-memory backend used by tests and offline previews.

use super::{
    Backend, Credentials, Provider, Session, SessionListeners, SessionUser, SignUpOutcome,
    Subscription,
};
use crate::config::DUPLICATE_ENTRY_CODE;
use crate::error::BackendError;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

/// A call observed by [`InMemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    GetSession,
    SignIn { email: String },
    SignUp { email: String },
    SignInWithProvider(Provider),
    SignOut,
    InsertRecord { collection: String },
}

/// Holds the next backend request open until released.
pub struct RequestGate {
    sender: oneshot::Sender<()>,
}

impl RequestGate {
    /// Lets the held request continue.
    pub fn release(self) {
        // The receiver is gone only if the request future was dropped
        let _ = self.sender.send(());
    }
}

/// Call-counting backend that keeps accounts, records and the session in memory.
///
/// Behaves like the hosted service for the parts the site relies on:
/// - records in any collection are unique by their `email` field (code 23505)
/// - sign-in requires a previously signed-up account
/// - session changes are broadcast to subscribers
///
/// Failures can be scripted with [`fail_next`](Self::fail_next), and a
/// request can be held in flight with [`hold_next_request`](Self::hold_next_request).
#[derive(Default)]
pub struct InMemoryBackend {
    session: RefCell<Option<Session>>,
    accounts: RefCell<HashMap<String, String>>,
    records: RefCell<Vec<(String, serde_json::Value)>>,
    calls: RefCell<Vec<BackendCall>>,
    failures: RefCell<VecDeque<BackendError>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    auto_confirm: Cell<bool>,
    token_counter: Cell<u64>,
    listeners: SessionListeners,
}

impl InMemoryBackend {
    /// Empty backend. Sign-ups require email confirmation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds a session (e.g. restored from storage).
    pub fn with_session(session: Session) -> Self {
        let backend = Self::new();
        *backend.session.borrow_mut() = Some(session);
        backend
    }

    /// When enabled, sign-up issues a session immediately instead of sending a confirmation.
    pub fn set_auto_confirm(&self, enabled: bool) {
        self.auto_confirm.set(enabled);
    }

    /// Registers an account that can sign in.
    pub fn add_account(&self, email: &str, password: &str) {
        self.accounts
            .borrow_mut()
            .insert(email.to_string(), password.to_string());
    }

    /// Makes the next call fail with `err` (queued, one per call).
    pub fn fail_next(&self, err: BackendError) {
        self.failures.borrow_mut().push_back(err);
    }

    /// Holds the next call open until the returned gate is released.
    pub fn hold_next_request(&self) -> RequestGate {
        let (sender, receiver) = oneshot::channel();
        *self.gate.borrow_mut() = Some(receiver);
        RequestGate { sender }
    }

    /// Replaces the session as if it changed outside the site, notifying subscribers.
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        self.listeners.broadcast(session);
    }

    /// Ends every subscriber stream.
    pub fn close_listeners(&self) {
        self.listeners.close_all();
    }

    /// Subscribers that have not unsubscribed.
    pub fn live_subscribers(&self) -> usize {
        self.listeners.live_count()
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(c)).count()
    }

    pub fn insert_count(&self) -> usize {
        self.count_calls(|c| matches!(c, BackendCall::InsertRecord { .. }))
    }

    pub fn sign_up_count(&self) -> usize {
        self.count_calls(|c| matches!(c, BackendCall::SignUp { .. }))
    }

    pub fn sign_in_count(&self) -> usize {
        self.count_calls(|c| matches!(c, BackendCall::SignIn { .. }))
    }

    /// Records stored in `collection`.
    pub fn records(&self, collection: &str) -> Vec<serde_json::Value> {
        self.records
            .borrow()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, r)| r.clone())
            .collect()
    }

    /// Current session, without recording a call.
    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Records the call, waits on a held gate, then pops a scripted failure.
    async fn enter(&self, call: BackendCall) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(call);

        let gate = self.gate.borrow_mut().take();
        if let Some(receiver) = gate {
            // A dropped gate releases the request as well
            let _ = receiver.await;
        }

        match self.failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn issue_session(&self, email: &str) -> Session {
        let n = self.token_counter.get() + 1;
        self.token_counter.set(n);
        Session {
            access_token: format!("memory-token-{}", n),
            refresh_token: None,
            expires_at: None,
            user: Some(SessionUser {
                id: format!("memory-user-{}", n),
                email: Some(email.to_string()),
            }),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for InMemoryBackend {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        self.enter(BackendCall::GetSession).await?;
        Ok(self.session.borrow().clone())
    }

    fn on_session_change(&self) -> Subscription {
        self.listeners.subscribe()
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        self.enter(BackendCall::SignIn {
            email: credentials.email.clone(),
        })
        .await?;

        let known = self
            .accounts
            .borrow()
            .get(&credentials.email)
            .is_some_and(|p| *p == credentials.password);
        if !known {
            return Err(BackendError::service(
                Some("invalid_credentials"),
                "Invalid login credentials",
            ));
        }

        let session = self.issue_session(&credentials.email);
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, BackendError> {
        self.enter(BackendCall::SignUp {
            email: credentials.email.clone(),
        })
        .await?;

        if self.accounts.borrow().contains_key(&credentials.email) {
            return Err(BackendError::service(
                Some("user_already_exists"),
                "User already registered",
            ));
        }
        self.add_account(&credentials.email, &credentials.password);

        if self.auto_confirm.get() {
            let session = self.issue_session(&credentials.email);
            self.set_session(Some(session.clone()));
            Ok(SignUpOutcome::SignedIn(session))
        } else {
            Ok(SignUpOutcome::ConfirmationSent)
        }
    }

    async fn sign_in_with_provider(&self, provider: Provider) -> Result<(), BackendError> {
        self.enter(BackendCall::SignInWithProvider(provider)).await
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.enter(BackendCall::SignOut).await?;
        self.set_session(None);
        Ok(())
    }

    async fn insert_record(
        &self,
        collection: &str,
        record: serde_json::Value,
    ) -> Result<(), BackendError> {
        self.enter(BackendCall::InsertRecord {
            collection: collection.to_string(),
        })
        .await?;

        if let Some(email) = record.get("email").and_then(|e| e.as_str()) {
            let duplicate = self.records.borrow().iter().any(|(c, r)| {
                c == collection && r.get("email").and_then(|e| e.as_str()) == Some(email)
            });
            if duplicate {
                return Err(BackendError::service(
                    Some(DUPLICATE_ENTRY_CODE),
                    format!(
                        "duplicate key value violates unique constraint \"{}_email_key\"",
                        collection
                    ),
                ));
            }
        }

        self.records
            .borrow_mut()
            .push((collection.to_string(), record));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_enforces_unique_email() {
        let backend = InMemoryBackend::new();
        backend
            .insert_record("people", json!({"email": "a@b.co"}))
            .await
            .unwrap();

        let err = backend
            .insert_record("people", json!({"email": "a@b.co"}))
            .await
            .unwrap_err();
        assert!(err.is_duplicate_entry());

        // Other collections are independent
        backend
            .insert_record("others", json!({"email": "a@b.co"}))
            .await
            .unwrap();
        assert_eq!(backend.records("people").len(), 1);
        assert_eq!(backend.insert_count(), 3);
    }

    #[tokio::test]
    async fn test_sign_in_requires_account() {
        let backend = InMemoryBackend::new();
        let creds = Credentials::new("ana@example.com", "secret");
        assert!(backend.sign_in(&creds).await.is_err());

        backend.add_account("ana@example.com", "secret");
        let session = backend.sign_in(&creds).await.unwrap();
        assert_eq!(backend.current_session(), Some(session));
        assert_eq!(backend.sign_in_count(), 2);
    }

    #[tokio::test]
    async fn test_sign_out_notifies_subscribers() {
        let backend = InMemoryBackend::with_session(Session::with_token("t"));
        let mut sub = backend.on_session_change();

        backend.sign_out().await.unwrap();
        backend.close_listeners();

        assert_eq!(sub.next().await, Some(None));
        assert_eq!(sub.next().await, None);
        assert_eq!(backend.current_session(), None);
    }

    #[tokio::test]
    async fn test_scripted_failure_applies_once() {
        let backend = InMemoryBackend::new();
        backend.fail_next(BackendError::Network("offline".into()));

        assert!(backend.get_session().await.is_err());
        assert_eq!(backend.get_session().await, Ok(None));
        assert_eq!(backend.calls(), vec![BackendCall::GetSession; 2]);
    }

    #[tokio::test]
    async fn test_sign_up_outcomes() {
        let backend = InMemoryBackend::new();
        let outcome = backend
            .sign_up(&Credentials::new("a@b.co", "pw"))
            .await
            .unwrap();
        assert_eq!(outcome, SignUpOutcome::ConfirmationSent);

        backend.set_auto_confirm(true);
        let outcome = backend
            .sign_up(&Credentials::new("c@d.co", "pw"))
            .await
            .unwrap();
        assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));

        let dup = backend.sign_up(&Credentials::new("a@b.co", "pw")).await;
        assert!(dup.is_err());
    }
}
