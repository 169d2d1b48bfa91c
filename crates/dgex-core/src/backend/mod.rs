//! Capability contract for the hosted auth/database service.
//!
//! Everything the site persists or authenticates goes through [`Backend`].
//! The app binds it to the hosted service; tests bind it to
//! [`InMemoryBackend`].
//!
//! # Implementations
//!
//! - [`InMemoryBackend`] - Call-counting double with scripted failures
//! - `SupabaseBackend` - HTTP client for the hosted service (in app crate)
//! - `UnconfiguredBackend` - Fails every call with `NotConfigured` (in app crate)

mod listeners;
mod memory;

pub use listeners::{SessionListeners, Subscription};
pub use memory::{BackendCall, InMemoryBackend, RequestGate};

use crate::error::BackendError;
use serde::{Deserialize, Serialize};

/// Proof of authentication issued by the service.
///
/// The site only cares whether one exists; the fields are for the client
/// that owns it (bearer token on later calls, persistence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which the token is no longer valid
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    /// Session with only a token (tests and minimal providers).
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
            user: None,
        }
    }

    /// True when `expires_at` is known and not after `now_secs`.
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

/// The authenticated user, as far as the service tells us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Email + password pair for sign-in and sign-up.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Third-party identity providers offered on the auth view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
}

impl Provider {
    /// Provider identifier understood by the service.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }
}

/// Result of a sign-up call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The address must be confirmed before a session is issued
    ConfirmationSent,
    /// The service signed the user in immediately
    SignedIn(Session),
}

/// Hosted auth + data capability.
///
/// Every call is a single request; implementations never retry.
#[async_trait::async_trait(?Send)]
pub trait Backend {
    /// Looks up the current session, if any.
    async fn get_session(&self) -> Result<Option<Session>, BackendError>;

    /// Registers for session changes. Dropping the subscription unsubscribes.
    fn on_session_change(&self) -> Subscription;

    /// Signs in with email and password.
    #[must_use = "Sign-in failures should be reported to the user"]
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError>;

    /// Creates an account with email and password.
    #[must_use = "Sign-up failures should be reported to the user"]
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, BackendError>;

    /// Starts a third-party sign-in. On the web this leaves the page.
    async fn sign_in_with_provider(&self, provider: Provider) -> Result<(), BackendError>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Inserts exactly one record into `collection`.
    #[must_use = "Insert failures should be reported to the user"]
    async fn insert_record(
        &self,
        collection: &str,
        record: serde_json::Value,
    ) -> Result<(), BackendError>;
}
