//! Backend wiring for the app.
//!
//! [`connect`] picks the implementation once at start-up:
//!
//! - [`SupabaseBackend`] when both connection parameters resolve
//! - [`UnconfiguredBackend`] otherwise, so the site still renders and every
//!   form reports the problem instead of failing silently

mod supabase;

pub use supabase::{parse_error_body, parse_fragment, SupabaseBackend};

use dgex_core::backend::{
    Backend, Credentials, Provider, Session, SessionListeners, SignUpOutcome, Subscription,
};
use dgex_core::config::BackendConfig;
use dgex_core::{BackendError, ConfigError};
use dioxus::logger::tracing::{error, info, warn};
use std::rc::Rc;

/// Resolves the connection parameters.
///
/// Compile-time values win; on desktop the process environment is consulted
/// for whatever is still missing.
pub fn resolve_config() -> Result<BackendConfig, ConfigError> {
    let url = option_env!("DGEX_SUPABASE_URL").map(str::to_string);
    let anon_key = option_env!("DGEX_SUPABASE_ANON_KEY").map(str::to_string);

    #[cfg(not(target_arch = "wasm32"))]
    let (url, anon_key) = {
        use dgex_core::config::{ANON_KEY_ENV, URL_ENV};
        (
            url.or_else(|| std::env::var(URL_ENV).ok()),
            anon_key.or_else(|| std::env::var(ANON_KEY_ENV).ok()),
        )
    };

    BackendConfig::from_parts(url, anon_key)
}

/// Builds the backend the app runs against.
pub fn connect() -> Rc<dyn Backend> {
    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Backend not configured ({}); service calls are disabled", e);
            return Rc::new(UnconfiguredBackend::new());
        }
    };

    match SupabaseBackend::new(config) {
        Ok(backend) => {
            info!("Connected to {}", backend.config().url());
            Rc::new(backend)
        }
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            Rc::new(UnconfiguredBackend::new())
        }
    }
}

// ============================================================================
// Unconfigured fallback
// ============================================================================

/// Backend used when no connection parameters are available.
///
/// Never holds a session; every call fails with [`BackendError::NotConfigured`].
#[derive(Default)]
pub struct UnconfiguredBackend {
    listeners: SessionListeners,
}

impl UnconfiguredBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for UnconfiguredBackend {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        Err(BackendError::NotConfigured)
    }

    fn on_session_change(&self) -> Subscription {
        self.listeners.subscribe()
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, BackendError> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<SignUpOutcome, BackendError> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_in_with_provider(&self, _provider: Provider) -> Result<(), BackendError> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        Err(BackendError::NotConfigured)
    }

    async fn insert_record(
        &self,
        _collection: &str,
        _record: serde_json::Value,
    ) -> Result<(), BackendError> {
        Err(BackendError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgex_core::community::CommunityFlow;
    use dgex_core::form::{submit, FormState};
    use dgex_core::state::{shared, StateCell};

    #[tokio::test]
    async fn test_unconfigured_backend_rejects_everything() {
        let backend = UnconfiguredBackend::new();
        assert_eq!(backend.get_session().await, Err(BackendError::NotConfigured));
        assert_eq!(
            backend.sign_in(&Credentials::new("a@b.co", "x")).await,
            Err(BackendError::NotConfigured)
        );
        assert_eq!(backend.sign_out().await, Err(BackendError::NotConfigured));
        assert_eq!(
            backend
                .insert_record("t", serde_json::json!({}))
                .await,
            Err(BackendError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn test_unconfigured_backend_surfaces_form_error() {
        use dgex_core::community::{CommunityValues, EducationLevel, Interest};

        let backend = UnconfiguredBackend::new();
        let form = shared(FormState::<CommunityFlow>::new());
        form.with_mut(|f| {
            f.values = CommunityValues {
                full_name: "Ana Pérez".into(),
                whatsapp: "+57 300".into(),
                email: "ana@example.com".into(),
                country: "Colombia".into(),
                level: Some(EducationLevel::Technician),
                interests: vec![Interest::Investing],
            };
        });

        assert!(submit(&form, &backend).await);
        let state = form.snapshot();
        assert!(state.status().is_error());
        assert!(!state.in_flight());
    }
}
