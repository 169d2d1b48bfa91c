//! Hosted service client: GoTrue auth and PostgREST inserts over `reqwest`.
//!
//! reqwest works on both native and WASM platforms:
//! - Native: hyper with rustls-tls
//! - WASM: the browser `fetch()` API
//!
//! Every request is bounded by [`REQUEST_TIMEOUT_SECS`] and issued exactly
//! once. On the web the session is kept in `localStorage`, and the fragment
//! a provider sign-in returns with (`#access_token=...`) is picked up by the
//! next [`get_session`](Backend::get_session).

use crate::platform::with_timeout;
use dgex_core::backend::{
    Backend, Credentials, Provider, Session, SessionListeners, SessionUser, SignUpOutcome,
    Subscription,
};
use dgex_core::config::{BackendConfig, REQUEST_TIMEOUT_SECS};
use dgex_core::BackendError;
use dioxus::logger::tracing::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;

/// Production [`Backend`] bound to one Supabase project.
pub struct SupabaseBackend {
    config: BackendConfig,
    client: reqwest::Client,
    session: RefCell<Option<Session>>,
    listeners: SessionListeners,
}

/// Token grant as returned by sign-in and auto-confirmed sign-up.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<SessionUser>,
}

impl TokenResponse {
    fn into_session(self, now_secs: i64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BackendError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            session: RefCell::new(None),
            listeners: SessionListeners::new(),
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.url(), path)
    }

    /// Provider sign-in URL that returns to `redirect_to`.
    pub fn authorize_url(
        &self,
        provider: Provider,
        redirect_to: &str,
    ) -> Result<url::Url, BackendError> {
        let mut url = url::Url::parse(&self.endpoint("/auth/v1/authorize"))
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("provider", provider.as_str())
            .append_pair("redirect_to", redirect_to);
        Ok(url)
    }

    /// Bearer token: the session's when signed in, else the public key.
    fn bearer(&self) -> String {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key().to_string())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.endpoint(path))
            .header("apikey", self.config.anon_key())
            .bearer_auth(self.bearer())
    }

    /// Sends once and maps non-2xx responses through [`parse_error_body`].
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, BackendError> {
        let response = with_timeout(REQUEST_TIMEOUT_SECS, request.send())
            .await
            .ok_or(BackendError::Timeout(REQUEST_TIMEOUT_SECS))?
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = with_timeout(REQUEST_TIMEOUT_SECS, response.text())
            .await
            .and_then(|body| body.ok())
            .unwrap_or_default();
        Err(parse_error_body(status.as_u16(), &body))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let body = with_timeout(REQUEST_TIMEOUT_SECS, response.text())
            .await
            .ok_or(BackendError::Timeout(REQUEST_TIMEOUT_SECS))?
            .map_err(|e| BackendError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    /// Stores (or clears) the session and tells every subscriber.
    fn replace_session(&self, session: Option<Session>) {
        persist(session.as_ref());
        *self.session.borrow_mut() = session.clone();
        self.listeners.broadcast(session);
    }

    fn cached_session(&self) -> Option<Session> {
        let mut cached = self.session.borrow_mut();
        if cached.as_ref().is_some_and(|s| s.is_expired_at(now_secs())) {
            debug!("Cached session expired");
            *cached = None;
        }
        cached.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for SupabaseBackend {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        if let Some(session) = self.cached_session() {
            return Ok(Some(session));
        }

        if let Some(session) = take_redirect_session(now_secs())? {
            info!("Session received from provider redirect");
            self.replace_session(Some(session.clone()));
            return Ok(Some(session));
        }

        let stored = load_persisted().filter(|s| !s.is_expired_at(now_secs()));
        if stored.is_some() {
            *self.session.borrow_mut() = stored.clone();
        }
        Ok(stored)
    }

    fn on_session_change(&self) -> Subscription {
        self.listeners.subscribe()
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        debug!("Signing in {}", credentials.email);
        let request = self
            .request(reqwest::Method::POST, "/auth/v1/token?grant_type=password")
            .json(credentials);
        let response = self.send(request).await?;
        let token: TokenResponse = Self::read_json(response).await?;

        let session = token.into_session(now_secs());
        self.replace_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, BackendError> {
        debug!("Signing up {}", credentials.email);
        let request = self
            .request(reqwest::Method::POST, "/auth/v1/signup")
            .json(credentials);
        let response = self.send(request).await?;
        let body: Value = Self::read_json(response).await?;

        // Without auto-confirm the service answers with the bare user object
        if body.get("access_token").is_none() {
            return Ok(SignUpOutcome::ConfirmationSent);
        }

        let token: TokenResponse = serde_json::from_value(body)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        let session = token.into_session(now_secs());
        self.replace_session(Some(session.clone()));
        Ok(SignUpOutcome::SignedIn(session))
    }

    async fn sign_in_with_provider(&self, provider: Provider) -> Result<(), BackendError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()
                .ok_or_else(|| BackendError::Unsupported("no browser window".to_string()))?;
            let location = window.location();
            let origin = location.origin().map_err(js_error)?;
            let path = location.pathname().map_err(js_error)?;

            let url = self.authorize_url(provider, &format!("{}{}", origin, path))?;
            info!("Redirecting to {} sign-in", provider.as_str());
            location.set_href(url.as_str()).map_err(js_error)?;
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(BackendError::Unsupported(format!(
                "{} sign-in is only available in the browser",
                provider.as_str()
            )))
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let had_session = self.session.borrow().is_some();
        let result = if had_session {
            let request = self.request(reqwest::Method::POST, "/auth/v1/logout");
            self.send(request).await.map(|_| ())
        } else {
            Ok(())
        };

        // The local session ends regardless of what the service said
        if let Err(e) = &result {
            warn!("Logout request failed: {}", e);
        }
        self.replace_session(None);
        result
    }

    async fn insert_record(&self, collection: &str, record: Value) -> Result<(), BackendError> {
        let request = self
            .request(reqwest::Method::POST, &format!("/rest/v1/{}", collection))
            .header("Prefer", "return=minimal")
            .json(&record);
        self.send(request).await?;
        debug!("Inserted one record into {}", collection);
        Ok(())
    }
}

// ============================================================================
// Response parsing
// ============================================================================

/// Maps an error response to a [`BackendError::Service`].
///
/// The code comes from `error_code` or `code` (string or number); the message
/// from the first non-blank of `msg`, `message`, `error_description`, `error`,
/// falling back to the HTTP reason phrase.
pub fn parse_error_body(status: u16, body: &str) -> BackendError {
    let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let code = ["error_code", "code"]
        .iter()
        .find_map(|key| match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        });

    let message = ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status))
        });

    BackendError::Service { code, message }
}

/// Reads a provider redirect fragment.
///
/// `Ok(None)` when the fragment carries no token; an error when the provider
/// reported one.
pub fn parse_fragment(fragment: &str, now_secs: i64) -> Result<Option<Session>, BackendError> {
    let fragment = fragment.trim_start_matches('#');
    let mut fields = std::collections::HashMap::new();
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        fields.insert(key.into_owned(), value.into_owned());
    }

    if fields.contains_key("error") || fields.contains_key("error_description") {
        let code = fields.get("error_code").or_else(|| fields.get("error"));
        let message = fields
            .get("error_description")
            .or_else(|| fields.get("error"))
            .cloned()
            .unwrap_or_default();
        return Err(BackendError::service(code.map(String::as_str), message));
    }

    let Some(access_token) = fields.remove("access_token") else {
        return Ok(None);
    };

    let token = TokenResponse {
        access_token,
        refresh_token: fields.remove("refresh_token"),
        expires_in: fields.get("expires_in").and_then(|v| v.parse().ok()),
        expires_at: fields.get("expires_at").and_then(|v| v.parse().ok()),
        user: None,
    };
    Ok(Some(token.into_session(now_secs)))
}

// ============================================================================
// Browser persistence
// ============================================================================

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "dgex.auth.session";

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> BackendError {
    BackendError::Unsupported(format!("{:?}", err))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn persist(session: Option<&Session>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(json)) => storage.set_item(STORAGE_KEY, &json),
        Some(Err(e)) => {
            warn!("Failed to serialize session: {}", e);
            return;
        }
        None => storage.remove_item(STORAGE_KEY),
    };
    if let Err(e) = result {
        warn!("Failed to update stored session: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn load_persisted() -> Option<Session> {
    let json = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("Discarding unreadable stored session: {}", e);
            None
        }
    }
}

/// Consumes a provider redirect fragment from the address bar.
#[cfg(target_arch = "wasm32")]
fn take_redirect_session(now_secs: i64) -> Result<Option<Session>, BackendError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let location = window.location();
    let hash = location.hash().map_err(js_error)?;
    if hash.len() <= 1 {
        return Ok(None);
    }

    let parsed = parse_fragment(&hash, now_secs);
    if parsed.as_ref().map_or(true, Option::is_some) {
        // Drop the tokens from the address bar
        let path = location.pathname().map_err(js_error)?;
        let search = location.search().map_err(js_error)?;
        if let Ok(history) = window.history() {
            let target = format!("{}{}", path, search);
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target))
            {
                warn!("Failed to clear redirect fragment: {:?}", e);
            }
        }
    }
    parsed
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_session: Option<&Session>) {}

#[cfg(not(target_arch = "wasm32"))]
fn load_persisted() -> Option<Session> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn take_redirect_session(_now_secs: i64) -> Result<Option<Session>, BackendError> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> SupabaseBackend {
        let config = BackendConfig::new("https://demo.supabase.co/", "anon-key").unwrap();
        SupabaseBackend::new(config).unwrap()
    }

    #[test]
    fn test_postgrest_duplicate_error() {
        let body = r#"{"code":"23505","details":"Key (email)=(a@b.co) already exists.","hint":null,"message":"duplicate key value violates unique constraint"}"#;
        let err = parse_error_body(409, body);
        assert!(err.is_duplicate_entry());
        assert_eq!(err.to_string(), "duplicate key value violates unique constraint");
    }

    #[test]
    fn test_gotrue_error_prefers_error_code() {
        let body = r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
        let err = parse_error_body(422, body);
        assert_eq!(err.code(), Some("user_already_exists"));
        assert_eq!(err.to_string(), "User already registered");
    }

    #[test]
    fn test_numeric_code_and_description() {
        let body = r#"{"code":400,"error_description":"Invalid login credentials"}"#;
        let err = parse_error_body(400, body);
        assert_eq!(err.code(), Some("400"));
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_unparseable_body_uses_status_reason() {
        let err = parse_error_body(503, "<html>bad gateway</html>");
        assert_eq!(err, BackendError::service(None, "Service Unavailable"));

        let err = parse_error_body(599, "");
        assert_eq!(err.to_string(), "HTTP 599");
    }

    #[test]
    fn test_fragment_with_tokens() {
        let fragment = "#access_token=abc&expires_in=3600&refresh_token=r1&token_type=bearer&type=signup";
        let session = parse_fragment(fragment, 1_000).unwrap().unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.expires_at, Some(4_600));
    }

    #[test]
    fn test_fragment_expires_at_wins() {
        let session = parse_fragment("access_token=abc&expires_at=99&expires_in=10", 1_000)
            .unwrap()
            .unwrap();
        assert_eq!(session.expires_at, Some(99));
    }

    #[test]
    fn test_fragment_without_token() {
        assert_eq!(parse_fragment("#section-2", 0), Ok(None));
        assert_eq!(parse_fragment("", 0), Ok(None));
    }

    #[test]
    fn test_fragment_with_provider_error() {
        let fragment = "#error=access_denied&error_code=403&error_description=Email+link+is+invalid";
        let err = parse_fragment(fragment, 0).unwrap_err();
        assert_eq!(err.code(), Some("403"));
        assert_eq!(err.to_string(), "Email link is invalid");
    }

    #[test]
    fn test_authorize_url() {
        let url = backend()
            .authorize_url(Provider::Google, "https://dgcapital.co/ex")
            .unwrap();
        assert_eq!(url.path(), "/auth/v1/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("provider".to_string(), "google".to_string()),
                ("redirect_to".to_string(), "https://dgcapital.co/ex".to_string()),
            ]
        );
    }

    #[test]
    fn test_bearer_falls_back_to_anon_key() {
        let backend = backend();
        assert_eq!(backend.bearer(), "anon-key");

        *backend.session.borrow_mut() = Some(Session::with_token("user-token"));
        assert_eq!(backend.bearer(), "user-token");
    }

    #[test]
    fn test_token_response_into_session() {
        let json = r#"{"access_token":"t","token_type":"bearer","expires_in":3600,"refresh_token":"r","user":{"id":"u1","email":"ana@example.com","role":"authenticated"}}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        let session = token.into_session(10);
        assert_eq!(session.expires_at, Some(3610));
        assert_eq!(session.user.unwrap().email.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_broadcasts_locally() {
        use futures::StreamExt;

        let backend = backend();
        let mut changes = backend.on_session_change();
        assert_eq!(backend.sign_out().await, Ok(()));
        assert_eq!(changes.next().await, Some(None));
    }

    #[tokio::test]
    async fn test_provider_sign_in_unsupported_on_desktop() {
        let err = backend()
            .sign_in_with_provider(Provider::Google)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_expired_cached_session_is_dropped() {
        let backend = backend();
        let mut session = Session::with_token("old");
        session.expires_at = Some(1);
        *backend.session.borrow_mut() = Some(session);

        assert_eq!(backend.get_session().await, Ok(None));
        assert!(backend.session.borrow().is_none());
    }
}
