//! Configuration constants and backend connection parameters.
//!
//! # Usage
//!
//! ```
//! use dgex_core::config::{BackendConfig, SCROLL_TOP_THRESHOLD};
//!
//! let config = BackendConfig::new("https://demo.supabase.co", "public-anon-key").unwrap();
//! assert_eq!(config.url(), "https://demo.supabase.co");
//! assert_eq!(SCROLL_TOP_THRESHOLD, 400.0);
//! ```

use crate::error::ConfigError;

// =============================================================================
// Hosted service
// =============================================================================

/// Environment variable holding the service endpoint.
pub const URL_ENV: &str = "DGEX_SUPABASE_URL";

/// Environment variable holding the public (anon) key.
pub const ANON_KEY_ENV: &str = "DGEX_SUPABASE_ANON_KEY";

/// Collection that receives community enrollments.
pub const COMMUNITY_COLLECTION: &str = "comunidad_inscripciones";

/// Postgres unique_violation, forwarded verbatim by PostgREST.
pub const DUPLICATE_ENTRY_CODE: &str = "23505";

/// Upper bound for a single network call, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// UI effects
// =============================================================================

/// Vertical offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Vertical offset past which the navbar switches to its opaque backdrop.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 20.0;

/// Default counter animation length in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Delay between counter animation frames (~60 Hz).
pub const ANIMATION_FRAME_MS: u32 = 16;

/// Connection parameters passed straight through to the hosted service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
    anon_key: String,
}

impl BackendConfig {
    /// Validates and builds the connection parameters.
    ///
    /// The URL must be absolute http/https; a trailing slash is dropped so
    /// endpoint paths can be appended directly.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let anon_key = anon_key.into();

        let url = url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(ConfigError::Missing(URL_ENV));
        }
        let parsed =
            url::Url::parse(&url).map_err(|e| ConfigError::Invalid(URL_ENV, e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Invalid(
                URL_ENV,
                format!("unsupported scheme {}", parsed.scheme()),
            ));
        }

        let anon_key = anon_key.trim().to_string();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(ANON_KEY_ENV));
        }

        Ok(Self { url, anon_key })
    }

    /// Builds the config from optional raw values, reporting whichever is missing.
    pub fn from_parts(url: Option<String>, anon_key: Option<String>) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::Missing(URL_ENV))?;
        let anon_key = anon_key.ok_or(ConfigError::Missing(ANON_KEY_ENV))?;
        Self::new(url, anon_key)
    }

    /// Service endpoint without trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Public key sent as `apikey` on every request.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }
}
