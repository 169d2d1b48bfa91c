//! Error types for dgex-core.
//!
//! Three layers are kept apart:
//! - [`BackendError`] is what the hosted service capability returns.
//! - [`FormError`] is what a form submission reports to its view.
//! - [`ConfigError`] covers the two connection parameters.

use crate::config::DUPLICATE_ENTRY_CODE;
use thiserror::Error;

/// Errors returned by a [`Backend`](crate::backend::Backend) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The service rejected the call. `code` is the provider error code when one was sent.
    #[error("{message}")]
    Service {
        code: Option<String>,
        message: String,
    },
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// No response within the request timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
    /// Capability not available on this platform
    #[error("Unsupported: {0}")]
    Unsupported(String),
    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Connection parameters were never supplied
    #[error("Backend is not configured")]
    NotConfigured,
}

impl BackendError {
    /// Shorthand for a service rejection with an optional provider code.
    pub fn service(code: Option<&str>, message: impl Into<String>) -> Self {
        BackendError::Service {
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    /// Provider error code, if the service sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            BackendError::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when the service reported a uniqueness violation.
    pub fn is_duplicate_entry(&self) -> bool {
        self.code() == Some(DUPLICATE_ENTRY_CODE)
    }
}

/// Errors surfaced by a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Local validation failed; the service was never called
    #[error("{0}")]
    Validation(String),
    /// The record already exists (uniqueness constraint)
    #[error("Duplicate entry")]
    DuplicateEntry,
    /// The service rejected the call or could not be reached
    #[error("{0}")]
    Service(String),
    /// Anything without a usable message
    #[error("Unknown error")]
    Unknown,
}

impl From<BackendError> for FormError {
    fn from(err: BackendError) -> Self {
        if err.is_duplicate_entry() {
            return FormError::DuplicateEntry;
        }
        let message = err.to_string();
        if message.trim().is_empty() {
            FormError::Unknown
        } else {
            FormError::Service(message)
        }
    }
}

/// Errors while resolving connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    #[error("Invalid configuration value {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_code_maps_to_duplicate_entry() {
        let err = BackendError::service(Some("23505"), "duplicate key value");
        assert_eq!(FormError::from(err), FormError::DuplicateEntry);
    }

    #[test]
    fn test_service_message_is_kept() {
        let err = BackendError::service(Some("400"), "Invalid login credentials");
        assert_eq!(
            FormError::from(err),
            FormError::Service("Invalid login credentials".to_string())
        );
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let err = BackendError::service(None, "  ");
        assert_eq!(FormError::from(err), FormError::Unknown);
    }

    #[test]
    fn test_non_service_errors_have_no_code() {
        assert_eq!(BackendError::Timeout(30).code(), None);
        assert!(!BackendError::NotConfigured.is_duplicate_entry());
    }
}
