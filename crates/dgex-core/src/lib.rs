//! # DG Capital Ex Core
//!
//! Platform-independent state and flows behind the DG Capital Ex site.
//!
//! Nothing here depends on the UI framework: the app crate binds these types
//! to signals and components, and the tests drive them directly.
//!
//! ## Modules
//!
//! - [`page`] - The closed set of top-level views
//! - [`navigation`] - Current-page controller with the dashboard gate
//! - [`session`] - Session lookup and change-driven redirects
//! - [`backend`] - Hosted auth/database capability and in-memory double
//! - [`form`] - Generic validate / send / report submission flow
//! - [`community`] - Community enrollment form
//! - [`auth`] - Email/password and provider sign-in form
//! - [`theme`] - Dark/light display state and style tokens
//! - [`effects`] - Scroll watcher and counter animation
//! - [`dashboard`] - Post-login section state
//! - [`catalog`] - Static page content
//! - [`config`] - Constants and connection parameters
//! - [`error`] - Error types
//! - [`state`] - Shared-state access used by the async flows

#![forbid(unsafe_code)]

pub mod auth;
pub mod backend;
pub mod catalog;
pub mod community;
pub mod config;
pub mod dashboard;
pub mod effects;
pub mod error;
pub mod form;
pub mod navigation;
pub mod page;
pub mod session;
pub mod state;
pub mod theme;

pub use backend::{Backend, InMemoryBackend, Session};
pub use error::{BackendError, ConfigError, FormError};
pub use form::{FormState, FormStatus};
pub use navigation::Navigator;
pub use page::Page;
