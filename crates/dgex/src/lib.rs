//! DG Capital Ex - financial-education site on Dioxus.
//!
//! The view layer over [`dgex_core`]: every page as a component, the context
//! providers that hold navigation, session and theme state, and the hosted
//! service client.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: Browser build; sessions persist in `localStorage`
//! - **Desktop**: Native window; sessions live for the process only
//!
//! # Configuration
//!
//! The service endpoint and public key come from `DGEX_SUPABASE_URL` and
//! `DGEX_SUPABASE_ANON_KEY`, read at compile time and, on desktop, also at
//! start-up. Without them the site still renders and every service call
//! reports that the backend is not configured.

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod backend;
pub mod components;
pub mod platform;
pub mod utils;
