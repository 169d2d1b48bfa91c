//! UI components for the DG Capital Ex site.
//!
//! # Component Architecture
//!
//! - `app_shell`: Navbar, Footer, FloatingControls (mounted on every page)
//! - `pages`: one component per [`Page`], mounted by [`App`]
//! - [`AnimatedNumber`], [`Icon`]: small shared pieces
//!
//! # Context Providers
//!
//! [`App`] provides the shared state; components reach it through accessors:
//!
//! ```ignore
//! let navigate = use_navigate();
//! navigate.call(Page::Community);
//!
//! let theme = use_theme();
//! let tokens = theme().tokens();
//! ```
//!
//! Navigation and theme live in signals. The backend is a single
//! [`Rc<dyn Backend>`] chosen at start-up.

mod animated_number;
mod app_shell;
mod icon;
pub mod pages;

pub use animated_number::AnimatedNumber;
pub use app_shell::{FloatingControls, Footer, Navbar};
pub use icon::Icon;

use crate::backend;
use crate::utils::{SignalCell, SignalExt};
use dgex_core::backend::Backend;
use dgex_core::session::{follow_session_changes, restore_session};
use dgex_core::theme::{navbar_dark_mode, DisplayTheme};
use dgex_core::{Navigator, Page};
use dioxus::prelude::*;
use pages::{AuthPage, BooksPage, CommunityPage, DashboardPage, HomePage, InvestmentPage, TrainingPage};
use std::rc::Rc;

// ============================================================================
// Context
// ============================================================================

/// Backend shared through context.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn Backend>);

/// The backend the app was started with.
pub fn use_backend() -> Rc<dyn Backend> {
    use_context::<BackendHandle>().0
}

// Navigation state context provider
pub fn use_navigator() -> Signal<Navigator> {
    use_context::<Signal<Navigator>>()
}

// Display theme context provider (dashboard only honours it)
pub fn use_theme() -> Signal<DisplayTheme> {
    use_context::<Signal<DisplayTheme>>()
}

/// Callback that makes `page` current.
pub fn use_navigate() -> Callback<Page> {
    let mut navigator = use_navigator();
    use_callback(move |page: Page| {
        navigator.mutate(|nav| nav.navigate(page));
    })
}

// ============================================================================
// App
// ============================================================================

/// Root component: provides context, follows the session, mounts the current page.
#[component]
pub fn App() -> Element {
    let backend = use_hook(|| BackendHandle(backend::connect()));
    use_context_provider(|| backend.clone());

    let navigator = use_signal(Navigator::new);
    use_context_provider(|| navigator);

    let theme = use_signal(DisplayTheme::default);
    use_context_provider(|| theme);

    // Subscribe before the start-up lookup so no change is missed.
    // Both tasks belong to this scope and end with it.
    use_hook({
        let backend = backend.0.clone();
        move || {
            let subscription = backend.on_session_change();
            spawn(async move {
                follow_session_changes(subscription, &SignalCell(navigator)).await;
            });
            spawn(async move {
                restore_session(&*backend, &SignalCell(navigator)).await;
            });
        }
    });

    let visible = navigator.read().visible_page();
    let navbar_dark = navbar_dark_mode(visible, theme());

    let page = match visible {
        Page::Home => rsx! { HomePage {} },
        Page::Training => rsx! { TrainingPage {} },
        Page::Books => rsx! { BooksPage {} },
        Page::Community => rsx! { CommunityPage {} },
        Page::Investment => rsx! { InvestmentPage {} },
        Page::Auth => rsx! { AuthPage {} },
        Page::Dashboard => rsx! { DashboardPage {} },
    };

    rsx! {
        div { class: "dx-app",
            Navbar { dark: navbar_dark }
            main { class: "dx-main", {page} }
            Footer {}
            FloatingControls {}
        }
    }
}
