//! App shell components: Navbar, Footer, FloatingControls
//!
//! These components frame every page.

mod floating_controls;
mod footer;
mod navbar;

pub use floating_controls::FloatingControls;
pub use footer::Footer;
pub use navbar::Navbar;

use dgex_core::effects::ScrollWatcher;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Listener handles live on `window.__dgexScroll`, keyed per hook instance.
static NEXT_LISTENER_KEY: AtomicUsize = AtomicUsize::new(0);

// Reports the vertical offset now and on every scroll
fn listener_script(key: usize) -> String {
    format!(
        r#"
    const report = () => dioxus.send(window.scrollY);
    window.__dgexScroll = window.__dgexScroll || {{}};
    window.__dgexScroll[{key}] = report;
    window.addEventListener("scroll", report, {{ passive: true }});
    report();
"#
    )
}

fn removal_script(key: usize) -> String {
    format!(
        r#"
    const registry = window.__dgexScroll || {{}};
    if (registry[{key}]) {{
        window.removeEventListener("scroll", registry[{key}]);
        delete registry[{key}];
    }}
"#
    )
}

/// Tracks whether the page is scrolled past the watcher's threshold.
///
/// The listener task is owned by the calling component; unmounting it
/// also removes the window listener.
pub(crate) fn use_scroll_visibility(watcher: fn() -> ScrollWatcher) -> Signal<bool> {
    let mut visible = use_signal(|| false);
    let key = use_hook(|| NEXT_LISTENER_KEY.fetch_add(1, Ordering::Relaxed));

    use_future(move || async move {
        let mut watcher = watcher();
        let mut listener = document::eval(&listener_script(key));
        while let Ok(offset) = listener.recv::<f64>().await {
            if watcher.observe(offset) {
                visible.set(watcher.visible());
            }
        }
    });

    use_drop(move || {
        document::eval(&removal_script(key));
    });

    visible
}

/// Smooth-scrolls the window back to the top.
pub(crate) fn scroll_to_top() {
    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_targets_registered_listener() {
        let install = listener_script(3);
        let remove = removal_script(3);

        assert!(install.contains("window.__dgexScroll[3] = report;"));
        assert!(install.contains(r#"addEventListener("scroll", report"#));
        assert!(remove.contains(r#"removeEventListener("scroll", registry[3])"#));
        assert!(remove.contains("delete registry[3];"));
        assert!(!removal_script(4).contains("[3]"));
    }
}
