use super::use_scroll_visibility;
use crate::components::{use_navigate, Icon};
use dgex_core::effects::ScrollWatcher;
use dgex_core::page::NAV_LABELS;
use dgex_core::Page;
use dioxus::prelude::*;

/// Fixed top bar: brand, page links, sign-in button and the mobile menu.
///
/// `dark` selects the colour scheme; only the dashboard ever passes `false`.
#[component]
pub fn Navbar(dark: bool) -> Element {
    let navigate = use_navigate();
    let scrolled = use_scroll_visibility(ScrollWatcher::navbar);
    let mut menu_open = use_signal(|| false);

    let backdrop = match (scrolled() || menu_open(), dark) {
        (false, _) => "dx-nav-clear",
        (true, true) => "dx-nav-solid-dark",
        (true, false) => "dx-nav-solid-light",
    };
    let brand_text = if dark { "dx-text-dark" } else { "dx-text-light" };
    let menu_class = if menu_open() { "dx-mobile-menu open" } else { "dx-mobile-menu" };
    let menu_icon = if menu_open() { "close" } else { "menu" };

    let mut go = move |page: Page| {
        navigate.call(page);
        menu_open.set(false);
    };

    rsx! {
        nav { class: "dx-nav {backdrop}",
            div { class: "dx-container dx-nav-row",
                div { class: "dx-brand", onclick: move |_| go(Page::Home),
                    span { class: "dx-brand-mark", "DG" }
                    span { class: "dx-brand-name {brand_text}",
                        "Capital "
                        span { class: "dx-accent dx-italic", "Ex" }
                    }
                }

                div { class: "dx-nav-links",
                    for label in NAV_LABELS {
                        a {
                            key: "{label}",
                            class: "dx-nav-link",
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                go(Page::from_nav_label(label));
                            },
                            "{label}"
                        }
                    }
                    button {
                        class: "dx-btn dx-btn-primary dx-btn-pill",
                        onclick: move |_| go(Page::Auth),
                        "Entrar"
                    }
                }

                button {
                    class: "dx-nav-toggle",
                    onclick: move |_| menu_open.toggle(),
                    Icon { name: menu_icon }
                }
            }

            div { class: "{menu_class}",
                for label in NAV_LABELS {
                    a {
                        key: "{label}",
                        class: "dx-nav-link dx-nav-link-lg",
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            go(Page::from_nav_label(label));
                        },
                        "{label}"
                    }
                }
                button {
                    class: "dx-btn dx-btn-primary dx-btn-block",
                    onclick: move |_| go(Page::Auth),
                    "Entrar"
                }
            }
        }
    }
}
