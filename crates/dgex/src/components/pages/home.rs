//! Landing page: hero banner and the three feature cards.

use crate::components::{use_navigate, Icon};
use dgex_core::catalog::FEATURES;
use dgex_core::Page;
use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Hero {}
        Features {}
    }
}

#[component]
fn Hero() -> Element {
    let navigate = use_navigate();

    rsx! {
        section { class: "dx-hero dx-geometric",
            div { class: "dx-hero-glow dx-glow-primary" }
            div { class: "dx-hero-glow dx-glow-secondary" }

            div { class: "dx-container dx-hero-grid",
                div { class: "dx-hero-copy",
                    div { class: "dx-badge dx-badge-primary",
                        span { class: "dx-pulse" }
                        "Next-Gen Educational Experience"
                    }
                    h1 { class: "dx-hero-title",
                        "Transforma tu futuro con "
                        span { class: "dx-gradient-text", "educación financiera y tecnológica" }
                    }
                    p { class: "dx-lead",
                        "Domina las herramientas tecnológicas y estrategia en finanzas corporativas que están definiendo la nueva economía digital con una visión de futuro."
                    }
                    div { class: "dx-hero-actions",
                        button {
                            class: "dx-btn dx-btn-primary dx-btn-lg",
                            onclick: move |_| navigate.call(Page::Investment),
                            "Comenzar Ahora"
                        }
                        button {
                            class: "dx-btn dx-btn-ghost dx-btn-lg",
                            onclick: move |_| navigate.call(Page::Training),
                            "Ver Formación"
                        }
                    }
                }

                div { class: "dx-hero-visual",
                    div { class: "dx-ring dx-ring-outer" }
                    div { class: "dx-ring dx-ring-middle" }
                    div { class: "dx-ring dx-ring-inner" }
                    div { class: "dx-hero-emblem",
                        span { class: "dx-brand-mark", "DG" }
                        span { class: "dx-accent dx-italic", "Ex" }
                    }
                }
            }
        }
    }
}

#[component]
fn Features() -> Element {
    let navigate = use_navigate();

    rsx! {
        section { class: "dx-section dx-surface-dark dx-bordered-y",
            div { class: "dx-container",
                div { class: "dx-section-head",
                    h2 { class: "dx-section-title", "Nuestro Enfoque" }
                    div { class: "dx-rule" }
                }
                div { class: "dx-grid-3",
                    for feature in FEATURES {
                        div { key: "{feature.title}", class: "dx-feature-card dx-hover-{feature.accent}",
                            div { class: "dx-feature-icon dx-tint-{feature.accent}",
                                Icon { name: feature.icon }
                            }
                            h3 { class: "dx-card-title", "{feature.title}" }
                            p { class: "dx-muted", "{feature.description}" }
                            button {
                                class: "dx-link-button dx-accent-{feature.accent}",
                                onclick: move |_| navigate.call(feature.target),
                                "{feature.link_text}"
                                Icon { name: "arrow_forward" }
                            }
                        }
                    }
                }
            }
        }
    }
}
