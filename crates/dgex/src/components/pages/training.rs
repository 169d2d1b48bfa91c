//! Training catalog: market statistics and specialized programs, behind two tabs.

use crate::components::{AnimatedNumber, Icon};
use dgex_core::catalog::{TrainingTab, SKILLS_SOURCE, STATS, TRACKS, TRENDING_SKILLS};
use dioxus::prelude::*;

#[component]
pub fn TrainingPage() -> Element {
    let mut active_tab = use_signal(TrainingTab::default);

    let tab_class = move |tab: TrainingTab| {
        match (active_tab() == tab, tab) {
            (false, _) => "dx-tab",
            (true, TrainingTab::MarketData) => "dx-tab active-primary",
            (true, TrainingTab::Programs) => "dx-tab active-secondary",
        }
    };

    rsx! {
        section { class: "dx-page dx-geometric",
            div { class: "dx-container dx-section-head",
                div { class: "dx-badge dx-badge-secondary",
                    Icon { name: "school" }
                    "Academia DG Capital"
                }
                h2 { class: "dx-page-title",
                    "Lidera la "
                    span { class: "dx-gradient-text", "Revolución Financiera" }
                }
                p { class: "dx-lead dx-centered",
                    "La IA Generativa no es el futuro, es el presente. Domina las herramientas que están redefiniendo el capital global."
                }
            }

            div { class: "dx-tabs",
                for tab in [TrainingTab::MarketData, TrainingTab::Programs] {
                    button {
                        key: "{tab.label()}",
                        class: tab_class(tab),
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "dx-container",
                {match active_tab() {
                    TrainingTab::MarketData => rsx! { MarketData {} },
                    TrainingTab::Programs => rsx! { Programs {} },
                }}
            }
        }
    }
}

#[component]
fn MarketData() -> Element {
    rsx! {
        div { class: "dx-grid-4",
            for stat in STATS {
                div { key: "{stat.label}", class: "dx-stat-card",
                    div { class: "dx-stat-value",
                        AnimatedNumber { end: stat.end, suffix: stat.suffix }
                    }
                    h3 { class: "dx-stat-label", "{stat.label}" }
                    p { class: "dx-muted", "{stat.description}" }
                }
            }
        }

        div { class: "dx-panel",
            h3 { class: "dx-panel-title",
                Icon { name: "trending_up", class: "dx-accent" }
                "Habilidades en Crecimiento Explosivo"
            }
            div { class: "dx-chips",
                for skill in TRENDING_SKILLS {
                    span { key: "{skill}", class: "dx-chip", "{skill}" }
                }
            }
            p { class: "dx-source", "{SKILLS_SOURCE}" }
        }
    }
}

#[component]
fn Programs() -> Element {
    rsx! {
        div { class: "dx-grid-3",
            for track in TRACKS {
                div { key: "{track.title}", class: "dx-track-card",
                    div { class: "dx-track-icon",
                        Icon { name: track.icon }
                    }
                    h3 { class: "dx-card-title", "{track.title}" }
                    p { class: "dx-muted dx-grow", "{track.description}" }
                    div { class: "dx-tags",
                        for skill in track.skills {
                            span { key: "{skill}", class: "dx-tag", "{skill}" }
                        }
                    }
                    div { class: "dx-track-footer",
                        span { "Ver Módulos" }
                        Icon { name: "arrow_forward" }
                    }
                }
            }
        }
    }
}
