//! Pricing plans. Every plan button leads to the auth page.

use crate::components::{use_navigate, Icon};
use dgex_core::catalog::{plan_line, Plan, PlanLine, CHARITY_URL, PAYPAL_URL, PLANS};
use dgex_core::Page;
use dioxus::prelude::*;

#[component]
pub fn InvestmentPage() -> Element {
    rsx! {
        section { class: "dx-page dx-geometric",
            div { class: "dx-container",
                div { class: "dx-section-head",
                    div { class: "dx-badge dx-badge-primary",
                        Icon { name: "payments" }
                        "Planes de Inversión"
                    }
                    h2 { class: "dx-page-title",
                        "Invierte en más "
                        span { class: "dx-gradient-text", "Conocimiento" }
                    }
                    p { class: "dx-lead dx-centered",
                        "Elige el plan que mejor se adapte a tus objetivos y comienza a dominar las herramientas que están definiendo el mercado laboral del futuro."
                    }
                }

                div { class: "dx-grid-3 dx-stretch",
                    for plan in PLANS {
                        PlanCard { key: "{plan.title}", plan }
                    }
                }

                div { class: "dx-paypal",
                    p { class: "dx-muted", "También puedes pagar de forma segura con" }
                    a {
                        href: PAYPAL_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img {
                            class: "dx-paypal-logo",
                            src: "https://upload.wikimedia.org/wikipedia/commons/b/b5/PayPal.svg",
                            alt: "Pagar con PayPal",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Plan) -> Element {
    let navigate = use_navigate();
    let card_class = if plan.highlight {
        "dx-plan-card highlight"
    } else {
        "dx-plan-card"
    };

    rsx! {
        div { class: "{card_class}",
            if plan.highlight {
                div { class: "dx-plan-ribbon", span { "Más Popular" } }
            }
            div { class: "dx-plan-head",
                h3 { class: "dx-card-title", "{plan.title}" }
                p { class: "dx-muted", "{plan.description}" }
            }
            div { class: "dx-plan-price",
                span { class: "dx-price", "{plan.price}" }
                span { class: "dx-period", "{plan.period}" }
            }
            ul { class: "dx-plan-features",
                for feature in plan.features.iter().copied() {
                    li { key: "{feature}",
                        {match plan_line(feature) {
                            PlanLine::Included(text) => rsx! {
                                Icon { name: "check", class: "dx-accent" }
                                span { "{text}" }
                            },
                            PlanLine::Excluded(text) => rsx! {
                                Icon { name: "close", class: "dx-danger" }
                                span { class: "dx-dim", "{text}" }
                            },
                            PlanLine::Charity(text) => rsx! {
                                span { class: "dx-heart", "💚" }
                                a {
                                    class: "dx-inline-link",
                                    href: CHARITY_URL,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{text}"
                                }
                            },
                        }}
                    }
                }
            }
            button {
                class: "dx-btn dx-btn-primary dx-btn-block",
                onclick: move |_| navigate.call(Page::Auth),
                "{plan.button_text}"
            }
        }
    }
}
