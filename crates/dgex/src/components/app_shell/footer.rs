use crate::components::{use_navigate, Icon};
use dgex_core::catalog::{
    FooterLink, FooterTarget, COMPANY_LINKS, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE,
    PLATFORM_LINKS, POWERED_BY_URL,
};
use dioxus::prelude::*;

/// Site footer: brand blurb, link columns, contact details
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "dx-footer",
            div { class: "dx-container",
                div { class: "dx-footer-grid",
                    div { class: "dx-footer-brand",
                        div { class: "dx-brand",
                            span { class: "dx-brand-mark", "DG" }
                            span { class: "dx-brand-name dx-text-dark",
                                "Capital "
                                span { class: "dx-accent dx-italic", "Ex" }
                            }
                        }
                        p { class: "dx-muted",
                            "Líderes en educación financiera y tecnología para la nueva era digital. Re-imaginando el aprendizaje financiero."
                        }
                    }

                    FooterColumn { title: "Plataforma", dot: "dx-dot-primary", links: PLATFORM_LINKS.to_vec() }
                    FooterColumn { title: "Empresa", dot: "dx-dot-secondary", links: COMPANY_LINKS.to_vec() }

                    div {
                        h4 { class: "dx-footer-heading",
                            span { class: "dx-dot dx-dot-white" }
                            "Conéctate"
                        }
                        ul { class: "dx-footer-list dx-muted",
                            li { class: "dx-footer-contact",
                                Icon { name: "location_on", class: "dx-accent" }
                                span {
                                    "{CONTACT_ADDRESS[0]}"
                                    br {}
                                    "{CONTACT_ADDRESS[1]}"
                                }
                            }
                            li { class: "dx-footer-contact",
                                Icon { name: "call", class: "dx-accent" }
                                span { "{CONTACT_PHONE}" }
                            }
                            li { class: "dx-footer-contact",
                                Icon { name: "alternate_email", class: "dx-accent" }
                                span { "{CONTACT_EMAIL}" }
                            }
                        }
                    }
                }

                div { class: "dx-footer-bottom",
                    p {
                        "Copyright © 2026 DG CAPITAL. Todos los derechos reservados. "
                        span {
                            "Con el poder de "
                            a {
                                class: "dx-accent-secondary",
                                href: POWERED_BY_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Jaguar House"
                            }
                        }
                    }
                    div { class: "dx-footer-legal",
                        a { href: "#", "Privacidad" }
                        a { href: "#", "Términos" }
                        a { href: "#", "Cookies" }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterColumn(title: &'static str, dot: &'static str, links: Vec<FooterLink>) -> Element {
    let navigate = use_navigate();

    rsx! {
        div {
            h4 { class: "dx-footer-heading",
                span { class: "dx-dot {dot}" }
                "{title}"
            }
            ul { class: "dx-footer-list dx-muted",
                for link in links {
                    li { key: "{link.label}",
                        {match link.target {
                            FooterTarget::Page(page) => rsx! {
                                button {
                                    class: "dx-footer-link",
                                    onclick: move |_| navigate.call(page),
                                    "{link.label}"
                                }
                            },
                            FooterTarget::External(href) => rsx! {
                                a {
                                    class: "dx-footer-link",
                                    href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link.label}"
                                }
                            },
                            FooterTarget::Soon => rsx! {
                                button { class: "dx-footer-link dx-disabled", disabled: true, "{link.label}" }
                            },
                        }}
                    }
                }
            }
        }
    }
}
