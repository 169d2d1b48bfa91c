//! Sign-in / sign-up page with the third-party provider button.
//!
//! A successful sign-in needs no handling here: the session change moves
//! the app to the dashboard.

use crate::components::{use_backend, Icon};
use crate::utils::{SignalCell, SignalExt};
use dgex_core::auth::{self, AuthFlow, AuthMode};
use dgex_core::backend::Provider;
use dgex_core::form::submit;
use dgex_core::{FormState, FormStatus};
use dioxus::prelude::*;

const GOOGLE_LOGO: &str = "https://www.svgrepo.com/show/475656/google-color.svg";

#[component]
pub fn AuthPage() -> Element {
    let mut form = use_signal(FormState::<AuthFlow>::new);
    let backend = use_backend();

    let state = form.read();
    let mode = state.values.mode;
    let in_flight = state.in_flight();
    let banner = match state.status() {
        FormStatus::Success(outcome) => outcome
            .banner()
            .map(|text| ("dx-alert dx-alert-success", "check_circle", text.to_string())),
        FormStatus::Error(message) => Some(("dx-alert dx-alert-error", "error", message.clone())),
        FormStatus::Idle => None,
    };

    let (title, subtitle, submit_label, toggle_prompt, toggle_action) = match mode {
        AuthMode::SignIn => (
            "Bienvenido de nuevo",
            "Ingresa tus credenciales para continuar.",
            "Iniciar Sesión",
            "¿No tienes cuenta? ",
            "Regístrate aquí",
        ),
        AuthMode::SignUp => (
            "Únete a ",
            "Crea una cuenta para acceder a la comunidad.",
            "Registrarse con Email",
            "¿Ya tienes cuenta? ",
            "Inicia Sesión",
        ),
    };
    let submit_class = if in_flight {
        "dx-btn dx-btn-block dx-btn-busy"
    } else {
        "dx-btn dx-btn-block dx-btn-gradient"
    };

    let submit_backend = backend.clone();
    let provider_backend = backend;

    rsx! {
        section { class: "dx-page dx-geometric dx-page-centered",
            div { class: "dx-auth",
                div { class: "dx-section-head",
                    div { class: "dx-badge dx-badge-primary",
                        Icon { name: "lock" }
                        "Acceso Seguro"
                    }
                    h2 { class: "dx-auth-title",
                        "{title} "
                        span { class: "dx-gradient-text", "DG Capital" }
                    }
                    p { class: "dx-muted", "{subtitle}" }
                }

                div { class: "dx-form-card",
                    if let Some((alert_class, icon, text)) = banner {
                        div { class: alert_class,
                            Icon { name: icon }
                            "{text}"
                        }
                    }

                    form {
                        class: "dx-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let backend = submit_backend.clone();
                            spawn(async move {
                                submit(&SignalCell(form), &*backend).await;
                            });
                        },

                        div { class: "dx-field",
                            label { class: "dx-label", r#for: "email", "Correo Electrónico" }
                            input {
                                class: "dx-input",
                                id: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "tu@email.com",
                                value: "{state.values.email}",
                                oninput: move |evt: FormEvent| form.mutate(|s| s.values.email = evt.value()),
                            }
                        }
                        div { class: "dx-field",
                            label { class: "dx-label", r#for: "password", "Contraseña" }
                            input {
                                class: "dx-input",
                                id: "password",
                                r#type: "password",
                                required: true,
                                placeholder: "••••••••",
                                value: "{state.values.password}",
                                oninput: move |evt: FormEvent| form.mutate(|s| s.values.password = evt.value()),
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "{submit_class}",
                            disabled: in_flight,
                            if in_flight {
                                span { class: "dx-spinner" }
                                "Procesando..."
                            } else {
                                "{submit_label}"
                            }
                        }
                    }

                    div { class: "dx-auth-switch",
                        button {
                            class: "dx-text-button",
                            onclick: move |_| form.mutate(auth::toggle_mode),
                            "{toggle_prompt}"
                            span { class: "dx-accent", "{toggle_action}" }
                        }
                    }

                    div { class: "dx-divider",
                        span { "O continúa con" }
                    }

                    button {
                        class: "dx-btn dx-btn-block dx-btn-light",
                        disabled: in_flight,
                        onclick: move |_| {
                            let backend = provider_backend.clone();
                            spawn(async move {
                                auth::sign_in_with_provider(&SignalCell(form), &*backend, Provider::Google)
                                    .await;
                            });
                        },
                        img { class: "dx-provider-logo", src: GOOGLE_LOGO, alt: "Google" }
                        "Google"
                    }
                }
            }
        }
    }
}
