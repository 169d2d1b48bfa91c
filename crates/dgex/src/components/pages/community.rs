//! Community enrollment: the sign-up form and its welcome view.

use crate::components::{use_backend, Icon};
use crate::utils::{SignalCell, SignalExt};
use dgex_core::community::{
    CommunityFlow, CommunitySummary, CommunityValues, EducationLevel, Interest, WHATSAPP_GROUP_URL,
};
use dgex_core::form::submit;
use dgex_core::{FormState, FormStatus};
use dioxus::prelude::*;

type CommunityForm = Signal<FormState<CommunityFlow>>;

#[component]
pub fn CommunityPage() -> Element {
    // Fresh state per mount; nothing survives leaving the page
    let form: CommunityForm = use_signal(FormState::new);

    let summary = match form.read().status() {
        FormStatus::Success(summary) => Some(summary.clone()),
        _ => None,
    };

    rsx! {
        section { class: "dx-page dx-geometric dx-page-centered",
            div { class: "dx-container dx-narrow",
                div { class: "dx-section-head",
                    div { class: "dx-badge dx-badge-primary",
                        Icon { name: "groups" }
                        "Únete al Círculo"
                    }
                    h2 { class: "dx-page-title",
                        "Comunidad "
                        span { class: "dx-gradient-text", "DG Capital" }
                    }
                    p { class: "dx-lead dx-centered",
                        "Accede a señales exclusivas, networking de alto nivel y recursos de calidad que te permitirán tomar mejores decisiones."
                    }
                }

                div { class: "dx-form-card",
                    if let Some(summary) = summary {
                        Welcome { summary, form }
                    } else {
                        EnrollmentForm { form }
                    }
                }
            }
        }
    }
}

#[component]
fn Welcome(summary: CommunitySummary, form: CommunityForm) -> Element {
    let mut form = form;

    rsx! {
        div { class: "dx-success",
            div { class: "dx-success-icon",
                Icon { name: "verified" }
            }
            h3 { class: "dx-success-title",
                "¡Bienvenido a la comunidad, "
                span { class: "dx-gradient-text", "{summary.first_name}" }
                "!"
            }
            p { class: "dx-lead",
                "Hemos registrado tu interés en "
                strong { "{summary.interest.label()}" }
                " y otros temas clave. Estás a un paso de acceder a contenido exclusivo."
            }
            a {
                class: "dx-btn dx-btn-whatsapp",
                href: WHATSAPP_GROUP_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { name: "chat" }
                "Unirme al Grupo de WhatsApp"
            }
            button {
                class: "dx-text-button",
                onclick: move |_| form.mutate(|state| state.clear_status()),
                "Volver al formulario"
            }
        }
    }
}

#[component]
fn EnrollmentForm(form: CommunityForm) -> Element {
    let mut form = form;
    let backend = use_backend();

    let state = form.read();
    let values: &CommunityValues = &state.values;
    let in_flight = state.in_flight();
    let error = state.status().error_message().map(str::to_string);
    let submit_class = if in_flight {
        "dx-btn dx-btn-block dx-btn-busy"
    } else {
        "dx-btn dx-btn-block dx-btn-gradient"
    };

    rsx! {
        form {
            class: "dx-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let backend = backend.clone();
                spawn(async move {
                    submit(&SignalCell(form), &*backend).await;
                });
            },

            div { class: "dx-form-grid",
                TextField {
                    id: "nombre_completo",
                    label: "Nombre Completo",
                    kind: "text",
                    placeholder: "Tu nombre",
                    value: values.full_name.clone(),
                    oninput: move |v: String| form.mutate(|s| s.values.full_name = v),
                }
                TextField {
                    id: "email",
                    label: "Correo Electrónico",
                    kind: "email",
                    placeholder: "nombre@ejemplo.com",
                    value: values.email.clone(),
                    oninput: move |v: String| form.mutate(|s| s.values.email = v),
                }
                TextField {
                    id: "whatsapp",
                    label: "WhatsApp",
                    kind: "tel",
                    placeholder: "+57 300 123 4567",
                    value: values.whatsapp.clone(),
                    oninput: move |v: String| form.mutate(|s| s.values.whatsapp = v),
                }
                TextField {
                    id: "pais",
                    label: "País de Residencia",
                    kind: "text",
                    placeholder: "Colombia, México, España...",
                    value: values.country.clone(),
                    oninput: move |v: String| form.mutate(|s| s.values.country = v),
                }
            }

            div { class: "dx-field",
                span { class: "dx-label", "Nivel Académico Alcanzado" }
                div { class: "dx-choice-grid",
                    for level in EducationLevel::ALL {
                        label {
                            key: "{level.label()}",
                            class: choice_class(values.level == Some(level)),
                            input {
                                r#type: "radio",
                                class: "dx-hidden",
                                name: "nivel_alcanzado",
                                value: level.label(),
                                checked: values.level == Some(level),
                                onchange: move |_| form.mutate(|s| s.values.level = Some(level)),
                            }
                            "{level.label()}"
                        }
                    }
                }
            }

            div { class: "dx-field",
                span { class: "dx-label", "Intereses Principales (Selecciona varios)" }
                div { class: "dx-check-grid",
                    for interest in Interest::ALL {
                        InterestOption {
                            key: "{interest.label()}",
                            interest,
                            checked: values.has_interest(interest),
                            ontoggle: move |interest: Interest| form.mutate(|s| s.values.toggle_interest(interest)),
                        }
                    }
                }
            }

            if let Some(message) = error {
                div { class: "dx-alert dx-alert-error",
                    Icon { name: "error" }
                    "{message}"
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
                    "Unirme a la Comunidad"
                }
            }

            p { class: "dx-fineprint",
                "Al registrarte aceptas nuestra política de privacidad y el tratamiento de datos."
            }
        }
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "dx-field",
            label { class: "dx-label", r#for: id, "{label}" }
            input {
                class: "dx-input",
                id,
                name: id,
                r#type: kind,
                required: true,
                placeholder,
                value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "dx-choice selected"
    } else {
        "dx-choice"
    }
}

fn check_class(checked: bool) -> &'static str {
    if checked {
        "dx-check selected"
    } else {
        "dx-check"
    }
}

#[component]
fn InterestOption(interest: Interest, checked: bool, ontoggle: EventHandler<Interest>) -> Element {
    rsx! {
        label { class: check_class(checked),
            span { class: "dx-checkbox",
                if checked {
                    Icon { name: "check" }
                }
            }
            input {
                r#type: "checkbox",
                class: "dx-hidden",
                value: interest.label(),
                checked,
                onchange: move |_| ontoggle.call(interest),
            }
            span { "{interest.label()}" }
        }
    }
}
