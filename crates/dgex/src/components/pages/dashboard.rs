//! Signed-in area: section sidebar, header with the theme toggle, and the community feed.
//!
//! Only reachable with a session; without one the app shows the auth page
//! instead. Signing out ends the session and the app returns home on its own.

use crate::components::{use_backend, use_theme, Icon};
use crate::utils::SignalExt;
use dgex_core::dashboard::{
    space_item_id, DashboardState, LikeState, FEED_TABS, HIGHLIGHTED_FEED_TAB, SIDEBAR_ITEMS,
    SPACE_ITEMS,
};
use dgex_core::theme::ThemeTokens;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

#[component]
pub fn DashboardPage() -> Element {
    let mut theme = use_theme();
    let backend = use_backend();
    let mut dashboard = use_signal(DashboardState::new);

    let dark = theme().dark;
    let tokens = theme().tokens();
    let section = dashboard.read().clone();
    let main_class = if dark { "dx-dash-main dark" } else { "dx-dash-main" };
    let space_active = if dark { "dx-space-item active dark" } else { "dx-space-item active light" };

    let sign_out = move |_| {
        let backend = backend.clone();
        spawn(async move {
            if let Err(e) = backend.sign_out().await {
                error!("Sign-out failed: {}", e);
            }
        });
    };

    rsx! {
        div { class: "dx-dashboard {tokens.bg}",
            aside { class: "dx-sidebar {tokens.surface} {tokens.border}",
                div { class: "dx-sidebar-body",
                    nav { class: "dx-sidebar-nav",
                        for item in SIDEBAR_ITEMS {
                            button {
                                key: "{item.id}",
                                class: "{sidebar_class(section.is_selected(item.id), tokens)}",
                                onclick: move |_| dashboard.mutate(|d| d.select(item.id)),
                                Icon { name: item.icon }
                                span { "{item.label}" }
                            }
                        }
                    }

                    div {
                        h3 { class: "dx-sidebar-heading {tokens.text_secondary}", "Mi Espacio" }
                        nav { class: "dx-sidebar-nav",
                            for label in SPACE_ITEMS {
                                SpaceItem {
                                    key: "{label}",
                                    label,
                                    active: section.is_selected(&space_item_id(label)),
                                    active_class: space_active,
                                    tokens,
                                    onselect: move |id: String| dashboard.mutate(|d| d.select(id)),
                                }
                            }
                        }
                    }
                }

                div { class: "dx-sidebar-footer {tokens.surface} {tokens.border}",
                    button { class: "dx-sign-out", onclick: sign_out,
                        Icon { name: "logout" }
                        "Cerrar Sesión"
                    }
                }
            }

            main { class: "{main_class}",
                header { class: "dx-dash-header",
                    div {
                        div { class: "dx-dash-title-row",
                            h1 { class: "dx-dash-title {tokens.text}", "{section.title()}" }
                            if section.shows_feed() {
                                span { class: "dx-pill", "General" }
                            }
                        }
                        p { class: "{tokens.text_secondary}", "{section.subtitle()}" }
                    }

                    div { class: "dx-dash-actions",
                        div { class: "dx-search",
                            Icon { name: "search", class: tokens.text_secondary }
                            input {
                                class: "dx-search-input {tokens.input_bg} {tokens.input_border} {tokens.text}",
                                r#type: "text",
                                placeholder: "Buscar...",
                            }
                        }
                        button { class: "dx-round-button {tokens.surface} {tokens.input_border} {tokens.text_secondary} {tokens.hover_bg}",
                            Icon { name: "notifications" }
                            span { class: "dx-notify-dot" }
                        }
                        button {
                            class: "dx-round-button {tokens.surface} {tokens.input_border} {tokens.text_secondary} {tokens.hover_bg}",
                            onclick: move |_| theme.mutate(|t| t.toggle()),
                            Icon { name: theme().toggle_icon() }
                        }
                        div { class: "dx-avatar", span { "US" } }
                    }
                }

                if section.shows_feed() {
                    Feed { tokens, dark }
                } else {
                    div { class: "dx-placeholder",
                        Icon { name: "construction", class: tokens.text_secondary }
                        h2 { class: "{tokens.text}", "En Construcción" }
                        p { class: "{tokens.text_secondary}", "{section.placeholder_text()}" }
                    }
                }
            }
        }
    }
}

fn sidebar_class(active: bool, tokens: ThemeTokens) -> String {
    if active {
        "dx-sidebar-item active".to_string()
    } else {
        format!("dx-sidebar-item {} {}", tokens.text_secondary, tokens.hover_bg)
    }
}

fn feed_tab_class(tab: &str, tokens: ThemeTokens) -> String {
    if tab == HIGHLIGHTED_FEED_TAB {
        "dx-feed-tab active".to_string()
    } else {
        format!("dx-feed-tab {}", tokens.text_secondary)
    }
}

#[component]
fn SpaceItem(
    label: &'static str,
    active: bool,
    active_class: &'static str,
    tokens: ThemeTokens,
    onselect: EventHandler<String>,
) -> Element {
    let class = if active {
        active_class.to_string()
    } else {
        format!("dx-space-item {} {}", tokens.text_secondary, tokens.hover_bg)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onselect.call(space_item_id(label)),
            span { class: "dx-truncate", "{label}" }
        }
    }
}

#[component]
fn Feed(tokens: ThemeTokens, dark: bool) -> Element {
    rsx! {
        div { class: "dx-feed-tabs {tokens.border}",
            for tab in FEED_TABS {
                button {
                    key: "{tab}",
                    class: "{feed_tab_class(tab, tokens)}",
                    "{tab}"
                }
            }
        }

        div { class: "dx-feed",
            PostCard { tokens, dark }
            for i in 0..2 {
                SkeletonCard { key: "{i}", tokens }
            }
        }
    }
}

#[component]
fn PostCard(tokens: ThemeTokens, dark: bool) -> Element {
    let mut like = use_signal(LikeState::default);
    let liked = like().liked;
    let like_class = if liked {
        "dx-post-action liked".to_string()
    } else {
        format!("dx-post-action {} {}", tokens.text_secondary, tokens.hover_bg)
    };
    let tag_class = if dark { "dx-post-tag dark" } else { "dx-post-tag" };
    let like_icon = if liked { "dx-filled" } else { "" };
    let secondary_action = format!("dx-post-action {} {}", tokens.text_secondary, tokens.hover_bg);

    rsx! {
        div { class: "dx-post {tokens.surface} {tokens.input_border}",
            div { class: "dx-post-head",
                div { class: "dx-post-avatar", Icon { name: "verified_user" } }
                div {
                    h3 { class: "dx-post-author {tokens.text}", "DG Capital Ex Moderador" }
                    div { class: "dx-post-meta {tokens.text_secondary}",
                        span { "hace 1 mes" }
                        span { "•" }
                        span { class: "{tag_class}", "Anuncio" }
                    }
                }
            }

            div { class: "dx-post-body",
                h2 { class: "{tokens.text}", "Bienvenidos al campus de DG Capital Ex" }
                p { class: "{tokens.text_secondary}",
                    "¡Hola a todos! Estamos emocionados de darles la bienvenida a nuestra nueva plataforma educativa y de comunidad. Aquí podrán conectar con otros estudiantes, compartir sus análisis de mercado, dudas sobre programación y acceder a recursos exclusivos."
                }
                p { class: "{tokens.text_secondary}",
                    "No olviden revisar las normas de la comunidad y presentarse en el canal general. ¡El futuro financiero comienza hoy!"
                }
            }

            div { class: "dx-post-actions {tokens.border}",
                button {
                    class: "{like_class}",
                    onclick: move |_| like.mutate(|l| l.toggle()),
                    Icon { name: "thumb_up", class: like_icon }
                    span { "{like().count}" }
                }
                button { class: "{secondary_action}",
                    Icon { name: "chat_bubble" }
                    span { "42 comentarios" }
                }
                button { class: "{secondary_action} dx-push-right",
                    Icon { name: "share" }
                    span { "Compartir" }
                }
            }
        }
    }
}

#[component]
fn SkeletonCard(tokens: ThemeTokens) -> Element {
    let bar = tokens.skeleton_bg;

    rsx! {
        div { class: "dx-post dx-skeleton {tokens.surface} {tokens.border}",
            div { class: "dx-post-head",
                div { class: "dx-skel-avatar {bar}" }
                div { class: "dx-skel-lines",
                    div { class: "dx-skel-line w-32 {bar}" }
                    div { class: "dx-skel-line w-20 {bar}" }
                }
            }
            div { class: "dx-skel-lines dx-skel-body",
                div { class: "dx-skel-line tall w-3-4 {bar}" }
                div { class: "dx-skel-line w-full {bar}" }
                div { class: "dx-skel-line w-5-6 {bar}" }
            }
            div { class: "dx-skel-actions",
                div { class: "dx-skel-button {bar}" }
                div { class: "dx-skel-button {bar}" }
            }
        }
    }
}
