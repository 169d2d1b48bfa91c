use super::{scroll_to_top, use_scroll_visibility};
use crate::components::Icon;
use dgex_core::effects::ScrollWatcher;
use dioxus::prelude::*;

/// Chat bubble plus the scroll-to-top button that appears past the fold.
#[component]
pub fn FloatingControls() -> Element {
    let show_scroll = use_scroll_visibility(ScrollWatcher::scroll_to_top);
    let scroll_class = if show_scroll() {
        "dx-scroll-top visible"
    } else {
        "dx-scroll-top"
    };

    rsx! {
        div { class: "dx-chat",
            div { class: "dx-chat-tooltip",
                p { class: "dx-chat-title", "¿Asistencia Ex?" }
                p { class: "dx-muted",
                    "Nuestro equipo está online para resolver tus dudas sobre membresías."
                }
            }
            button { class: "dx-chat-button",
                span { class: "dx-chat-badge", "1" }
                Icon { name: "chat_bubble" }
            }
        }

        button {
            class: "{scroll_class}",
            onclick: move |_| scroll_to_top(),
            Icon { name: "north" }
        }
    }
}
