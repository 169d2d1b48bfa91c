use dioxus::prelude::*;

/// Material Symbols glyph.
#[component]
pub fn Icon(name: &'static str, #[props(default)] class: &'static str) -> Element {
    rsx! {
        span { class: "material-symbols-outlined {class}", "{name}" }
    }
}
