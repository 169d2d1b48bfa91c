use dgex::components::App as DgexApp;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/dgex.css");
const ICON_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:wght,FILL@100..700,0..1";

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    let level = dioxus::logger::tracing::Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = dioxus::logger::tracing::Level::INFO;

    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger failed to init: {}", e);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("DG Capital Ex")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
                .with_min_inner_size(LogicalSize::new(360.0, 600.0))
                // Dark background avoids a white flash on overscroll
                .with_transparent(false),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ICON_FONT }

        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/dgex.css")} }
        }

        DgexApp {}
    }
}
