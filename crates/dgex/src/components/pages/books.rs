//! Book recommendations with podcast episode embeds.

use crate::components::Icon;
use dgex_core::catalog::{Book, BOOKS, PODCAST_URL};
use dioxus::prelude::*;

const PLAYER_ALLOW: &str = "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture";

#[component]
pub fn BooksPage() -> Element {
    rsx! {
        section { class: "dx-page dx-geometric",
            div { class: "dx-container dx-section-head",
                div { class: "dx-badge dx-badge-primary",
                    Icon { name: "library_books" }
                    "Biblioteca Esencial"
                }
                h2 { class: "dx-page-title",
                    "Análisis de "
                    span { class: "dx-gradient-text", "Lecturas Maestras" }
                }
                p { class: "dx-lead dx-centered",
                    "No solo ofrecemos cursos; compartimos ideas de pensadores influyentes. Encuentra análisis sobre estrategia, inversión, negocios y mentalidad."
                    br {}
                    a {
                        class: "dx-inline-link",
                        href: PODCAST_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { name: "podcasts" }
                        "Síguenos en Spotify"
                    }
                }
            }

            div { class: "dx-container dx-narrow",
                div { class: "dx-grid-2",
                    for book in BOOKS {
                        BookCard { key: "{book.title}", book }
                    }
                }
            }
        }
    }
}

#[component]
fn BookCard(book: Book) -> Element {
    let height = if book.large { "352" } else { "152" };
    let initials: String = book
        .title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_uppercase())
        .take(3)
        .collect();

    rsx! {
        div { class: "dx-book-card",
            div { class: "dx-book-cover",
                span { "{initials}" }
            }
            div { class: "dx-book-body",
                h3 { class: "dx-card-title", "{book.title}" }
                p { class: "dx-book-author", "{book.author}" }
                div { class: "dx-player",
                    iframe {
                        src: book.embed_src,
                        width: "100%",
                        height,
                        allow: PLAYER_ALLOW,
                        allowfullscreen: true,
                        "loading": "lazy",
                        title: "Spotify embed for {book.title}",
                    }
                }
            }
        }
    }
}
