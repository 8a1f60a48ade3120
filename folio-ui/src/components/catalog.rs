//! Catalog view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogState>` and uses lenses for granular
//! reactivity. Filter mutations and navigation go through callbacks owned
//! by the page.

use crate::components::book_card::BookCard;
use crate::components::icons::ImageIcon;
use crate::components::text_input::{TextInput, TextInputSize};
use crate::display_types::{Book, Genre};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use dioxus::prelude::*;

/// Catalog view component - genre sidebar, visible-book count, title search
/// and the card grid.
#[component]
pub fn CatalogView(
    state: ReadStore<CatalogState>,
    // Filter callbacks - each one resets the other criterion
    on_genre_select: EventHandler<Genre>,
    on_search_change: EventHandler<String>,
    // Navigation callback - called with book_id when a card is clicked
    on_book_click: EventHandler<String>,
) -> Element {
    let genres = state.genres().read().clone();
    let filter = state.filter().read().clone();

    let books = filter.visible().to_vec();
    let count = filter.visible_count();
    let selected_id = filter.selected_genre().map(|g| g.id.clone());
    let query = filter.query().to_string();

    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto flex flex-col px-6",
                h1 { class: "text-3xl font-bold text-white mb-6", "Books" }
                div { class: "flex items-start gap-8",
                    GenreSidebar { genres, selected_id, on_select: on_genre_select }
                    div { class: "flex-1 flex flex-col gap-4",
                        p { class: "text-gray-400", "Showing {count} books in the database." }
                        TextInput {
                            value: query,
                            on_input: move |value: String| on_search_change.call(value),
                            size: TextInputSize::Medium,
                            placeholder: "Search...",
                        }
                        if books.is_empty() {
                            div { class: "text-center py-12",
                                div { class: "text-gray-400 mb-4",
                                    ImageIcon { class: "w-16 h-16 mx-auto" }
                                }
                                h2 { class: "text-2xl font-bold text-gray-300 mb-2",
                                    "No books match"
                                }
                                p { class: "text-gray-500", "Pick another genre or clear the search." }
                            }
                        } else {
                            BookGrid { books, on_book_click }
                        }
                    }
                }
            }
        }
    }
}

/// Genre list with the active selection highlighted
#[component]
fn GenreSidebar(
    genres: Vec<Genre>,
    selected_id: Option<String>,
    on_select: EventHandler<Genre>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-2 w-48 shrink-0",
            for genre in genres {
                GenreEntry {
                    key: "{genre.id}",
                    is_active: Some(&genre.id) == selected_id.as_ref(),
                    genre,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn GenreEntry(genre: Genre, is_active: bool, on_select: EventHandler<Genre>) -> Element {
    let base = "text-left px-3 py-2 rounded-lg shadow-md transition-colors";
    let class = if is_active {
        format!("{base} bg-gray-600 text-white")
    } else {
        format!("{base} bg-gray-800 text-gray-300 hover:bg-gray-700")
    };
    let selected = genre.clone();

    rsx! {
        button {
            class: "{class}",
            "data-testid": "genre-entry",
            onclick: move |_| on_select.call(selected.clone()),
            "{genre.name}"
        }
    }
}

/// Grid of book cards
#[component]
fn BookGrid(books: Vec<Book>, on_book_click: EventHandler<String>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
            for book in books {
                BookCard { key: "{book.id}", book, on_click: on_book_click }
            }
        }
    }
}
