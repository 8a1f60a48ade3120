use crate::api;
use crate::Route;
use dioxus::prelude::*;
use folio_common::CatalogFilter;
use folio_ui::stores::{CatalogState, CatalogStateStoreExt};
use folio_ui::{CatalogView, ErrorDisplay, LoadingSpinner, PageContainer};

#[component]
pub fn Catalog() -> Element {
    let books = use_resource(api::fetch_books);
    let genres = use_resource(api::fetch_genres);

    let books_read = books.read();
    let genres_read = genres.read();

    // Loading wins while either fetch is still in flight; an error only
    // surfaces once both have settled.
    let result = match (&*books_read, &*genres_read) {
        (None, _) | (_, None) => {
            return rsx! {
                LoadingSpinner { message: "Loading the catalog...".to_string() }
            };
        }
        (Some(Err(e)), _) | (_, Some(Err(e))) => Err(e.clone()),
        (Some(Ok(books)), Some(Ok(genres))) => Ok((books.clone(), genres.clone())),
    };
    drop(books_read);
    drop(genres_read);

    match result {
        Ok((books, genres)) => {
            let state = use_store(move || CatalogState {
                genres,
                filter: CatalogFilter::new(books),
            });

            rsx! {
                CatalogView {
                    state,
                    on_genre_select: move |genre| {
                        state.filter().write().select_genre(&genre);
                    },
                    on_search_change: move |query: String| {
                        state.filter().write().search(&query);
                    },
                    on_book_click: move |book_id: String| {
                        navigator().push(Route::BookDetail { book_id });
                    },
                }
            }
        }
        Err(e) => {
            rsx! {
                PageContainer {
                    ErrorDisplay { message: "Error loading data".to_string() }
                    p { class: "text-sm mt-2 text-gray-400", "{e}" }
                }
            }
        }
    }
}
