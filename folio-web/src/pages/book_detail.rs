use crate::api;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::{BackButton, BookDetailView, ErrorDisplay, LoadingSpinner, PageContainer};

#[component]
pub fn BookDetail(book_id: String) -> Element {
    let id = book_id.clone();
    let data = use_resource(move || {
        let id = id.clone();
        async move { api::fetch_book(&id).await }
    });
    let read = data.read();

    let result = match &*read {
        Some(Ok(book)) => Ok(book.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                LoadingSpinner { message: "Loading book...".to_string() }
            };
        }
    };
    drop(read);

    match result {
        Ok(book) => {
            rsx! {
                PageContainer {
                    BackButton {
                        on_click: move |_| {
                            navigator().push(Route::Catalog {});
                        },
                    }
                    BookDetailView { book }
                }
            }
        }
        Err(e) => {
            rsx! {
                PageContainer {
                    BackButton {
                        on_click: move |_| {
                            navigator().push(Route::Catalog {});
                        },
                    }
                    ErrorDisplay { message: "Error loading data".to_string() }
                    p { class: "text-sm mt-2 text-gray-400", "{e}" }
                }
            }
        }
    }
}
