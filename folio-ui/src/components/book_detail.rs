//! Book detail view - pure rendering of a single book

use crate::components::icons::{ImageIcon, StarIcon};
use crate::components::utils::{format_price, format_release_date};
use crate::display_types::Book;
use dioxus::prelude::*;

/// Detail view for a single book: cover panel, metadata and description.
#[component]
pub fn BookDetailView(book: Book) -> Element {
    let price = format_price(book.price);
    let rrp = format_price(book.publisher_rrp);
    let released = format_release_date(&book.release_date);

    rsx! {
        div { class: "flex flex-col md:flex-row gap-8",
            div { class: "w-64 shrink-0",
                div { class: "aspect-[2/3] bg-gray-700 rounded-lg overflow-hidden flex items-center justify-center",
                    if let Some(url) = &book.cover_url {
                        img {
                            src: "{url}",
                            alt: "Cover for {book.title}",
                            class: "w-full h-full object-cover",
                        }
                    } else {
                        ImageIcon { class: "w-12 h-12 text-gray-500" }
                    }
                }
            }
            div { class: "flex-1 flex flex-col gap-4 min-w-0",
                div {
                    h1 { class: "text-3xl font-bold text-white", "{book.title}" }
                    if !book.subtitle.is_empty() {
                        p { class: "text-xl text-gray-400 mt-1", "{book.subtitle}" }
                    }
                    p { class: "text-gray-300 mt-2", "by {book.author}" }
                    if book.wish_list {
                        span { class: "inline-flex items-center gap-1 mt-2 text-yellow-400 text-sm",
                            StarIcon { class: "w-4 h-4" }
                            "On your wish list"
                        }
                    }
                }
                div { class: "flex items-baseline gap-3",
                    span { class: "text-2xl font-bold text-white", "{price}" }
                    span { class: "text-sm text-gray-500 line-through", "RRP {rrp}" }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-1 text-sm",
                    MetadataRow { label: "Genre", value: book.genre.clone() }
                    MetadataRow { label: "Format", value: book.format.clone() }
                    MetadataRow { label: "Released", value: released }
                    MetadataRow { label: "Pages", value: book.pages.to_string() }
                    MetadataRow { label: "Dimensions", value: book.dimensions.clone() }
                    MetadataRow { label: "Publisher", value: book.publisher.clone() }
                    MetadataRow { label: "ISBN", value: book.isbn.clone() }
                }
                if !book.description.is_empty() {
                    p { class: "text-gray-300 leading-relaxed", "{book.description}" }
                }
            }
        }
    }
}

#[component]
fn MetadataRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between gap-4 border-b border-gray-800 py-1",
            span { class: "text-gray-500", "{label}" }
            span { class: "text-gray-300 truncate", "{value}" }
        }
    }
}
