//! Book card component - pure view with callbacks

use crate::components::icons::ImageIcon;
use crate::components::utils::format_price;
use crate::display_types::Book;
use dioxus::prelude::*;

/// Individual book card
///
/// Pure view component - navigation is handled via the on_click callback,
/// not direct router calls.
#[component]
pub fn BookCard(book: Book, on_click: EventHandler<String>) -> Element {
    let book_id = book.id.clone();
    let price = format_price(book.price);

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer",
            "data-testid": "book-card",
            onclick: move |_| on_click.call(book_id.clone()),
            div { class: "aspect-[2/3] bg-gray-700 flex items-center justify-center",
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
            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg mb-1 truncate",
                    title: "{book.title}",
                    "{book.title}"
                }
                if !book.subtitle.is_empty() {
                    p {
                        class: "text-gray-400 text-sm truncate",
                        title: "{book.subtitle}",
                        "{book.subtitle}"
                    }
                }
                p { class: "text-gray-400 text-sm mt-1", "Author: {book.author}" }
                p { class: "text-gray-500 text-sm", "Price: {price}" }
            }
        }
    }
}
