use crate::Route;
use dioxus::prelude::*;
use folio_ui::{AppLayoutView, NavItem, TitleBarView};

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![NavItem {
        id: "books".to_string(),
        label: "Books".to_string(),
        is_active: matches!(current_route, Route::Catalog {} | Route::BookDetail { .. }),
    }];

    rsx! {
        AppLayoutView {
            title_bar: rsx! {
                TitleBarView {
                    nav_items,
                    on_nav_click: move |id: String| {
                        if id == "books" {
                            navigator().push(Route::Catalog {});
                        }
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
