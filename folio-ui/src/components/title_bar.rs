//! Title bar view component

use dioxus::prelude::*;

/// Navigation item for the title bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Title bar with app navigation (pure, props-based)
#[component]
pub fn TitleBarView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        header { class: "flex items-center gap-6 px-6 h-12 bg-gray-900 border-b border-gray-800 shrink-0",
            span { class: "font-bold text-white tracking-wide", "folio" }
            nav { class: "flex items-center gap-4",
                for item in nav_items {
                    NavEntry { key: "{item.id}", item, on_nav_click }
                }
            }
        }
    }
}

#[component]
fn NavEntry(item: NavItem, on_nav_click: EventHandler<String>) -> Element {
    let class = if item.is_active {
        "text-white text-sm"
    } else {
        "text-gray-400 hover:text-white text-sm transition-colors"
    };
    let id = item.id.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_nav_click.call(id.clone()),
            "{item.label}"
        }
    }
}
