//! Shared UI components

pub mod app_layout;
pub mod book_card;
pub mod book_detail;
pub mod catalog;
pub mod helpers;
pub mod icons;
pub mod text_input;
pub mod title_bar;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use book_card::BookCard;
pub use book_detail::BookDetailView;
pub use catalog::CatalogView;
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{ImageIcon, StarIcon};
pub use text_input::{TextInput, TextInputSize};
pub use title_bar::{NavItem, TitleBarView};
pub use utils::{format_price, format_release_date};
