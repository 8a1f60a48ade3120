//! Generic helper components

pub mod back_button;
pub mod error_display;
pub mod loading_spinner;
pub mod page_container;

pub use back_button::BackButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_container::PageContainer;
