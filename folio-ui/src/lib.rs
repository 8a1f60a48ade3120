//! folio-ui - Shared UI types and components for folio
//!
//! Contains display types, stores, and pure view components. Pages in
//! folio-web own data fetching and pass state + callbacks down.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
