//! Catalog page state store

use dioxus::prelude::*;
use folio_common::{CatalogFilter, Genre};

/// State for the catalog view
///
/// Built by the catalog page once both fetches succeed; mutated only through
/// the filter engine's operations.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Genres fetched from the backend (includes the "All Genres" sentinel)
    pub genres: Vec<Genre>,
    /// Filter over the fetched book list
    pub filter: CatalogFilter,
}
