//! Display types for UI components
//!
//! The catalog models live in folio-common so the filter engine stays
//! framework-free; re-exported here so components and pages have a single
//! import path for everything they render.

pub use folio_common::{Book, Genre, ALL_GENRES};
