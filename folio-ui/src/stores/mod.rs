//! Store types for UI state management
//!
//! Stores hold page-level UI state. Each derives `Store` for fine-grained
//! reactivity via lensing.

pub mod catalog;

pub use catalog::*;
