//! Storage module
//!
//! Persists the catalog as a single JSON document.

pub mod store;

pub use store::{load, save, CatalogStore, Loaded, DEFAULT_STORE_PATH};
