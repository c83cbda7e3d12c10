//! Catalog module
//!
//! This module contains the catalog document, table schemas, column types and
//! the operations that mutate the catalog.

pub mod catalog;
pub mod schema;
pub mod types;

pub use catalog::{create_table, drop_table, list_tables, Catalog, Change, Outcome, TableListing};
pub use schema::{ColumnDef, TableSchema, ID_COLUMN};
pub use types::ColumnType;
