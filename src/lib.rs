//! primdb - A primitive table catalog written in Rust
//!
//! This library keeps schema metadata for tables (no rows, no queries):
//! - Catalog document and operations (create, drop, list tables)
//! - JSON store that loads and saves the whole catalog per command
//! - Interactive shell: command parsing and dispatch

pub mod catalog;
pub mod error;
pub mod shell;
pub mod storage;

pub use error::{Error, Result};
