//! Error types for primdb
//!
//! This module defines all error types used by the catalog, the store and the shell.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for primdb
#[derive(Error, Debug)]
pub enum Error {
    // ========== Catalog Errors ==========
    #[error("Catalog error: table '{0}' already exists")]
    DuplicateTable(String),

    #[error(
        "Catalog error: invalid type '{column_type}' for column '{column}', allowed types: {}",
        .allowed.join(", ")
    )]
    InvalidColumnType {
        column: String,
        column_type: String,
        allowed: Vec<&'static str>,
    },

    #[error("Catalog error: table '{0}' does not exist")]
    TableNotFound(String),

    // ========== Storage Errors ==========
    #[error("Storage error: file {} contains malformed JSON: {source}", .path.display())]
    StorageParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Storage error: failed to save file {}: {source}", .path.display())]
    StorageWrite { path: PathBuf, source: io::Error },

    #[error("Storage error: failed to serialize catalog: {0}")]
    StorageSerialize(serde_json::Error),

    // ========== Command Errors ==========
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid column format '{0}', use: name:type")]
    InvalidColumnSpec(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for primdb operations
pub type Result<T> = std::result::Result<T, Error>;
