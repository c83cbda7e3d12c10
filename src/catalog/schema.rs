//! Schema definitions for primdb
//!
//! This module defines table schemas and column metadata as they are stored
//! in the catalog document.

use super::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the column injected at the front of every table
pub const ID_COLUMN: &str = "ID";

/// Column definition in a table
///
/// Stored as a two-element array `["name", "type"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, ColumnType)", into = "(String, ColumnType)")]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Column type
    pub column_type: ColumnType,
}

impl ColumnDef {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// The synthetic `ID:int` column
    pub fn id() -> Self {
        Self::new(ID_COLUMN, ColumnType::Int)
    }
}

impl From<(String, ColumnType)> for ColumnDef {
    fn from((name, column_type): (String, ColumnType)) -> Self {
        Self { name, column_type }
    }
}

impl From<ColumnDef> for (String, ColumnType) {
    fn from(col: ColumnDef) -> Self {
        (col.name, col.column_type)
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.column_type)
    }
}

/// Table schema - the column list plus a reserved row placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Ordered list of columns, `ID` first
    pub columns: Vec<ColumnDef>,
    /// Reserved for row storage; always empty
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    /// Unknown keys, kept as they were read
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TableSchema {
    /// Create a schema with `ID:int` prepended to the given columns
    pub fn with_id(columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        Self {
            columns: std::iter::once(ColumnDef::id()).chain(columns).collect(),
            data: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Get all columns
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
