//! Column types for primdb
//!
//! The catalog only knows three column types. Anything else is rejected
//! before it can reach the stored document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Integer
    Int,
    /// String
    Str,
    /// Boolean
    Bool,
}

impl ColumnType {
    /// Every type, in the order they are reported to users
    pub const ALL: [ColumnType; 3] = [ColumnType::Int, ColumnType::Str, ColumnType::Bool];

    /// Canonical lowercase name, as written in the catalog document
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
        }
    }

    /// Names of all allowed types
    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(ColumnType::as_str).collect()
    }
}

impl FromStr for ColumnType {
    type Err = ();

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
