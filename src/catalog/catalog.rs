//! Catalog document and catalog operations for primdb
//!
//! The catalog is a plain value. Operations take the current catalog and
//! hand back the next one together with an [`Outcome`]; they never touch
//! the disk and never print.

use super::schema::{ColumnDef, TableSchema};
use super::types::ColumnType;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The root catalog document
///
/// An empty catalog serializes as `{}`: the `tables` key is omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Table schemas by name, in storage order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    tables: IndexMap<String, TableSchema>,
    /// Root keys this model does not know about, kept as they were read
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// Check if a table exists
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Iterate over tables in storage order
    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableSchema)> {
        self.tables.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True for the canonical empty catalog
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A successful catalog change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A table was created with the given final column names (`ID` included)
    Created { table: String, columns: Vec<String> },
    /// A table was removed
    Dropped { table: String },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Created { table, columns } => {
                writeln!(f, "Table '{}' created successfully", table)?;
                write!(f, "Columns: {}", columns.join(", "))
            }
            Change::Dropped { table } => write!(f, "Table '{}' dropped successfully", table),
        }
    }
}

/// Result of a catalog operation
pub type Outcome = Result<Change>;

/// Create a table
///
/// `columns` are `(name, type)` pairs as typed by the user. On success the
/// table gets `ID:int` prepended. On failure the catalog is returned as is.
pub fn create_table<N, T>(
    mut catalog: Catalog,
    table_name: &str,
    columns: &[(N, T)],
) -> (Catalog, Outcome)
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    if catalog.table_exists(table_name) {
        return (catalog, Err(Error::DuplicateTable(table_name.to_string())));
    }

    let mut defs = Vec::with_capacity(columns.len());
    for (name, column_type) in columns {
        let name: &str = name.as_ref();
        let column_type: &str = column_type.as_ref();
        match column_type.parse::<ColumnType>() {
            Ok(ty) => defs.push(ColumnDef::new(name, ty)),
            Err(()) => {
                let err = Error::InvalidColumnType {
                    column: name.to_string(),
                    column_type: column_type.to_string(),
                    allowed: ColumnType::allowed(),
                };
                return (catalog, Err(err));
            }
        }
    }

    let schema = TableSchema::with_id(defs);
    let change = Change::Created {
        table: table_name.to_string(),
        columns: schema.column_names().into_iter().map(String::from).collect(),
    };
    catalog.tables.insert(table_name.to_string(), schema);
    debug!(table = table_name, "table created");

    (catalog, Ok(change))
}

/// Drop a table
pub fn drop_table(mut catalog: Catalog, table_name: &str) -> (Catalog, Outcome) {
    // shift_remove keeps the remaining tables in storage order
    if catalog.tables.shift_remove(table_name).is_none() {
        return (catalog, Err(Error::TableNotFound(table_name.to_string())));
    }
    debug!(table = table_name, remaining = catalog.len(), "table dropped");

    (
        catalog,
        Ok(Change::Dropped {
            table: table_name.to_string(),
        }),
    )
}

/// One row of a table listing
#[derive(Debug, Clone, PartialEq)]
pub struct TableListing {
    /// Table name
    pub name: String,
    /// Full stored column sequence
    pub columns: Vec<ColumnDef>,
}

impl fmt::Display for TableListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self.columns.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", self.name, columns.join(", "))
    }
}

/// List all tables in storage order
///
/// Returns `None` when there are no tables, so callers can say so explicitly.
pub fn list_tables(catalog: &Catalog) -> Option<Vec<TableListing>> {
    if catalog.is_empty() {
        return None;
    }

    Some(
        catalog
            .tables()
            .map(|(name, schema)| TableListing {
                name: name.to_string(),
                columns: schema.columns().to_vec(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Catalog {
        let (catalog, outcome) =
            create_table(Catalog::new(), "users", &[("name", "str"), ("active", "bool")]);
        outcome.unwrap();
        catalog
    }

    #[test]
    fn test_create_table_prepends_id() {
        let (catalog, outcome) = create_table(Catalog::new(), "users", &[("name", "str")]);

        assert_eq!(
            outcome.unwrap(),
            Change::Created {
                table: "users".to_string(),
                columns: vec!["ID".to_string(), "name".to_string()],
            }
        );
        let table = catalog.get_table("users").unwrap();
        assert_eq!(
            table.columns(),
            &[
                ColumnDef::new("ID", ColumnType::Int),
                ColumnDef::new("name", ColumnType::Str)
            ]
        );
        assert!(table.data.is_empty());
    }

    #[test]
    fn test_create_table_without_columns() {
        let (catalog, outcome) = create_table::<&str, &str>(Catalog::new(), "empty", &[]);

        assert!(outcome.is_ok());
        assert_eq!(catalog.get_table("empty").unwrap().column_names(), vec!["ID"]);
    }

    #[test]
    fn test_duplicate_table() {
        let before = users();
        let (after, outcome) = create_table(before.clone(), "users", &[("x", "int")]);

        assert!(matches!(outcome, Err(Error::DuplicateTable(name)) if name == "users"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_table_names_are_case_sensitive() {
        let (catalog, outcome) = create_table(users(), "Users", &[("x", "int")]);

        assert!(outcome.is_ok());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_invalid_column_type() {
        let before = users();
        let (after, outcome) = create_table(
            before.clone(),
            "people",
            &[("name", "str"), ("age", "float"), ("score", "double")],
        );

        match outcome {
            Err(Error::InvalidColumnType {
                column,
                column_type,
                allowed,
            }) => {
                assert_eq!(column, "age");
                assert_eq!(column_type, "float");
                assert_eq!(allowed, vec!["int", "str", "bool"]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(after, before);
        assert!(!after.table_exists("people"));
    }

    #[test]
    fn test_duplicate_checked_before_types() {
        let (_, outcome) = create_table(users(), "users", &[("age", "float")]);
        assert!(matches!(outcome, Err(Error::DuplicateTable(_))));
    }

    #[test]
    fn test_drop_last_table_yields_canonical_empty() {
        let (catalog, outcome) = drop_table(users(), "users");

        assert_eq!(
            outcome.unwrap(),
            Change::Dropped {
                table: "users".to_string()
            }
        );
        assert!(catalog.is_empty());
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "{}");
    }

    #[test]
    fn test_drop_missing_table() {
        let (catalog, outcome) = drop_table(Catalog::new(), "ghost");
        assert!(matches!(outcome, Err(Error::TableNotFound(name)) if name == "ghost"));
        assert_eq!(catalog, Catalog::new());

        let before = users();
        let (after, outcome) = drop_table(before.clone(), "ghost");
        assert!(matches!(outcome, Err(Error::TableNotFound(_))));
        assert_eq!(after, before);
    }

    #[test]
    fn test_drop_keeps_storage_order() {
        let (catalog, _) = create_table(users(), "posts", &[("title", "str")]);
        let (catalog, _) = create_table(catalog, "tags", &[("label", "str")]);
        let (catalog, outcome) = drop_table(catalog, "posts");

        assert!(outcome.is_ok());
        let names: Vec<&str> = catalog.tables().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["users", "tags"]);
    }

    #[test]
    fn test_list_tables() {
        assert_eq!(list_tables(&Catalog::new()), None);

        let (catalog, _) = create_table(users(), "posts", &[("title", "str")]);
        let rows: Vec<String> = list_tables(&catalog)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rows,
            vec![
                "users: ID:int, name:str, active:bool",
                "posts: ID:int, title:str"
            ]
        );
    }

    #[test]
    fn test_change_display() {
        let change = Change::Created {
            table: "users".to_string(),
            columns: vec!["ID".to_string(), "name".to_string()],
        };
        assert_eq!(
            change.to_string(),
            "Table 'users' created successfully\nColumns: ID, name"
        );
    }
}
