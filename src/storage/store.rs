//! Catalog store for primdb
//!
//! The whole catalog lives in one JSON document. It is read in full before a
//! command runs and rewritten in full after a command mutates it.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the catalog document
pub const DEFAULT_STORE_PATH: &str = "database.json";

/// A freshly loaded catalog
#[derive(Debug)]
pub struct Loaded {
    /// The catalog; empty if the document was missing or malformed
    pub catalog: Catalog,
    /// Set when the document existed but could not be parsed
    pub diagnostic: Option<Error>,
}

/// Load the catalog at `path`
///
/// A missing file is an empty catalog. A malformed file is also an empty
/// catalog, reported through [`Loaded::diagnostic`]. Other I/O failures are
/// returned as errors.
pub fn load(path: impl AsRef<Path>) -> Result<Loaded> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no catalog file, starting empty");
            return Ok(Loaded {
                catalog: Catalog::new(),
                diagnostic: None,
            });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    // Invalid UTF-8 is a parse failure like any other malformed content
    match serde_json::from_slice::<Catalog>(&bytes) {
        Ok(catalog) => {
            debug!(path = %path.display(), tables = catalog.len(), "catalog loaded");
            Ok(Loaded {
                catalog,
                diagnostic: None,
            })
        }
        Err(source) => {
            debug!(path = %path.display(), error = %source, "malformed catalog file");
            Ok(Loaded {
                catalog: Catalog::new(),
                diagnostic: Some(Error::StorageParse {
                    path: path.to_path_buf(),
                    source,
                }),
            })
        }
    }
}

/// Save the catalog to `path`, overwriting whatever was there
pub fn save(path: impl AsRef<Path>, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(catalog)?;
    fs::write(path, json).map_err(|source| {
        debug!(path = %path.display(), error = %source, "failed to write catalog file");
        Error::StorageWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), tables = catalog.len(), "catalog saved");
    Ok(())
}

/// Four-space indented JSON with non-ASCII text left as is
fn to_pretty_json(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser).map_err(Error::StorageSerialize)?;
    Ok(buf)
}

/// A catalog store bound to one file path
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog
    pub fn load(&self) -> Result<Loaded> {
        load(&self.path)
    }

    /// Save the catalog
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        save(&self.path, catalog)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_table;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let loaded = load(dir.path().join("missing.json")).unwrap();

        assert_eq!(loaded.catalog, Catalog::new());
        assert!(loaded.diagnostic.is_none());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.catalog.is_empty());
        assert!(matches!(loaded.diagnostic, Some(Error::StorageParse { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_column_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{"tables": {"t": {"columns": [["ID", "int"], ["x", "float"]], "data": []}}}"#,
        )
        .unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.catalog.is_empty());
        assert!(loaded.diagnostic.is_some());
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, b"{\"tables\": \xff\xfe}").unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.catalog.is_empty());
        assert!(matches!(loaded.diagnostic, Some(Error::StorageParse { .. })));
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{"tables": {"t": {"columns": [["ID", "int"]], "data": [], "comment": "x"}}, "version": 2}"#,
        )
        .unwrap();

        let catalog = load(&path).unwrap().catalog;
        let (catalog, outcome) = create_table(catalog, "u", &[("name", "str")]);
        assert!(outcome.is_ok());
        save(&path, &catalog).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], 2);
        assert_eq!(value["tables"]["t"]["comment"], "x");
        assert_eq!(value["tables"]["u"]["columns"][1], serde_json::json!(["name", "str"]));
    }

    #[test]
    fn test_save_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        save(&path, &Catalog::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_save_format() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("db.json"));
        let (catalog, _) = create_table(Catalog::new(), "пользователи", &[("имя", "str")]);

        store.save(&catalog).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"пользователи\""));
        assert!(text.contains("\n    \"tables\": {"));
        assert_eq!(store.load().unwrap().catalog, catalog);
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("db.json");

        let err = save(&path, &Catalog::new()).unwrap_err();
        assert!(matches!(err, Error::StorageWrite { .. }));
    }
}
