//! # Catalog Store
//!
//! JSON file persistence for the catalog. One catalog per file, the whole
//! document rewritten on every save so the file is always self-consistent.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default catalog file name, shared with the bundled viewer
pub const DEFAULT_CATALOG_FILE: &str = "crafting_data.json";

/// File-backed catalog persistence
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store for the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the catalog file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the catalog from disk
    pub fn load(&self) -> Result<Catalog> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::from(e)
                .with_operation("store::load")
                .with_context("path", self.path.display().to_string())
        })?;

        Catalog::from_json(&json).map_err(|e| {
            e.with_operation("store::load")
                .with_context("path", self.path.display().to_string())
        })
    }

    /// Load the catalog, or start empty when the file does not exist yet
    pub fn load_or_default(&self) -> Result<Catalog> {
        if self.exists() {
            self.load()
        } else {
            Ok(Catalog::new())
        }
    }

    /// Write the catalog to disk as pretty-printed JSON
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let json = catalog.to_json()?;
        std::fs::write(&self.path, json).map_err(|e| {
            Error::from(e)
                .with_operation("store::save")
                .with_context("path", self.path.display().to_string())
        })?;
        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_item("Fire", "🔥", "");
        catalog.add_item("Water", "💧", "");
        catalog.add_item("Steam", "💨", "Fire+Water");
        catalog
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("catalog.json"));

        store.save(&sample_catalog()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 3);
        assert_eq!(
            loaded.get("Steam").unwrap().recipes,
            vec!["Fire+Water".to_string()]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("missing.json"));

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.context().iter().any(|(k, _)| *k == "path"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("missing.json"));

        let catalog = store.load_or_default().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CatalogStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LoadFailed);
    }

    #[test]
    fn test_default_path() {
        let store = CatalogStore::default();
        assert_eq!(store.path(), Path::new(DEFAULT_CATALOG_FILE));
    }
}
