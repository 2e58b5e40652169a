mod collection_config;
mod merge;
mod row;
mod store;

pub use collection_config::{
    COLLECTION_CONFIG_FILE, CollectionConfig, load_collection_config, write_collection_config,
};
pub use merge::{FieldConflict, merge, merge_many};
pub use row::{ArtifactPaths, CatalogRow};
pub use store::{CatalogStore, JsonFileStore, MemoryStore, sync_store};

use std::collections::HashMap;

/// Rows keyed by Collection ID, kept in insertion order.
///
/// Rows loaded from storage are taken as-is; a table that already holds a
/// repeated key is only reported once a merge touches that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CatalogRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CatalogRow> {
        self.rows.iter().find(|r| r.key() == key)
    }

    /// Keys held by more than one row.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.key()).or_default() += 1;
        }
        let mut keys: Vec<_> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(k, _)| k)
            .collect();
        keys.sort_unstable();
        keys
    }

    fn positions(&self, key: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.key() == key)
            .map(|(i, _)| i)
            .collect()
    }
}
