use super::{Catalog, CatalogRow};
use crate::error::StoreError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Table the catalog is persisted to.
pub trait CatalogStore {
    fn load_all(&self) -> Result<Vec<CatalogRow>, StoreError>;

    fn append_row(&mut self, row: &CatalogRow) -> Result<(), StoreError>;

    /// Replaces the row whose key matches `row`.
    fn update_row(&mut self, row: &CatalogRow) -> Result<(), StoreError>;

    /// Keys of every stored row, in table order.
    fn list_rows(&self) -> Result<Vec<String>, StoreError>;

    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rows: Vec<CatalogRow>,
}

impl MemoryStore {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }
}

impl CatalogStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<CatalogRow>, StoreError> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: &CatalogRow) -> Result<(), StoreError> {
        append(&mut self.rows, row)
    }

    fn update_row(&mut self, row: &CatalogRow) -> Result<(), StoreError> {
        update(&mut self.rows, row)
    }

    fn list_rows(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.rows.iter().map(|r| r.cid.clone()).collect())
    }
}

/// Catalog table kept as a JSON array of flat records, one per row.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    rows: Vec<CatalogRow>,
}

impl JsonFileStore {
    /// Reads the table at `path`. A missing file is an empty table.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            debug!("No Landsat collection list at {:?}", path);
            return Ok(Self { path, rows: vec![] });
        }

        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let rows = serde_json::from_str(&text).map_err(|source| StoreError::Format {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<CatalogRow>, StoreError> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: &CatalogRow) -> Result<(), StoreError> {
        append(&mut self.rows, row)
    }

    fn update_row(&mut self, row: &CatalogRow) -> Result<(), StoreError> {
        update(&mut self.rows, row)
    }

    fn list_rows(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.rows.iter().map(|r| r.cid.clone()).collect())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let text = serde_json::to_string_pretty(&self.rows).map_err(|source| {
            StoreError::Format {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!("Wrote {} catalog rows to {:?}", self.rows.len(), self.path);
        Ok(())
    }
}

fn append(rows: &mut Vec<CatalogRow>, row: &CatalogRow) -> Result<(), StoreError> {
    if rows.iter().any(|r| r.cid == row.cid) {
        return Err(StoreError::RowExists(row.cid.clone()));
    }
    rows.push(row.clone());
    Ok(())
}

fn update(rows: &mut [CatalogRow], row: &CatalogRow) -> Result<(), StoreError> {
    let existing = rows
        .iter_mut()
        .find(|r| r.cid == row.cid)
        .ok_or_else(|| StoreError::MissingRow(row.cid.clone()))?;
    *existing = row.clone();
    Ok(())
}

/// Writes every row of `catalog` to `store`: known keys are updated, new
/// keys appended. The store is flushed afterwards.
pub fn sync_store(store: &mut impl CatalogStore, catalog: &Catalog) -> Result<(), StoreError> {
    let stored: HashSet<String> = store.list_rows()?.into_iter().collect();

    for row in catalog.rows() {
        if stored.contains(row.key()) {
            store.update_row(row)?;
        } else {
            store.append_row(row)?;
        }
    }

    store.flush()
}
