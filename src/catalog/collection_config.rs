use super::CatalogRow;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const COLLECTION_CONFIG_FILE: &str = "config.toml";

/// Per-collection settings stored beside the collection's files. Seeded
/// from the non-empty columns of its catalog row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub general: BTreeMap<String, String>,
}

impl CollectionConfig {
    pub fn from_row(row: &CatalogRow) -> Self {
        let general = row
            .columns()
            .into_iter()
            .filter_map(|(column, value)| value.map(|v| (column, v)))
            .collect();
        Self { general }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.general.get(key).map(String::as_str)
    }

    /// `(column, path)` pairs for every spectral band file.
    pub fn band_paths(&self) -> Vec<(&str, &Path)> {
        self.general
            .iter()
            .filter(|(column, _)| crate::classifier::is_path_column(column, true))
            .map(|(column, path)| (column.as_str(), Path::new(path)))
            .collect()
    }
}

pub fn write_collection_config(row: &CatalogRow) -> Result<PathBuf, ConfigError> {
    let path = row.pathname.join(COLLECTION_CONFIG_FILE);
    let config = CollectionConfig::from_row(row);

    debug!("Writing CID ({}) configuration to {:?}", row.cid, path);
    let text = toml::to_string(&config)?;
    fs::write(&path, text).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Reads the collection's config, creating it from `row` when it is missing.
pub fn load_collection_config(row: &CatalogRow) -> Result<CollectionConfig, ConfigError> {
    let path = row.pathname.join(COLLECTION_CONFIG_FILE);

    if !path.exists() {
        info!("Building new collection config for cid: {}", row.cid);
        write_collection_config(row)?;
        return Ok(CollectionConfig::from_row(row));
    }

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}
