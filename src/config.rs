//! Settings file loading.
//!
//! ```toml
//! [general]
//! image_collection_path = "/data/landsat"
//! landsat_collection_list_path = "/data/landsat/collections.json"
//! output_crs_epsg = 32611
//! warp_gsd_mpp = 30.0
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding one sub-directory per Collection ID.
    pub image_collection_path: Option<PathBuf>,
    /// Catalog table file.
    pub landsat_collection_list_path: Option<PathBuf>,
    /// Passed through to downstream reprojection tools.
    pub output_crs_epsg: Option<u32>,
    pub warp_gsd_mpp: Option<f64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces configured paths with the ones given, where present.
    pub fn with_overrides(
        mut self,
        image_collection_path: Option<PathBuf>,
        landsat_collection_list_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = image_collection_path {
            self.general.image_collection_path = Some(path);
        }
        if let Some(path) = landsat_collection_list_path {
            self.general.landsat_collection_list_path = Some(path);
        }
        self
    }

    pub fn image_collection_path(&self) -> Result<&Path, ConfigError> {
        required(
            &self.general.image_collection_path,
            "general.image_collection_path",
        )
    }

    pub fn collection_list_path(&self) -> Result<&Path, ConfigError> {
        required(
            &self.general.landsat_collection_list_path,
            "general.landsat_collection_list_path",
        )
    }

    /// Whether every option the catalog needs is set.
    pub fn is_valid(&self) -> bool {
        self.image_collection_path().is_ok() && self.collection_list_path().is_ok()
    }
}

fn required<'a>(value: &'a Option<PathBuf>, key: &'static str) -> Result<&'a Path, ConfigError> {
    value
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigError::Missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_general_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landsat.toml");
        fs::write(
            &path,
            r#"
[general]
image_collection_path = "/data/landsat"
landsat_collection_list_path = "/data/landsat/collections.json"
output_crs_epsg = 32611
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert!(config.is_valid());
        assert_eq!(
            config.image_collection_path().unwrap(),
            Path::new("/data/landsat")
        );
        assert_eq!(config.general.output_crs_epsg, Some(32611));
        assert_eq!(config.general.warp_gsd_mpp, None);
    }

    #[test]
    fn missing_options_are_reported() {
        let config = Config::default();
        assert!(!config.is_valid());
        assert!(matches!(
            config.collection_list_path(),
            Err(ConfigError::Missing("general.landsat_collection_list_path"))
        ));

        let config = config.with_overrides(Some("/scenes".into()), Some("/list.json".into()));
        assert!(config.is_valid());
    }

    #[test]
    fn rejects_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landsat.toml");
        fs::write(&path, "[general\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
