use crate::classifier::ArtifactKind;
use crate::identifier::{CollectionIdentifier, ProcessingLevel, Sensor};
use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One file path per cataloged [`ArtifactKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactPaths {
    slots: [Option<PathBuf>; ArtifactKind::CATALOGED.len()],
}

impl ArtifactPaths {
    pub fn get(&self, kind: ArtifactKind) -> Option<&Path> {
        kind.slot().and_then(|i| self.slots[i].as_deref())
    }

    /// Stores `path` for `kind` and returns whatever was there before.
    /// Unknown files have no slot and are dropped.
    pub fn set(&mut self, kind: ArtifactKind, path: impl Into<PathBuf>) -> Option<PathBuf> {
        let i = kind.slot()?;
        self.slots[i].replace(path.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, Option<&Path>)> + '_ {
        ArtifactKind::CATALOGED
            .into_iter()
            .zip(self.slots.iter().map(|p| p.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Serialize for ArtifactPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (kind, path) in self.iter() {
            map.serialize_entry(&kind.column_name(), &path)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ArtifactPaths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = BTreeMap::<String, Option<PathBuf>>::deserialize(deserializer)?;
        let mut paths = Self::default();
        for (column, path) in columns {
            if let (Some(kind), Some(path)) = (ArtifactKind::from_column_name(&column), path) {
                paths.set(kind, path);
            }
        }
        Ok(paths)
    }
}

/// A catalog entry: decoded identifier fields plus discovered artifact paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub cid: String,
    pub pathname: PathBuf,
    pub sensor: Sensor,
    pub satellite: u8,
    pub product_type: String,
    pub processing_level: ProcessingLevel,
    pub wrs2_path: Option<u16>,
    pub wrs2_row: Option<u16>,
    pub ard_col: Option<u16>,
    pub ard_row: Option<u16>,
    pub acquisition_date: NaiveDate,
    pub production_date: NaiveDate,
    pub collection_number: u8,
    #[serde(flatten)]
    pub files: ArtifactPaths,
}

impl CatalogRow {
    pub fn new(identifier: &CollectionIdentifier, pathname: impl Into<PathBuf>) -> Self {
        let level = identifier.processing_level();
        Self {
            cid: identifier.cid().to_string(),
            pathname: pathname.into(),
            sensor: identifier.sensor(),
            satellite: identifier.satellite(),
            product_type: level.product_type().to_string(),
            processing_level: level,
            wrs2_path: identifier.wrs2_path(),
            wrs2_row: identifier.wrs2_row(),
            ard_col: identifier.ard_col(),
            ard_row: identifier.ard_row(),
            acquisition_date: identifier.acquisition_date(),
            production_date: identifier.production_date(),
            collection_number: identifier.collection_number(),
            files: ArtifactPaths::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.cid
    }

    pub fn path(&self, kind: ArtifactKind) -> Option<&Path> {
        self.files.get(kind)
    }

    /// Every column as text, `None` where the cell is empty.
    pub fn columns(&self) -> Vec<(String, Option<String>)> {
        fn text(value: impl ToString) -> Option<String> {
            Some(value.to_string())
        }

        let mut columns = vec![
            ("cid".to_string(), text(&self.cid)),
            (
                "pathname".to_string(),
                Some(self.pathname.to_string_lossy().to_string()),
            ),
            ("sensor".to_string(), text(&self.sensor)),
            ("satellite".to_string(), text(&self.satellite)),
            ("product_type".to_string(), text(&self.product_type)),
            ("processing_level".to_string(), text(&self.processing_level)),
            ("wrs2_path".to_string(), self.wrs2_path.map(|v| v.to_string())),
            ("wrs2_row".to_string(), self.wrs2_row.map(|v| v.to_string())),
            ("ard_col".to_string(), self.ard_col.map(|v| v.to_string())),
            ("ard_row".to_string(), self.ard_row.map(|v| v.to_string())),
            ("acquisition_date".to_string(), text(&self.acquisition_date)),
            ("production_date".to_string(), text(&self.production_date)),
            ("collection_number".to_string(), text(&self.collection_number)),
        ];
        columns.extend(self.files.iter().map(|(kind, path)| {
            (
                kind.column_name(),
                path.map(|p| p.to_string_lossy().to_string()),
            )
        }));
        columns
    }
}
