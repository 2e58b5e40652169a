//! Error types for identifier decoding, catalog building, merging and persistence.

use crate::classifier::ArtifactKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a Collection ID out of a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("No Collection ID at the start of {path:?}")]
    MalformedIdentifier { path: PathBuf },

    #[error("Invalid date {value:?} in {path:?}")]
    MalformedDate { path: PathBuf, value: String },

    #[error("Unsupported processing level {value:?} in {path:?}")]
    UnsupportedProcessingLevel { path: PathBuf, value: String },

    #[error("Unknown sensor code {value:?} in {path:?}")]
    UnknownSensor { path: PathBuf, value: char },
}

/// Failure to build the catalog row of one identifier directory.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("File cannot be set for key ({kind}_path) with existing path: {existing_path:?}. New {new_path:?}")]
    DuplicateFileSlot {
        kind: ArtifactKind,
        existing_path: PathBuf,
        new_path: PathBuf,
    },

    #[error("Failed to walk {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Scan of {path:?} was cancelled")]
    Cancelled { path: PathBuf },
}

/// Fatal catalog merge failure. The catalog is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("Multiple rows ({count}) found for CID {key}")]
    DuplicateCatalogKey { key: String, count: usize },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access catalog table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog table {path:?}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No catalog row for CID {0}")]
    MissingRow(String),

    #[error("Catalog row for CID {0} already exists")]
    RowExists(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Missing required config option: {0}")]
    Missing(&'static str),
}
