use crate::catalog::CatalogRow;
use crate::classifier::ArtifactKind;
use crate::error::{BuildError, DecodeError};
use crate::identifier::CollectionIdentifier;
use std::fmt::Display;
use std::path::PathBuf;

/// A file found under an identifier directory, with the artifact it holds.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub identifier: CollectionIdentifier,
}

/// A file that was left out of its directory's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationWarning {
    /// The file name carries no Collection ID (sidecars, archives, notes).
    NotAnIdentifier { path: PathBuf, error: DecodeError },
    /// The file name belongs to a different Collection ID than its directory.
    ForeignIdentifier { path: PathBuf, cid: String },
    /// The file type tokens match no known artifact.
    Unclassified { path: PathBuf },
    /// A nested entry could not be read during the walk.
    Unreadable { path: PathBuf, reason: String },
}

impl Display for ClassificationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnIdentifier { path, error } => {
                write!(f, "Skipping {}: {}", path.display(), error)
            }
            Self::ForeignIdentifier { path, cid } => {
                write!(f, "Skipping {}: belongs to {}", path.display(), cid)
            }
            Self::Unclassified { path } => {
                write!(f, "Skipping {}: unknown file type", path.display())
            }
            Self::Unreadable { path, reason } => {
                write!(f, "Skipping {}: {}", path.display(), reason)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuiltRow {
    pub row: CatalogRow,
    pub warnings: Vec<ClassificationWarning>,
}

#[derive(Debug)]
pub struct ScanReport {
    pub built: Vec<BuiltRow>,
    pub failed: Vec<BuildError>,
}

impl ScanReport {
    pub fn rows(&self) -> impl Iterator<Item = &CatalogRow> {
        self.built.iter().map(|b| &b.row)
    }

    pub fn into_rows(self) -> Vec<CatalogRow> {
        self.built.into_iter().map(|b| b.row).collect()
    }
}
