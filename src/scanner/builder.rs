use super::types::*;
use crate::catalog::CatalogRow;
use crate::classifier::{ArtifactKind, classify};
use crate::error::BuildError;
use crate::identifier::{CollectionIdentifier, decode, decode_folder};
use crate::utils::cancel::CancelFlag;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Builds the catalog row for one Collection ID directory.
pub fn build(dir: impl AsRef<Path>) -> Result<BuiltRow, BuildError> {
    build_with_cancel(dir.as_ref(), &CancelFlag::new())
}

/// Walks every regular file under `dir` and assigns it to its artifact
/// column. The folder name must be exactly the Collection ID. Two files
/// claiming the same column abort the build.
pub fn build_with_cancel(dir: &Path, cancel: &CancelFlag) -> Result<BuiltRow, BuildError> {
    let identifier = decode_folder(dir)?;
    let mut row = CatalogRow::new(&identifier, dir);
    let mut warnings = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        if cancel.is_cancelled() {
            return Err(BuildError::Cancelled {
                path: dir.to_path_buf(),
            });
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(BuildError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(source) => {
                let warning = ClassificationWarning::Unreadable {
                    path: source.path().unwrap_or(dir).to_path_buf(),
                    reason: source.to_string(),
                };
                debug!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let record = match classify_entry(entry.path(), &identifier) {
            Ok(record) => record,
            Err(warning) => {
                debug!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        if let Some(existing) = row.files.get(record.kind) {
            return Err(BuildError::DuplicateFileSlot {
                kind: record.kind,
                existing_path: existing.to_path_buf(),
                new_path: record.path,
            });
        }
        row.files.set(record.kind, record.path);
    }

    Ok(BuiltRow { row, warnings })
}

fn classify_entry(
    path: &Path,
    owner: &CollectionIdentifier,
) -> Result<FileRecord, ClassificationWarning> {
    let identifier = decode(path).map_err(|error| ClassificationWarning::NotAnIdentifier {
        path: path.to_path_buf(),
        error,
    })?;

    if identifier.cid() != owner.cid() {
        return Err(ClassificationWarning::ForeignIdentifier {
            path: path.to_path_buf(),
            cid: identifier.cid().to_string(),
        });
    }

    match classify(path, &identifier) {
        ArtifactKind::Unknown => Err(ClassificationWarning::Unclassified {
            path: path.to_path_buf(),
        }),
        kind => Ok(FileRecord {
            path: path.to_path_buf(),
            kind,
            identifier,
        }),
    }
}
