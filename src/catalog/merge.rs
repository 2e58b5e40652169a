use super::{Catalog, CatalogRow};
use crate::classifier::ArtifactKind;
use crate::error::MergeError;
use std::fmt::Display;
use std::path::PathBuf;

/// Both rows set a column to different paths. The existing value was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConflict {
    pub key: String,
    pub column: String,
    pub destination_value: PathBuf,
    pub source_value: PathBuf,
}

impl Display for FieldConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CID: {}, Column: {}, Dest: {}, Source: {}",
            self.key,
            self.column,
            self.destination_value.display(),
            self.source_value.display()
        )
    }
}

/// Integrates `row` into a copy of `catalog`.
///
/// New keys are appended. For a known key only empty artifact columns are
/// filled in; differing values are kept and reported as conflicts. Scalar
/// identifier columns are left as they are.
pub fn merge(
    catalog: &Catalog,
    row: CatalogRow,
) -> Result<(Catalog, Vec<FieldConflict>), MergeError> {
    let mut merged = catalog.clone();
    let conflicts = merged.merge_row(row)?;
    Ok((merged, conflicts))
}

/// Merges `rows` in order, stopping at the first fatal error. On error the
/// caller's catalog is unchanged.
pub fn merge_many(
    catalog: &Catalog,
    rows: impl IntoIterator<Item = CatalogRow>,
) -> Result<(Catalog, Vec<FieldConflict>), MergeError> {
    let mut merged = catalog.clone();
    let mut conflicts = Vec::new();
    for row in rows {
        conflicts.extend(merged.merge_row(row)?);
    }
    Ok((merged, conflicts))
}

impl Catalog {
    /// Checks run before anything is written, so a failed merge leaves the
    /// catalog untouched.
    fn merge_row(&mut self, row: CatalogRow) -> Result<Vec<FieldConflict>, MergeError> {
        let matches = self.positions(row.key());

        let index = match matches.as_slice() {
            [] => {
                self.rows.push(row);
                return Ok(vec![]);
            }
            [index] => *index,
            _ => {
                return Err(MergeError::DuplicateCatalogKey {
                    key: row.key().to_string(),
                    count: matches.len(),
                });
            }
        };

        let existing = &mut self.rows[index];
        let mut conflicts = Vec::new();

        for kind in ArtifactKind::CATALOGED {
            let Some(source) = row.files.get(kind) else {
                continue;
            };
            match existing.files.get(kind) {
                None => {
                    existing.files.set(kind, source);
                }
                Some(destination) if destination == source => {}
                Some(destination) => conflicts.push(FieldConflict {
                    key: row.key().to_string(),
                    column: kind.column_name(),
                    destination_value: destination.to_path_buf(),
                    source_value: source.to_path_buf(),
                }),
            }
        }

        Ok(conflicts)
    }
}
