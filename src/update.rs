use crate::catalog::{
    Catalog, CatalogStore, FieldConflict, merge_many, sync_store, write_collection_config,
};
use crate::classifier::ArtifactKind;
use crate::scanner::ScanReport;
use crate::utils::cancel::CancelFlag;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Merge only, write nothing.
    pub dry_run: bool,
    pub write_collection_configs: bool,
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub catalog: Catalog,
    pub conflicts: Vec<FieldConflict>,
    pub added: usize,
    /// Per-collection config files written, in catalog order.
    pub configs: Vec<PathBuf>,
}

/// Merges a scan into the rows held by `store` and writes the result back.
///
/// Collection configs are written from the merged rows of the scanned
/// collections, so they agree with the persisted table. A cancelled flag
/// stops the update before the next write.
pub fn apply_scan(
    report: ScanReport,
    store: &mut impl CatalogStore,
    options: UpdateOptions,
    cancel: &CancelFlag,
) -> Result<UpdateSummary> {
    ensure_running(cancel)?;

    let before = Catalog::from_rows(store.load_all()?);
    let rows = report.into_rows();
    let scanned: HashSet<String> = rows.iter().map(|row| row.cid.clone()).collect();

    let (catalog, conflicts) =
        merge_many(&before, rows).context("Collection list needs manual repair")?;
    for conflict in &conflicts {
        let artifact = ArtifactKind::from_column_name(&conflict.column)
            .map(|kind| kind.description())
            .unwrap_or("unknown artifact");
        warn!("Likely need to update {conflict} ({artifact})");
    }

    let added = catalog.len() - before.len();
    info!(
        "Collection list: {} rows ({} new), {} conflicts",
        catalog.len(),
        added,
        conflicts.len()
    );

    let mut summary = UpdateSummary {
        catalog,
        conflicts,
        added,
        configs: vec![],
    };
    if options.dry_run {
        return Ok(summary);
    }

    ensure_running(cancel)?;
    sync_store(store, &summary.catalog)?;

    if options.write_collection_configs {
        for row in summary
            .catalog
            .rows()
            .iter()
            .filter(|row| scanned.contains(&row.cid))
        {
            ensure_running(cancel)?;
            let path = write_collection_config(row)?;
            debug!("Wrote {:?}", path);
            summary.configs.push(path);
        }
    }

    Ok(summary)
}

fn ensure_running(cancel: &CancelFlag) -> Result<()> {
    if cancel.is_cancelled() {
        bail!("Update cancelled");
    }
    Ok(())
}
