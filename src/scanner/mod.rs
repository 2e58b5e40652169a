mod builder;
mod path_utils;
mod task_utils;
pub mod types;

pub use builder::{build, build_with_cancel};
pub use types::{BuiltRow, ClassificationWarning, FileRecord, ScanReport};

use crate::identifier::decode_folder;
use crate::utils::cancel::CancelFlag;
use crate::utils::progress::create_progress_bar;
use anyhow::{Context, Result};
use path_utils::{get_entries, normalize_path};
use std::path::{Path, PathBuf};
use task_utils::run_all;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

/// Builds a row for every Collection ID directory directly under `root`.
///
/// Each directory is walked on its own blocking task. Builds that fail are
/// returned in [`ScanReport::failed`] and do not affect the others.
pub async fn scan(root: PathBuf, cancel: CancelFlag) -> Result<ScanReport> {
    if !root.exists() {
        warn!("Image collection path {} does not exist", normalize_path(&root));
        return Ok(ScanReport {
            built: vec![],
            failed: vec![],
        });
    }

    let dirs: Vec<PathBuf> = get_entries(&root)
        .await
        .with_context(|| format!("Failed to list {}", normalize_path(&root)))?
        .into_iter()
        .filter(|path| is_collection_dir(path))
        .collect();

    info!(
        "Found {} collection directories under {}",
        dirs.len(),
        normalize_path(&root)
    );

    let bar = create_progress_bar(dirs.len() as u64, "Scan Landsat Collections");

    let tasks: Vec<_> = dirs
        .into_iter()
        .map(|path| {
            let cancel = cancel.clone();
            let bar = bar.clone();
            spawn_blocking(move || {
                let built = build_with_cancel(&path, &cancel);
                bar.inc(1);
                built
            })
        })
        .collect();

    let (mut built, failed) = run_all(tasks).await;
    bar.finish_and_clear();

    built.sort_by(|a, b| a.row.cid.cmp(&b.row.cid));

    Ok(ScanReport { built, failed })
}

fn is_collection_dir(path: &Path) -> bool {
    match decode_folder(path) {
        Ok(_) => true,
        Err(e) => {
            debug!("Ignoring {}: {}", normalize_path(path), e);
            false
        }
    }
}
