use anyhow::{Context, Result, bail};
use clap::Parser;
use landsat_catalog::catalog::JsonFileStore;
use landsat_catalog::config::Config;
use landsat_catalog::scanner::{self, ClassificationWarning};
use landsat_catalog::update::{UpdateOptions, apply_scan};
use landsat_catalog::utils::cancel::CancelFlag;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "landsat-catalog")]
#[command(about = "Scan Landsat collection folders and update the collection list")]
#[command(version)]
struct Args {
    /// Settings file with a [general] section
    #[arg(short, long, env = "LANDSAT_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Folder holding one sub-folder per Collection ID
    #[arg(short, long)]
    image_collection_path: Option<PathBuf>,

    /// Collection list (catalog table) to update
    #[arg(short = 'l', long)]
    collection_list_path: Option<PathBuf>,

    /// Write a config.toml into every collection folder
    #[arg(long)]
    write_collection_configs: bool,

    /// Scan and merge without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Use verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "landsat_catalog=debug"
    } else {
        "landsat_catalog=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(
        args.image_collection_path.clone(),
        args.collection_list_path.clone(),
    );

    let root = config.image_collection_path()?.to_path_buf();
    let list_path = config.collection_list_path()?.to_path_buf();

    // Ctrl-C sets the flag; the scan and every later write check it.
    let cancel = CancelFlag::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping");
            on_signal.cancel();
        }
    });

    info!("Scanning collections in {:?}", root);
    let report = scanner::scan(root, cancel.clone()).await?;

    if cancel.is_cancelled() {
        bail!("Scan cancelled, collection list left unchanged");
    }

    for built in &report.built {
        let row = &built.row;
        debug!(
            "{}: {} {}, {} files",
            row.cid,
            row.sensor.description(),
            row.processing_level.description(),
            row.files.iter().filter(|(_, path)| path.is_some()).count()
        );
        for warning in &built.warnings {
            match warning {
                ClassificationWarning::ForeignIdentifier { .. }
                | ClassificationWarning::Unreadable { .. } => warn!("{warning}"),
                _ => debug!("{warning}"),
            }
        }
    }
    for failure in &report.failed {
        error!("{failure}");
    }

    let mut store = JsonFileStore::open(&list_path)
        .with_context(|| format!("Failed to open collection list {:?}", list_path))?;
    let options = UpdateOptions {
        dry_run: args.dry_run,
        write_collection_configs: args.write_collection_configs,
    };
    let summary = apply_scan(report, &mut store, options, &cancel)
        .with_context(|| format!("Failed to update collection list {:?}", list_path))?;

    if !summary.configs.is_empty() {
        info!("Wrote {} collection configs", summary.configs.len());
    }

    Ok(())
}
