use std::path::PathBuf;

use anyhow::{Result, bail};
use sentimd_config as cli;
use sentimd_format as format;
use time::OffsetDateTime;
use tracing::info;

use crate::config::ResolvedConfig;

pub(crate) fn handle(args: cli::ExportArgs, resolved: &ResolvedConfig) -> Result<()> {
    let store = super::open_store(resolved)?;
    // newest first
    let records = store.all(&resolved.owner)?;
    if records.is_empty() {
        bail!("No data to export");
    }

    let name = format::export_file_name(&resolved.owner, OffsetDateTime::now_utc())?;
    let path = match args.out {
        Some(dir) if dir.is_dir() => dir.join(name),
        Some(path) => path,
        None => PathBuf::from(name),
    };

    format::write_export_to_file(&path, &records)?;
    info!(path = %path.display(), count = records.len(), "exported records");
    println!("Exported {} results to {}", records.len(), path.display());
    Ok(())
}
