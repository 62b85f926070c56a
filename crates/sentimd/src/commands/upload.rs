use std::fs;

use anyhow::{Context, Result, bail};
use sentimd_config as cli;
use sentimd_format as format;
use sentimd_ingest::{FileKind, FileProcessor, IngestError};
use sentimd_types::{AnalysisResult, SourceType};
use tracing::info;

use crate::config::ResolvedConfig;

pub(crate) fn handle(args: cli::UploadArgs, resolved: &ResolvedConfig) -> Result<()> {
    let filename = match args.name {
        Some(name) => name,
        None => args
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Path has no file name: {}", args.file.display()))?,
    };

    if FileKind::from_filename(&filename).is_none() {
        return Err(IngestError::UnsupportedFileType { filename }.into());
    }

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let processor = FileProcessor::new(resolved.upload_dir());
    let upload = processor.save_upload(&filename, &bytes)?;
    let source_name = upload.file_name().to_string();
    let processed = processor.process(&upload, &resolved.owner);
    upload.cleanup();
    let owned = processed?;

    if owned.is_empty() {
        bail!("No text content found in file");
    }

    let results: Vec<AnalysisResult> = owned.into_iter().map(|o| o.result).collect();
    info!(
        file = %source_name,
        count = results.len(),
        "Successfully analyzed texts from file"
    );

    if !args.no_save {
        let store = super::open_store(resolved)?;
        store
            .append(&resolved.owner, &results)
            .context("Failed to save analyses")?;
    }

    let receipt = format::analysis_receipt(SourceType::File, Some(source_name), results);
    print!(
        "{}",
        format::render_analysis(&receipt, resolved.format(args.format))?
    );
    Ok(())
}
