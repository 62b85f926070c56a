use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use sentimd_analysis::Analyzer;
use sentimd_config as cli;
use sentimd_format as format;
use sentimd_types::SourceType;
use tracing::info;

use crate::config::ResolvedConfig;

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

pub(crate) fn handle(args: cli::AnalyzeArgs, resolved: &ResolvedConfig) -> Result<()> {
    let text = match args.text.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(text) => text.to_string(),
    };

    let Some(result) = Analyzer::new().analyze(text.trim()) else {
        bail!("No text provided");
    };

    if !args.no_save {
        let store = super::open_store(resolved)?;
        let saved = store
            .append(&resolved.owner, std::slice::from_ref(&result))
            .context("Failed to save analysis")?;
        info!(
            owner = %resolved.owner,
            id = saved.first().map(|r| r.id),
            sentiment = %result.sentiment,
            "saved analysis"
        );
    }

    let receipt = format::analysis_receipt(SourceType::Text, None, vec![result]);
    print!(
        "{}",
        format::render_analysis(&receipt, resolved.format(args.format))?
    );
    Ok(())
}
