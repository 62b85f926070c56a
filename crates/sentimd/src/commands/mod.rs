pub(crate) mod analyze;
pub(crate) mod completions;
pub(crate) mod export;
pub(crate) mod results;
pub(crate) mod stats;
pub(crate) mod upload;

use anyhow::{Context, Result};
use sentimd_config as cli;
use sentimd_store::RecordStore;

use crate::config::ResolvedConfig;

pub(crate) fn dispatch(cli: cli::Cli, resolved: &ResolvedConfig) -> Result<()> {
    match cli.command {
        cli::Commands::Analyze(args) => analyze::handle(args, resolved),
        cli::Commands::Upload(args) => upload::handle(args, resolved),
        cli::Commands::Results(args) => results::handle(args, resolved),
        cli::Commands::Stats(args) => stats::handle(args, resolved),
        cli::Commands::Export(args) => export::handle(args, resolved),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}

pub(crate) fn open_store(resolved: &ResolvedConfig) -> Result<RecordStore> {
    let dir = resolved.store_dir();
    RecordStore::open(&dir)
        .with_context(|| format!("Failed to open record store at {}", dir.display()))
}
