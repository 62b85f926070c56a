use anyhow::Result;
use sentimd_config as cli;
use sentimd_format as format;

use crate::config::ResolvedConfig;

pub(crate) fn handle(args: cli::StatsArgs, resolved: &ResolvedConfig) -> Result<()> {
    let store = super::open_store(resolved)?;
    let dashboard = store.stats(&resolved.owner)?;
    print!(
        "{}",
        format::render_stats(&dashboard, resolved.format(args.format))?
    );
    Ok(())
}
