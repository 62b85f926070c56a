use anyhow::Result;
use sentimd_config as cli;
use sentimd_format as format;

use crate::config::ResolvedConfig;

pub(crate) fn handle(args: cli::ResultsArgs, resolved: &ResolvedConfig) -> Result<()> {
    let store = super::open_store(resolved)?;
    let per_page = args.per_page.unwrap_or(resolved.per_page);
    let page = store.page(&resolved.owner, args.page, per_page)?;
    print!("{}", format::render_page(&page, resolved.format(args.format))?);
    Ok(())
}
