use std::path::PathBuf;

use clap::ValueEnum;
use sentimd_config::{DEFAULT_OWNER, GlobalArgs, TableFormat, UserConfig};
use sentimd_store::DEFAULT_PER_PAGE;
use tracing::warn;

pub(crate) fn load_config() -> Option<UserConfig> {
    let config_dir = dirs::config_dir()?.join("sentimd");
    let config_path = config_dir.join("config.json");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %config_path.display(), %err, "ignoring unreadable config file");
                None
            }
        }
    } else {
        None
    }
}

/// Settings after applying CLI flags, then the config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub owner: String,
    pub data_dir: PathBuf,
    pub format: TableFormat,
    pub per_page: usize,
}

impl ResolvedConfig {
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("records")
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    /// `requested` if given, else the configured format.
    pub fn format(&self, requested: Option<TableFormat>) -> TableFormat {
        requested.unwrap_or(self.format)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sentimd")
}

pub fn resolve(global: &GlobalArgs, user: Option<&UserConfig>) -> ResolvedConfig {
    let owner = global
        .owner
        .clone()
        .or_else(|| user.and_then(|c| c.owner.clone()))
        .filter(|o| !o.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OWNER.to_string());

    let data_dir = global
        .data_dir
        .clone()
        .or_else(|| user.and_then(|c| c.data_dir.clone()))
        .unwrap_or_else(default_data_dir);

    let format = user
        .and_then(|c| c.format.as_deref())
        .and_then(|s| match TableFormat::from_str(s, true) {
            Ok(f) => Some(f),
            Err(_) => {
                warn!(format = s, "ignoring unknown format in config file");
                None
            }
        })
        .unwrap_or_default();

    let per_page = user
        .and_then(|c| c.per_page)
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PER_PAGE);

    ResolvedConfig {
        owner,
        data_dir,
        format,
        per_page,
    }
}
