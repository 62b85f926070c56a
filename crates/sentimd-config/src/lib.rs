//! # sentimd-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the user configuration file.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * The `config.json` schema (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * Reading the config file from disk (see the `sentimd` crate)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use sentimd_types::TableFormat;

/// Owner used when neither `--owner` nor the config file names one.
pub const DEFAULT_OWNER: &str = "default";

/// `sentimd`: sentiment and keyword analysis for short texts, TXT and CSV files.
#[derive(Parser, Debug)]
#[command(name = "sentimd", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Owner id that results are stored under [default: "default"].
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Directory for stored results and upload scratch space.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze one text (from the argument or stdin).
    Analyze(AnalyzeArgs),

    /// Analyze every line of a TXT file or the text cells of a CSV file.
    Upload(UploadArgs),

    /// List stored results, newest first.
    Results(ResultsArgs),

    /// Show totals, sentiment distribution and the most recent results.
    Stats(StatsArgs),

    /// Write every stored result to a CSV file.
    Export(ExportArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Text to analyze. Reads stdin when omitted or `-`.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,

    /// Do not store the result.
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// TXT or CSV file to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Filename to record as the source (defaults to the file's own name).
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,

    /// Do not store the results.
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ResultsArgs {
    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page [default: 20].
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatsArgs {
    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output file or directory. Defaults to a timestamped file in the
    /// current directory.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

/// Contents of `<config_dir>/sentimd/config.json`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserConfig {
    pub owner: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub format: Option<String>, // "md", "tsv", "json"
    pub per_page: Option<usize>,
}
