//! Tests verifying CLI default values match documented expectations.

use clap::Parser;
use sentimd_config::{Cli, Commands, Shell, TableFormat, UserConfig};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("sentimd").chain(args.iter().copied())).unwrap()
}

#[test]
fn table_format_default_is_md() {
    assert_eq!(TableFormat::default(), TableFormat::Md);
}

#[test]
fn analyze_without_text_leaves_everything_unset() {
    let cli = parse(&["analyze"]);
    assert!(cli.global.owner.is_none());
    assert!(cli.global.data_dir.is_none());
    assert_eq!(cli.global.verbose, 0);
    match cli.command {
        Commands::Analyze(args) => {
            assert!(args.text.is_none());
            assert!(args.format.is_none());
            assert!(!args.no_save);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn results_page_defaults_to_one() {
    match parse(&["results"]).command {
        Commands::Results(args) => {
            assert_eq!(args.page, 1);
            assert!(args.per_page.is_none());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let cli = parse(&["stats", "--owner", "alice", "-vv", "--data-dir", "/tmp/x"]);
    assert_eq!(cli.global.owner.as_deref(), Some("alice"));
    assert_eq!(cli.global.verbose, 2);
    assert_eq!(cli.global.data_dir.unwrap().to_str(), Some("/tmp/x"));
}

#[test]
fn upload_requires_a_file() {
    assert!(Cli::try_parse_from(["sentimd", "upload"]).is_err());
    match parse(&["upload", "reviews.csv", "--format", "json", "--no-save"]).command {
        Commands::Upload(args) => {
            assert_eq!(args.file.to_str(), Some("reviews.csv"));
            assert_eq!(args.format, Some(TableFormat::Json));
            assert!(args.no_save);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["sentimd", "stats", "--format", "xml"]).is_err());
}

#[test]
fn completions_parse_shell() {
    match parse(&["completions", "zsh"]).command {
        Commands::Completions(args) => assert_eq!(args.shell, Shell::Zsh),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn user_config_fields_are_optional() {
    let cfg: UserConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, UserConfig::default());

    let cfg: UserConfig =
        serde_json::from_str(r#"{"owner":"carol","per_page":5,"format":"tsv"}"#).unwrap();
    assert_eq!(cfg.owner.as_deref(), Some("carol"));
    assert_eq!(cfg.per_page, Some(5));
    assert_eq!(cfg.format.as_deref(), Some("tsv"));
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
