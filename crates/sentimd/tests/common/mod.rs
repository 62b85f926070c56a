//! Shared test utilities for sentimd integration tests.
//!
//! Every command runs inside a fresh temp directory that doubles as `HOME`,
//! the XDG config/data roots and the `--data-dir`, so a developer's own
//! config file or history never leaks into a test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Write `<config_dir>/sentimd/config.json`.
    pub fn write_config(&self, json: &str) {
        let dir = self.config_dir().join("sentimd");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.json"), json).unwrap();
    }

    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `sentimd` with isolated environment, no `--data-dir`.
    pub fn bare(&self) -> Command {
        let mut cmd: Command = cargo_bin_cmd!("sentimd");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// `sentimd --data-dir <sandbox>/data`.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd
    }
}
