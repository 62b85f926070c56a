//! # sentimd-store
//!
//! **Tier 4 (Persistence)**
//!
//! Analysis records kept as one JSON Lines file per owner. File names are the
//! BLAKE3 hash of the owner id, so arbitrary owner strings never reach the
//! filesystem. Every write rewrites the whole file through a temporary file
//! in the same directory and renames it into place, while holding an
//! exclusive lock on the owner's `.lock` file so concurrent writers in other
//! processes serialize instead of losing each other's records.
//!
//! ## What belongs here
//! * Appending results as records with ids and timestamps
//! * Listing, paging and dashboard aggregation
//!
//! ## What does NOT belong here
//! * Analysis or ingestion
//! * Rendering (see `sentimd-format`)

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use sentimd_types::{AnalysisRecord, AnalysisResult, AnalysisStats, SentimentDistribution};
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// Results listed per page unless asked otherwise.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Records shown on the dashboard.
pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt record on line {line} of {path}: {source}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to replace record file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

fn io_at(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// One page of records, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPage {
    pub records: Vec<AnalysisRecord>,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
}

impl RecordPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub stats: AnalysisStats,
    pub distribution: SentimentDistribution,
    pub recent: Vec<AnalysisRecord>,
}

/// Directory of per-owner record files.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open (creating if needed) the store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(io_at(&dir))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `owner`'s records.
    pub fn path_for(&self, owner: &str) -> PathBuf {
        let hash = blake3::hash(owner.as_bytes());
        self.dir.join(format!("{}.jsonl", hash.to_hex()))
    }

    fn lock_path_for(&self, owner: &str) -> PathBuf {
        self.path_for(owner).with_extension("lock")
    }

    /// Block until this process holds `owner`'s write lock. Released on drop.
    fn lock(&self, owner: &str) -> Result<File, StoreError> {
        let path = self.lock_path_for(owner);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(io_at(&path))?;
        file.lock().map_err(io_at(&path))?;
        Ok(file)
    }

    /// Records in insertion order. A missing file is an empty history.
    fn load(&self, owner: &str) -> Result<Vec<AnalysisRecord>, StoreError> {
        let path = self.path_for(owner);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_at(&path)(e)),
        };

        let mut out = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(io_at(&path))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                line: i + 1,
                source,
            })?;
            out.push(record);
        }
        Ok(out)
    }

    fn rewrite(&self, path: &Path, records: &[AnalysisRecord]) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_at(&self.dir))?;
        {
            let mut w = BufWriter::new(tmp.as_file_mut());
            for record in records {
                serde_json::to_writer(&mut w, record)?;
                w.write_all(b"\n").map_err(io_at(path))?;
            }
            w.flush().map_err(io_at(path))?;
        }
        tmp.as_file().sync_all().map_err(io_at(path))?;
        tmp.persist(path)?;
        Ok(())
    }

    /// Persist `results` for `owner`, stamped with the current UTC time.
    pub fn append(
        &self,
        owner: &str,
        results: &[AnalysisResult],
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        self.append_at(owner, results, OffsetDateTime::now_utc())
    }

    /// Persist `results` for `owner` with an explicit timestamp.
    ///
    /// Ids continue from the owner's highest id. Either every result is
    /// stored or none is. The load and rewrite happen under the owner's lock.
    pub fn append_at(
        &self,
        owner: &str,
        results: &[AnalysisResult],
        now: OffsetDateTime,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        if results.is_empty() {
            return Ok(Vec::new());
        }

        let _lock = self.lock(owner)?;
        let mut records = self.load(owner)?;
        let created_at = now.replace_nanosecond(0).unwrap_or(now).format(&Rfc3339)?;
        let first_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        let added: Vec<AnalysisRecord> = results
            .iter()
            .zip(first_id..)
            .map(|(result, id)| AnalysisRecord::from_result(id, owner, result, created_at.clone()))
            .collect();
        records.extend(added.iter().cloned());

        let path = self.path_for(owner);
        self.rewrite(&path, &records)?;
        debug!(
            path = %path.display(),
            added = added.len(),
            total = records.len(),
            "stored records"
        );
        Ok(added)
    }

    /// All of `owner`'s records, newest first.
    pub fn all(&self, owner: &str) -> Result<Vec<AnalysisRecord>, StoreError> {
        let mut records = self.load(owner)?;
        records.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(records)
    }

    pub fn recent(&self, owner: &str, limit: usize) -> Result<Vec<AnalysisRecord>, StoreError> {
        let mut records = self.all(owner)?;
        records.truncate(limit);
        Ok(records)
    }

    /// Page `page` (1-based) of `owner`'s records, newest first.
    ///
    /// `page` and `per_page` below 1 are read as 1. Pages past the end are
    /// empty.
    pub fn page(
        &self,
        owner: &str,
        page: usize,
        per_page: usize,
    ) -> Result<RecordPage, StoreError> {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let all = self.all(owner)?;
        let total = all.len();
        let records = all
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();
        Ok(RecordPage {
            records,
            page,
            per_page,
            total,
            pages: total.div_ceil(per_page),
        })
    }

    pub fn stats(&self, owner: &str) -> Result<DashboardStats, StoreError> {
        let all = self.all(owner)?;
        let stats = AnalysisStats::from_labels(&all);
        let distribution = SentimentDistribution {
            positive: stats.positive,
            negative: stats.negative,
            neutral: stats.neutral,
        };
        let recent = all.into_iter().take(RECENT_LIMIT).collect();
        Ok(DashboardStats {
            stats,
            distribution,
            recent,
        })
    }
}
