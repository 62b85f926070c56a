//! Temporary upload files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::FileKind;

/// Reduce an uploaded filename to a safe single path component.
///
/// The name is NFKD-decomposed and non-ASCII characters are dropped, so
/// accented letters keep their base letter. Path separators and whitespace
/// runs become `_`, anything outside ASCII letters, digits, `_`, `.` and `-`
/// is dropped, and leading or trailing `.`/`_` are stripped. May return an
/// empty string.
///
/// ```
/// use sentimd_ingest::secure_filename;
///
/// assert_eq!(secure_filename("My Reviews (final).csv"), "My_Reviews_final.csv");
/// assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
/// assert_eq!(secure_filename("résumé.txt"), "resume.txt");
/// ```
pub fn secure_filename(name: &str) -> String {
    let spaced: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// A saved upload that is removed when the guard goes away.
#[derive(Debug)]
pub struct Upload {
    path: PathBuf,
    file_name: String,
    kind: FileKind,
    removed: bool,
}

impl Upload {
    pub(crate) fn new(path: PathBuf, file_name: String, kind: FileKind) -> Self {
        Self {
            path,
            file_name,
            kind,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sanitized filename, used as the `source_name` of results.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Remove the file now instead of at drop.
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed upload"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(path = %self.path.display(), %err, "Error cleaning up file"),
        }
    }
}

impl Drop for Upload {
    fn drop(&mut self) {
        self.remove();
    }
}
