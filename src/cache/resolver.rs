//! Cache index resolver
//!
//! Reads directory entries only. File contents are never opened and nothing is
//! ever written to the cache directory.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::country::CountryEntry;

/// Suffix a filename must end with to count as a cached document
pub const DOCUMENT_EXTENSION: &str = ".json";

/// Reasons the cache directory could not be enumerated
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory does not exist
    #[error("cache directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The process may not list the directory
    #[error("permission denied reading cache directory: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// The path exists but is not a directory
    #[error("cache path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Any other I/O failure while opening the directory
    #[error("failed to read cache directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    fn classify(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path),
            _ if path.metadata().map(|m| !m.is_dir()).unwrap_or(false) => {
                ScanError::NotADirectory(path)
            }
            _ => ScanError::Io { path, source: err },
        }
    }
}

/// One recognized document in the cache directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CachedDocumentRef {
    /// Filename with the document extension stripped, never empty
    pub raw_name: String,
}

impl CachedDocumentRef {
    /// Recognizes a filename as a cached document.
    ///
    /// Returns `None` unless the name ends with [`DOCUMENT_EXTENSION`]
    /// (case-sensitive) and leaves a non-empty stem.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let raw_name = file_name.strip_suffix(DOCUMENT_EXTENSION)?;
        if raw_name.is_empty() {
            return None;
        }
        Some(Self {
            raw_name: raw_name.to_string(),
        })
    }
}

/// How a scan ended
#[derive(Debug)]
pub enum ScanOutcome {
    /// The directory was enumerated
    Complete,
    /// The directory could not be enumerated; entries are empty
    Failed(ScanError),
}

/// Listing together with the outcome of the scan that produced it
#[derive(Debug)]
pub struct Resolution {
    /// Entries sorted ascending by name, names unique
    pub entries: Vec<CountryEntry>,
    /// Whether the directory could be enumerated, and why not
    pub outcome: ScanOutcome,
}

impl Resolution {
    /// Whether the directory was enumerated successfully
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Complete)
    }
}

/// Lists the recognized documents in `cache_dir`, sorted by raw name.
///
/// Subdirectories and entries that fail to read are skipped. Names that
/// are not valid UTF-8 are converted lossily rather than dropped. Only a failure to open the directory itself is an error.
pub fn documents(cache_dir: &Path) -> Result<Vec<CachedDocumentRef>, ScanError> {
    let entries = fs::read_dir(cache_dir).map_err(|e| ScanError::classify(cache_dir, e))?;

    let mut docs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %cache_dir.display(), error = %err, "skipping unreadable cache entry");
                continue;
            }
        };

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();

        let Some(doc) = CachedDocumentRef::from_file_name(&file_name) else {
            continue;
        };

        if entry.path().is_dir() {
            debug!(name = %file_name, "skipping directory with document extension");
            continue;
        }

        docs.push(doc);
    }

    docs.sort();
    Ok(docs)
}

/// Scans `cache_dir` and reports the listing alongside the scan outcome.
///
/// When two documents normalize to the same name, the one whose raw name
/// sorts first (byte order) is kept.
pub fn scan(cache_dir: &Path) -> Resolution {
    let docs = match documents(cache_dir) {
        Ok(docs) => docs,
        Err(err) => {
            return Resolution {
                entries: Vec::new(),
                outcome: ScanOutcome::Failed(err),
            }
        }
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(docs.len());
    for doc in docs {
        let entry = CountryEntry::from_key(&doc.raw_name);
        if !seen.insert(entry.name.clone()) {
            debug!(raw_name = %doc.raw_name, name = %entry.name, "dropping duplicate country");
            continue;
        }
        entries.push(entry);
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Resolution {
        entries,
        outcome: ScanOutcome::Complete,
    }
}

/// Returns the country listing for `cache_dir`.
///
/// Never fails: if the directory cannot be enumerated the listing is empty
/// and the cause is logged as a warning.
pub fn resolve_countries(cache_dir: impl AsRef<Path>) -> Vec<CountryEntry> {
    let resolution = scan(cache_dir.as_ref());
    if let ScanOutcome::Failed(err) = &resolution.outcome {
        warn!(error = %err, "returning empty country listing");
    }
    resolution.entries
}
