//! Sidecar bucket configuration

use crate::error::{Result, SorterError};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default sidecar file name looked up inside the opened folder
pub const DEFAULT_SIDECAR_NAME: &str = "imageSegregator.json";

/// A named destination folder with an optional single-key shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub destination: PathBuf,
    pub hotkey: Option<char>,
}

/// One record of the sidecar file as written on disk
#[derive(Debug, Deserialize)]
struct BucketRecord {
    value: String,
    path: String,
    #[serde(default)]
    key: Option<String>,
}

/// A record that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Zero-based position of the record in the file
    pub record: usize,
    pub reason: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {} skipped: {}", self.record + 1, self.reason)
    }
}

/// Result of loading a sidecar file
#[derive(Debug, Default)]
pub struct BucketLoad {
    /// Buckets in file order
    pub buckets: Vec<Bucket>,
    pub warnings: Vec<ConfigWarning>,
}

impl From<BucketRecord> for Bucket {
    /// Relative destinations are kept as written and resolve against the
    /// working directory when the move happens.
    fn from(record: BucketRecord) -> Self {
        Self {
            label: record.value,
            destination: PathBuf::from(record.path),
            hotkey: record.key.and_then(|k| k.chars().next()),
        }
    }
}

/// Checks that `name` is a plain file name inside the opened folder
pub fn validate_sidecar_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("sidecar name cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') || name == ".." {
        return Err(format!(
            "sidecar name must be a plain file name, got '{}'",
            name
        ));
    }
    Ok(())
}

/// Loads buckets from the sidecar file at `sidecar`.
///
/// An unreadable file yields `ConfigUnreadable`; a document that is not a JSON
/// array yields `ConfigMalformed`. Individual bad records are skipped and
/// reported in `BucketLoad::warnings`.
pub fn load_buckets(sidecar: &Path) -> Result<BucketLoad> {
    let contents = fs::read_to_string(sidecar).map_err(|source| SorterError::ConfigUnreadable {
        path: sidecar.to_path_buf(),
        source,
    })?;

    parse_buckets(&contents).map_err(|reason| SorterError::ConfigMalformed {
        path: sidecar.to_path_buf(),
        reason,
    })
}

/// Parses sidecar contents; `Err` carries the reason the whole document was rejected
pub fn parse_buckets(contents: &str) -> std::result::Result<BucketLoad, String> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(contents).map_err(|e| e.to_string())?;

    let mut load = BucketLoad::default();
    for (index, value) in records.into_iter().enumerate() {
        match serde_json::from_value::<BucketRecord>(value) {
            Ok(record) => load.buckets.push(Bucket::from(record)),
            Err(e) => load.warnings.push(ConfigWarning {
                record: index,
                reason: e.to_string(),
            }),
        }
    }

    Ok(load)
}
