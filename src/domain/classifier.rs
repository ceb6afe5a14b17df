use super::{discover_images, load_buckets, Bucket, ConfigWarning};
use crate::error::{Result, SorterError};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A completed move, kept for the status display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: PathBuf,
    pub to: PathBuf,
    pub bucket: usize,
    pub label: String,
    pub at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing left to classify
    Idle,
    /// The current image was moved
    Moved { record: MoveRecord, remaining: usize },
}

/// What happened while opening a folder
#[derive(Debug, Default)]
pub struct OpenReport {
    pub images: usize,
    pub warnings: Vec<ConfigWarning>,
    /// Set when the sidecar could not be used; the session then has no buckets
    pub config_error: Option<SorterError>,
}

/// State of the folder currently being sorted
#[derive(Debug, Default)]
pub struct Session {
    folder: Option<PathBuf>,
    images: Vec<PathBuf>,
    cursor: usize,
    buckets: Vec<Bucket>,
    moves: Vec<MoveRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session from already-known parts
    pub fn from_parts(folder: PathBuf, images: Vec<PathBuf>, buckets: Vec<Bucket>) -> Self {
        Self {
            folder: Some(folder),
            images,
            cursor: 0,
            buckets,
            moves: Vec::new(),
        }
    }

    /// Replaces the session with the contents of `folder`.
    ///
    /// Fails with `FolderUnreadable` without touching the current session.
    /// A missing or malformed sidecar still opens the folder, with no buckets.
    pub fn open(&mut self, folder: &Path, sidecar_name: &str) -> Result<OpenReport> {
        let root = fs::canonicalize(folder).map_err(|source| SorterError::FolderUnreadable {
            path: folder.to_path_buf(),
            source,
        })?;
        let images = discover_images(&root)?;

        let mut report = OpenReport {
            images: images.len(),
            ..Default::default()
        };

        let buckets = match load_buckets(&root.join(sidecar_name)) {
            Ok(load) => {
                for warning in &load.warnings {
                    warn!(folder = %root.display(), "{}", warning);
                }
                report.warnings = load.warnings;
                load.buckets
            }
            Err(e) => {
                warn!("{}", e);
                report.config_error = Some(e);
                Vec::new()
            }
        };

        info!(
            folder = %root.display(),
            images = images.len(),
            buckets = buckets.len(),
            "Opened folder"
        );

        *self = Self::from_parts(root, images, buckets);
        Ok(report)
    }

    /// Moves the current image into the bucket at `bucket_index`.
    ///
    /// On failure the image list and cursor are left exactly as they were.
    pub fn classify(&mut self, bucket_index: usize) -> Result<MoveOutcome> {
        if self.images.is_empty() {
            return Ok(MoveOutcome::Idle);
        }

        let bucket = self
            .buckets
            .get(bucket_index)
            .ok_or(SorterError::UnknownBucket(bucket_index))?;

        let from = self.images[self.cursor].clone();
        let to = match from.file_name() {
            Some(name) => bucket.destination.join(name),
            None => bucket.destination.clone(),
        };
        let fail = |source: io::Error| SorterError::MoveFailed {
            from: from.clone(),
            to: to.clone(),
            source,
        };

        fs::create_dir_all(&bucket.destination).map_err(fail)?;

        if fs::symlink_metadata(&to).is_ok() {
            return Err(fail(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination file already exists",
            )));
        }

        fs::rename(&from, &to).map_err(fail)?;

        self.images.remove(self.cursor);
        if self.cursor >= self.images.len() {
            self.cursor = 0;
        }

        let record = MoveRecord {
            from,
            to,
            bucket: bucket_index,
            label: bucket.label.clone(),
            at: Local::now(),
        };
        info!(
            from = %record.from.display(),
            to = %record.to.display(),
            bucket = %record.label,
            remaining = self.images.len(),
            "Moved image"
        );
        self.moves.push(record.clone());

        Ok(MoveOutcome::Moved {
            record,
            remaining: self.images.len(),
        })
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.images.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of images moved into the bucket during this session
    pub fn moved_count(&self, bucket_index: usize) -> usize {
        self.moves.iter().filter(|m| m.bucket == bucket_index).count()
    }

    pub fn total_moved(&self) -> usize {
        self.moves.len()
    }
}
