//! Error types shared across the crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SorterError {
    #[error("Unable to open config file {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file {}: {reason}", path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("Unable to read folder {}: {source}", path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error moving {} to {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to decode image {}: {source}", path.display())]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No bucket at index {0}")]
    UnknownBucket(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SorterError {
    /// Short title used for the modal dialog that reports this error
    pub fn title(&self) -> &'static str {
        match self {
            SorterError::ConfigUnreadable { .. } | SorterError::ConfigMalformed { .. } => {
                "Config Error"
            }
            SorterError::FolderUnreadable { .. } => "Folder Error",
            SorterError::MoveFailed { .. } => "Move Failed",
            SorterError::DecodeFailed { .. } => "Decode Failed",
            _ => "Error",
        }
    }
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, SorterError>;
