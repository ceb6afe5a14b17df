//! imgsort - sort a folder of images into buckets from the terminal
//!
//! This crate provides the session model (image discovery, bucket loading,
//! hotkey routing and moves) together with the terminal shell driving it.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod preview;
pub mod status;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use domain::{
    discover_images, load_buckets, Bucket, BucketLoad, InputRouter, MoveOutcome, MoveRecord,
    SelectionEvent, Session,
};
pub use error::{Result, SorterError};
pub use preview::Viewer;
