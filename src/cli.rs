// CLI module for argument parsing and configuration

use crate::config::UserConfig;
use crate::domain::buckets::validate_sidecar_name;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// imgsort - sort a folder of images into buckets with one keypress
///
/// Buckets are read from a JSON file inside the opened folder
/// (imageSegregator.json by default).
#[derive(Parser, Debug, Clone)]
#[command(name = "imgsort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder to open at startup
    ///
    /// If not specified, the folder prompt is shown first.
    pub folder: Option<PathBuf>,

    /// Maximum display height in pixels; taller images are scaled down
    #[arg(long = "max-height")]
    pub max_height: Option<u32>,

    /// Name of the bucket file looked up in the opened folder
    #[arg(long = "sidecar")]
    pub sidecar: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,

    /// Write the default user config file and exit
    #[arg(long = "init-config", action = ArgAction::SetTrue)]
    pub init_config: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref folder) = self.folder {
            if !folder.exists() {
                return Err(format!("Folder does not exist: {}", folder.display()));
            }
            if !folder.is_dir() {
                return Err(format!("Path is not a folder: {}", folder.display()));
            }
        }

        if self.max_height == Some(0) {
            return Err("max-height must be greater than 0".to_string());
        }

        if let Some(ref name) = self.sidecar {
            validate_sidecar_name(name)?;
        }

        Ok(())
    }
}

/// Effective settings: CLI flags layered over the user config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub folder: Option<PathBuf>,
    pub max_height: u32,
    pub sidecar_name: String,
    pub status_interval: Duration,
}

impl AppConfig {
    pub fn resolve(args: &Args, user: &UserConfig) -> Self {
        AppConfig {
            folder: args.folder.clone(),
            max_height: args.max_height.unwrap_or(user.max_display_height).max(1),
            sidecar_name: args
                .sidecar
                .clone()
                .unwrap_or_else(|| user.sidecar_name.clone()),
            status_interval: Duration::from_millis(user.status_interval_ms.max(1)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::resolve(
            &Args {
                folder: None,
                max_height: None,
                sidecar: None,
                log_level: "info".to_string(),
                init_config: false,
            },
            &UserConfig::default(),
        )
    }
}
