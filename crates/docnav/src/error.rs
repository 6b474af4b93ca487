//! CLI error types.

use docnav_config::ConfigError;
use docnav_scan::ScanError;
use docnav_sidebar::{SidebarError, ValidationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Resolve(#[from] ValidationError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
