//! Sidebar file loading.
//!
//! Sidebars are declared in JSON (`.json`) or YAML (`.yaml`, `.yml`) files
//! whose top level maps sidebar names to item lists.

use std::path::{Path, PathBuf};

use crate::model::SidebarTree;

/// Sidebar file syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl SidebarFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Error loading a sidebar file.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// File does not exist.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Extension is neither JSON nor YAML.
    #[error("Unsupported sidebar file format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error while reading.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// File content is not a valid sidebar declaration.
    #[error("Invalid sidebar file {}: {message}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Load sidebars from a file, choosing the parser by extension.
///
/// # Errors
///
/// Returns [`SidebarError`] if the file is missing, unreadable, has an
/// unsupported extension, or does not describe a valid sidebar tree.
pub fn load_sidebars(path: &Path) -> Result<SidebarTree, SidebarError> {
    let format =
        SidebarFormat::from_path(path).ok_or_else(|| SidebarError::UnsupportedFormat(path.to_path_buf()))?;
    if !path.exists() {
        return Err(SidebarError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SidebarError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = parse_sidebars(&content, format).map_err(|message| SidebarError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!(path = %path.display(), sidebars = tree.len(), "Loaded sidebar file");
    Ok(tree)
}

/// Parse sidebar declarations from a string.
///
/// # Errors
///
/// Returns the parser's message if the content is invalid.
pub fn parse_sidebars(content: &str, format: SidebarFormat) -> Result<SidebarTree, String> {
    match format {
        SidebarFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SidebarFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}
