//! Document discovery for docnav.
//!
//! Walks the docs directory and reports every document that can appear in
//! a sidebar. The resulting ids form the [`KnownDocuments`] set that sidebar
//! resolution checks references against; titles, sidebar labels and slugs
//! feed the navigation output.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use docnav_scan::{ScanOptions, Scanner, known_documents};
//!
//! let scanner = Scanner::new(PathBuf::from("docs"), &ScanOptions::default())?;
//! let documents = scanner.scan()?;
//! let known = known_documents(&documents);
//! # Ok::<(), docnav_scan::ScanError>(())
//! ```

mod front_matter;
mod route;
mod scanner;

use std::collections::HashMap;
use std::path::PathBuf;

use docnav_sidebar::{DocumentId, DocumentLink, KnownDocuments};

pub use route::document_route;
pub use scanner::{ScanOptions, Scanner};

/// A document found in the docs directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredDocument {
    /// Document id (relative path without extension, or front matter override).
    pub id: DocumentId,
    /// Source file path relative to the docs directory.
    pub source_path: PathBuf,
    /// Title from front matter or the first H1 heading.
    pub title: Option<String>,
    /// Label to show in navigation instead of the title.
    pub sidebar_label: Option<String>,
    /// Route override from front matter.
    pub slug: Option<String>,
}

impl DiscoveredDocument {
    /// Navigation label: sidebar label, then title.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.sidebar_label.as_deref().or(self.title.as_deref())
    }

    /// Route of the rendered document.
    #[must_use]
    pub fn route(&self, base_url: &str, route_base_path: &str) -> String {
        match self.slug.as_deref() {
            Some(slug) => {
                let path = route::slug_doc_path(self.id.as_str(), slug);
                document_route(base_url, route_base_path, &path)
            }
            None => document_route(
                base_url,
                route_base_path,
                route::id_to_doc_path(self.id.as_str()),
            ),
        }
    }
}

/// Error during document discovery.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// File or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Exclude pattern is not a valid glob.
    #[error("Invalid exclude pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Offending pattern.
        pattern: String,
        /// Glob parser message.
        message: String,
    },
    /// Two files resolve to the same document id.
    #[error("Document id `{id}` is defined by both {} and {}", first.display(), second.display())]
    DuplicateId {
        /// Conflicting id.
        id: DocumentId,
        /// First file defining the id.
        first: PathBuf,
        /// Second file defining the id.
        second: PathBuf,
    },
}

/// Set of ids of the discovered documents.
pub fn known_documents(documents: &[DiscoveredDocument]) -> KnownDocuments {
    documents.iter().map(|doc| doc.id.clone()).collect()
}

/// Labels and routes of the discovered documents, keyed by id.
pub fn document_links(
    documents: &[DiscoveredDocument],
    base_url: &str,
    route_base_path: &str,
) -> HashMap<DocumentId, DocumentLink> {
    documents
        .iter()
        .map(|doc| {
            let link = DocumentLink {
                label: doc.label().map(ToOwned::to_owned),
                href: doc.route(base_url, route_base_path),
            };
            (doc.id.clone(), link)
        })
        .collect()
}
