//! Document discovery by filesystem walking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use docnav_sidebar::DocumentId;
use glob::Pattern;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::front_matter;
use crate::{DiscoveredDocument, ScanError};

/// File extensions treated as documents.
const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Discovery settings.
#[derive(Debug, Default, Clone)]
pub struct ScanOptions {
    /// Glob patterns, relative to the docs directory, of files to skip.
    pub exclude: Vec<String>,
}

/// Discovers documents by walking the docs directory.
///
/// The walk:
/// 1. Recurses into subdirectories, skipping hidden (`.`) and partial (`_`) entries
/// 2. Treats `.md` and `.mdx` files as documents unless excluded
/// 3. Reads front matter and the first H1 heading of each document
pub struct Scanner {
    source_dir: PathBuf,
    exclude: Vec<Pattern>,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] if an exclude pattern is not a valid glob.
    pub fn new(source_dir: PathBuf, options: &ScanOptions) -> Result<Self, ScanError> {
        let exclude: Vec<Pattern> = options
            .exclude
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| ScanError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            source_dir,
            exclude,
        })
    }

    /// Scan the docs directory and return documents sorted by id.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if a document cannot be read and
    /// [`ScanError::DuplicateId`] if two files map to the same id.
    pub fn scan(&self) -> Result<Vec<DiscoveredDocument>, ScanError> {
        let mut documents = Vec::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, &mut documents)?;
        }

        let mut by_id: HashMap<&DocumentId, &Path> = HashMap::new();
        for doc in &documents {
            if let Some(first) = by_id.insert(&doc.id, &doc.source_path) {
                return Err(ScanError::DuplicateId {
                    id: doc.id.clone(),
                    first: first.to_path_buf(),
                    second: doc.source_path.clone(),
                });
            }
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            document_count = documents.len(),
            "Document scan completed"
        );
        Ok(documents)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        documents: &mut Vec<DiscoveredDocument>,
    ) -> Result<(), ScanError> {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) if dir_path == self.source_dir => {
                return Err(ScanError::Io {
                    path: dir_path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!(path = %dir_path.display(), error = %e, "Skipping unreadable directory");
                return Ok(());
            }
        };

        // Sorted for a stable walk order
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.path(), is_dir)
            })
            .collect();
        entries.sort();

        for (path, is_dir) in entries {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            if is_dir {
                self.scan_directory(&path, documents)?;
            } else if is_document(&path) {
                let rel_path = path.strip_prefix(&self.source_dir).unwrap_or(&path);
                if self.is_excluded(rel_path) {
                    tracing::debug!(path = %rel_path.display(), "Excluded document");
                    continue;
                }
                documents.push(self.build_document(&path, rel_path)?);
            }
        }

        Ok(())
    }

    fn is_excluded(&self, rel_path: &Path) -> bool {
        let rel = to_slash_path(rel_path);
        self.exclude.iter().any(|pattern| pattern.matches(&rel))
    }

    /// Read one document file and derive its id, title and labels.
    fn build_document(&self, path: &Path, rel_path: &Path) -> Result<DiscoveredDocument, ScanError> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let (raw_front, body) = front_matter::split(&content);
        let front = match raw_front.map(front_matter::parse).transpose() {
            Ok(front) => front.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %rel_path.display(), error = %e, "Failed to parse front matter");
                front_matter::FrontMatter::default()
            }
        };

        let id = document_id(rel_path, front.id.as_deref());
        let title = front.title.or_else(|| first_heading(body));

        Ok(DiscoveredDocument {
            id,
            source_path: rel_path.to_path_buf(),
            title,
            sidebar_label: front.sidebar_label,
            slug: front.slug,
        })
    }

}

/// Text of the first H1 heading in a Markdown body.
///
/// Headings are found by parsing, so `#` lines inside code blocks never count.
fn first_heading(body: &str) -> Option<String> {
    let mut title: Option<String> = None;
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => title = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = title.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(t) = title.take().map(|t| t.trim().to_owned())
                    && !t.is_empty()
                {
                    return Some(t);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| DOCUMENT_EXTENSIONS.contains(&e))
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Derive a document id from a path relative to the docs directory.
///
/// Examples:
/// - `intro.md` -> `intro`
/// - `week1/lecture.mdx` -> `week1/lecture`
/// - `week1/lecture.md` with front matter `id: first` -> `week1/first`
pub(crate) fn document_id(rel_path: &Path, front_matter_id: Option<&str>) -> DocumentId {
    let stem = rel_path.with_extension("");
    let derived = to_slash_path(&stem);

    match front_matter_id {
        Some(id) => match derived.rsplit_once('/') {
            Some((dir, _)) => DocumentId::new(format!("{dir}/{id}")),
            None => DocumentId::new(id),
        },
        None => DocumentId::new(derived),
    }
}
