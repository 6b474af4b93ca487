//! YAML front matter parsing for document files.
//!
//! Front matter is a YAML block delimited by `---` lines at the very start
//! of a Markdown file.

use serde::Deserialize;

/// Front matter fields that affect navigation.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    /// Replaces the last segment of the filename-derived document id.
    pub id: Option<String>,
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
    /// Route override, absolute (`/x`) or relative to the document's directory.
    pub slug: Option<String>,
}

/// Split a document into its raw front matter block and body.
///
/// Returns `None` for the front matter when the file does not start with a
/// `---` line or the block is never closed.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse a raw front matter block.
///
/// Uses serde_yaml so quoted strings and block scalars are handled.
/// An empty block yields default fields.
///
/// # Errors
///
/// Returns the YAML error if the block is malformed.
pub(crate) fn parse(raw: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(raw)
}
