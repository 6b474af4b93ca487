//! Diagnostics collected while resolving a sidebar tree.

use std::fmt;

use serde::Serialize;

use crate::model::DocumentId;
use crate::policy::Severity;

/// Problem category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Referenced document was not discovered.
    BrokenReference(DocumentId),
    /// Document already occupies an earlier navigation slot.
    DuplicateReference(DocumentId),
    /// Node cannot be rendered (e.g. empty category label).
    MalformedNode(String),
}

/// A single problem found during resolution, with its location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    /// Severity assigned by the active policy.
    pub severity: Severity,
    /// Sidebar containing the offending node.
    pub sidebar: String,
    /// Labels of the enclosing categories, outermost first.
    pub trail: Vec<String>,
}

impl Diagnostic {
    /// Document identifier involved, if the problem concerns a reference.
    #[must_use]
    pub fn document_id(&self) -> Option<&DocumentId> {
        match &self.kind {
            DiagnosticKind::BrokenReference(id) | DiagnosticKind::DuplicateReference(id) => {
                Some(id)
            }
            DiagnosticKind::MalformedNode(_) => None,
        }
    }

    /// Whether this diagnostic makes resolution fail.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    fn location(&self) -> String {
        if self.trail.is_empty() {
            format!("sidebar `{}`", self.sidebar)
        } else {
            format!("sidebar `{}` ({})", self.sidebar, self.trail.join(" > "))
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::BrokenReference(id) => {
                write!(f, "broken reference `{id}` in {}", self.location())
            }
            DiagnosticKind::DuplicateReference(id) => {
                write!(f, "duplicate reference `{id}` in {}", self.location())
            }
            DiagnosticKind::MalformedNode(reason) => {
                write!(f, "malformed node in {}: {reason}", self.location())
            }
        }
    }
}

/// Resolution failed because at least one error-severity diagnostic was recorded.
///
/// Carries every diagnostic of the run, warnings included, in traversal order.
#[derive(Debug, thiserror::Error)]
#[error("{}", summarize(.diagnostics))]
pub struct ValidationError {
    /// All diagnostics in order of first occurrence.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Document identifiers named by error-severity diagnostics, in order.
    pub fn offending_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.errors().filter_map(Diagnostic::document_id)
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    let errors: Vec<String> = diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(ToString::to_string)
        .collect();
    format!(
        "sidebar validation failed with {} error(s): {}",
        errors.len(),
        errors.join("; ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(kind: DiagnosticKind, severity: Severity, trail: &[&str]) -> Diagnostic {
        Diagnostic {
            kind,
            severity,
            sidebar: "docs".to_owned(),
            trail: trail.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn test_display_root_level() {
        let d = diagnostic(
            DiagnosticKind::BrokenReference("missing-doc".into()),
            Severity::Error,
            &[],
        );
        assert_eq!(
            d.to_string(),
            "broken reference `missing-doc` in sidebar `docs`"
        );
    }

    #[test]
    fn test_display_nested_trail() {
        let d = diagnostic(
            DiagnosticKind::DuplicateReference("a".into()),
            Severity::Warning,
            &["Week1", "Lab"],
        );
        assert_eq!(
            d.to_string(),
            "duplicate reference `a` in sidebar `docs` (Week1 > Lab)"
        );
    }

    #[test]
    fn test_validation_error_lists_only_errors() {
        let err = ValidationError {
            diagnostics: vec![
                diagnostic(
                    DiagnosticKind::DuplicateReference("a".into()),
                    Severity::Warning,
                    &[],
                ),
                diagnostic(
                    DiagnosticKind::BrokenReference("x".into()),
                    Severity::Error,
                    &[],
                ),
                diagnostic(
                    DiagnosticKind::MalformedNode("category label is empty".to_owned()),
                    Severity::Error,
                    &[],
                ),
            ],
        };

        let msg = err.to_string();
        assert!(msg.contains("2 error(s)"));
        assert!(msg.contains("`x`"));
        assert!(!msg.contains("`a`"));
        assert_eq!(
            err.offending_ids().map(DocumentId::as_str).collect::<Vec<_>>(),
            vec!["x"]
        );
    }

    #[test]
    fn test_serialize_diagnostic() {
        let d = diagnostic(
            DiagnosticKind::BrokenReference("x".into()),
            Severity::Error,
            &["Week1"],
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "broken_reference");
        assert_eq!(json["detail"], "x");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["trail"][0], "Week1");
    }
}
