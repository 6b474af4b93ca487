//! Sidebar resolution.
//!
//! [`resolve`] walks every declared sidebar depth-first, checks each document
//! reference against the set of discovered documents, and tracks which
//! documents already occupy a navigation slot. Violations are collected
//! rather than raised immediately so a single run reports every problem.
//!
//! # Example
//!
//! ```
//! use docnav_sidebar::{KnownDocuments, Policy, ResolveOptions, SidebarItem, SidebarTree, resolve};
//!
//! let tree = SidebarTree::new().with_sidebar(
//!     "docs",
//!     vec![
//!         SidebarItem::doc("intro"),
//!         SidebarItem::category("Week1", vec![SidebarItem::doc("a"), SidebarItem::doc("b")]),
//!     ],
//! );
//! let known: KnownDocuments = ["intro", "a", "b"].into_iter().collect();
//!
//! let resolution = resolve(&tree, &known, &ResolveOptions::uniform(Policy::Error)).unwrap();
//! assert!(resolution.diagnostics.is_empty());
//! assert_eq!(resolution.tree.flatten("docs"), ["intro", "Week1/a", "Week1/b"]);
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::diagnostic::{Diagnostic, DiagnosticKind, ValidationError};
use crate::model::{Category, DocumentId, ExternalLink, SidebarItem, SidebarTree};
use crate::policy::{ResolveOptions, Severity};

/// Set of document identifiers discovered on disk.
#[derive(Clone, Debug, Default)]
pub struct KnownDocuments {
    ids: HashSet<DocumentId>,
}

impl KnownDocuments {
    /// Whether a document with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of known documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no documents are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<I: Into<DocumentId>> FromIterator<I> for KnownDocuments {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of checking a single reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStatus {
    /// Known document in its first navigation slot.
    Resolved,
    /// No such document. Takes precedence over [`Duplicate`](Self::Duplicate).
    Broken,
    /// Known document already placed earlier in the tree.
    Duplicate,
}

/// Document reference annotated with its resolution status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    /// Referenced document.
    pub id: DocumentId,
    /// Label override from the declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Resolution outcome.
    pub status: ReferenceStatus,
}

/// Category with resolved children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedCategory {
    /// Display label.
    pub label: String,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Whether the category can be collapsed.
    pub collapsible: bool,
    /// Category index document, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ResolvedReference>,
    /// Children in declared order.
    pub items: Vec<ResolvedItem>,
}

/// Resolved counterpart of [`SidebarItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedItem {
    /// Document reference.
    Doc(ResolvedReference),
    /// Category.
    Category(ResolvedCategory),
    /// External link, passed through unchanged.
    Link(ExternalLink),
}

/// Declared tree with every reference annotated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedTree {
    sidebars: BTreeMap<String, Vec<ResolvedItem>>,
}

impl ResolvedTree {
    /// Root items of a resolved sidebar.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ResolvedItem]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Iterate sidebars with their root items, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResolvedItem])> {
        self.sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Document slots of a sidebar in navigation order.
    ///
    /// Each slot is the enclosing category labels and the document id joined
    /// with `/`, e.g. `Week1/a`. A category index document occupies the slot
    /// before the category's children. Returns an empty list for unknown
    /// sidebars.
    #[must_use]
    pub fn flatten(&self, name: &str) -> Vec<String> {
        let mut slots = Vec::new();
        if let Some(items) = self.sidebars.get(name) {
            let mut trail = Vec::new();
            flatten_items(items, &mut trail, &mut slots);
        }
        slots
    }
}

fn flatten_items<'a>(items: &'a [ResolvedItem], trail: &mut Vec<&'a str>, slots: &mut Vec<String>) {
    for item in items {
        match item {
            ResolvedItem::Doc(reference) => slots.push(slot_path(trail, &reference.id)),
            ResolvedItem::Category(category) => {
                trail.push(&category.label);
                if let Some(link) = &category.link {
                    slots.push(slot_path(trail, &link.id));
                }
                flatten_items(&category.items, trail, slots);
                trail.pop();
            }
            ResolvedItem::Link(_) => {}
        }
    }
}

fn slot_path(trail: &[&str], id: &DocumentId) -> String {
    if trail.is_empty() {
        id.to_string()
    } else {
        format!("{}/{id}", trail.join("/"))
    }
}

/// Successful resolution result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Annotated tree.
    pub tree: ResolvedTree,
    /// Warning-severity diagnostics in order of first occurrence.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a declared sidebar tree against the discovered documents.
///
/// Sidebars are visited in name order, items depth-first in declared order.
/// Every reference (leaf documents and category index links) is checked for
/// existence under `options.on_broken_link` and for an earlier slot under
/// `options.on_duplicate_id`. Categories with an empty label are always
/// reported as errors.
///
/// The function is pure: diagnostics are returned, never printed, and
/// identical inputs produce identical output.
///
/// # Errors
///
/// Returns [`ValidationError`] carrying every collected diagnostic if at
/// least one of them has error severity.
pub fn resolve(
    tree: &SidebarTree,
    known: &KnownDocuments,
    options: &ResolveOptions,
) -> Result<Resolution, ValidationError> {
    let mut resolver = Resolver {
        known,
        options,
        seen: HashSet::new(),
        diagnostics: Vec::new(),
        sidebar: "",
        trail: Vec::new(),
    };

    let sidebars = tree
        .iter()
        .map(|(name, items)| {
            resolver.sidebar = name;
            (name.to_owned(), resolver.resolve_items(items))
        })
        .collect();

    let Resolver {
        seen, diagnostics, ..
    } = resolver;

    tracing::debug!(
        sidebars = tree.len(),
        documents = seen.len(),
        diagnostics = diagnostics.len(),
        "Sidebar resolution completed"
    );

    if diagnostics.iter().any(Diagnostic::is_error) {
        return Err(ValidationError { diagnostics });
    }

    Ok(Resolution {
        tree: ResolvedTree { sidebars },
        diagnostics,
    })
}

/// Traversal state for a single [`resolve`] call.
struct Resolver<'a> {
    known: &'a KnownDocuments,
    options: &'a ResolveOptions,
    seen: HashSet<&'a DocumentId>,
    diagnostics: Vec<Diagnostic>,
    sidebar: &'a str,
    trail: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    fn resolve_items(&mut self, items: &'a [SidebarItem]) -> Vec<ResolvedItem> {
        items.iter().map(|item| self.resolve_item(item)).collect()
    }

    fn resolve_item(&mut self, item: &'a SidebarItem) -> ResolvedItem {
        match item {
            SidebarItem::Doc(reference) => ResolvedItem::Doc(ResolvedReference {
                id: reference.id.clone(),
                label: reference.label.clone(),
                status: self.check_reference(&reference.id),
            }),
            SidebarItem::Category(category) => ResolvedItem::Category(self.resolve_category(category)),
            SidebarItem::Link(link) => ResolvedItem::Link(link.clone()),
        }
    }

    fn resolve_category(&mut self, category: &'a Category) -> ResolvedCategory {
        if category.label.trim().is_empty() {
            self.record(
                DiagnosticKind::MalformedNode("category label is empty".to_owned()),
                Some(Severity::Error),
            );
        }

        self.trail.push(&category.label);
        let link = category.link.as_ref().map(|id| ResolvedReference {
            id: id.clone(),
            label: None,
            status: self.check_reference(id),
        });
        let items = self.resolve_items(&category.items);
        self.trail.pop();

        ResolvedCategory {
            label: category.label.clone(),
            collapsed: category.collapsed,
            collapsible: category.collapsible,
            link,
            items,
        }
    }

    /// Apply both policies to one reference and return its status.
    fn check_reference(&mut self, id: &'a DocumentId) -> ReferenceStatus {
        let exists = self.known.contains(id.as_str());
        if !exists {
            self.record(
                DiagnosticKind::BrokenReference(id.clone()),
                self.options.on_broken_link.severity(),
            );
        }

        let first_slot = self.seen.insert(id);
        if !first_slot {
            self.record(
                DiagnosticKind::DuplicateReference(id.clone()),
                self.options.on_duplicate_id.severity(),
            );
        }

        match (exists, first_slot) {
            (false, _) => ReferenceStatus::Broken,
            (true, false) => ReferenceStatus::Duplicate,
            (true, true) => ReferenceStatus::Resolved,
        }
    }

    fn record(&mut self, kind: DiagnosticKind, severity: Option<Severity>) {
        let Some(severity) = severity else { return };
        self.diagnostics.push(Diagnostic {
            kind,
            severity,
            sidebar: self.sidebar.to_owned(),
            trail: self.trail.iter().map(|s| (*s).to_owned()).collect(),
        });
    }
}
