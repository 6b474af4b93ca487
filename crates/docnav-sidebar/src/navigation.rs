//! Navigation tree builder.
//!
//! Converts a resolved sidebar into [`NavItem`] trees for the host renderer.
//! Navigation is a view over the resolved tree: broken references are
//! dropped, labels and links are filled in from [`DocumentLink`]s.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use docnav_sidebar::{
//!     DocumentId, DocumentLink, KnownDocuments, ResolveOptions, SidebarItem, SidebarTree, build_navigation,
//!     resolve,
//! };
//!
//! let tree = SidebarTree::new().with_sidebar("docs", vec![SidebarItem::doc("intro")]);
//! let known: KnownDocuments = ["intro"].into_iter().collect();
//! let resolution = resolve(&tree, &known, &ResolveOptions::default()).unwrap();
//!
//! let mut links: HashMap<DocumentId, DocumentLink> = HashMap::new();
//! links.insert(
//!     "intro".into(),
//!     DocumentLink { label: Some("Introduction".to_owned()), href: "/intro".to_owned() },
//! );
//!
//! let nav = build_navigation(&resolution.tree, "docs", &links);
//! assert_eq!(nav[0].label, "Introduction");
//! assert_eq!(nav[0].href.as_deref(), Some("/intro"));
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::model::DocumentId;
use crate::resolver::{ReferenceStatus, ResolvedItem, ResolvedReference, ResolvedTree};

/// Display information for a discovered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentLink {
    /// Label from the document itself (sidebar label or title).
    pub label: Option<String>,
    /// Route of the rendered document.
    pub href: String,
}

/// Navigation node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    /// Link to a rendered document.
    Doc,
    /// Collapsible container.
    Category,
    /// External link.
    Link,
}

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NavKind,
    /// Display label.
    pub label: String,
    /// Link target. Categories without an index document have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Document shown by this node, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<DocumentId>,
    /// Whether a category starts collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Whether a category can be collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Build the navigation tree of one sidebar.
///
/// Document labels are taken from, in order: the label declared in the
/// sidebar, the document's own label from `links`, then the document id.
/// References with [`ReferenceStatus::Broken`] are omitted. Returns an empty
/// list for unknown sidebars.
#[must_use]
pub fn build_navigation(
    tree: &ResolvedTree,
    sidebar: &str,
    links: &HashMap<DocumentId, DocumentLink>,
) -> Vec<NavItem> {
    tree.get(sidebar)
        .map(|items| build_nav_items(items, links))
        .unwrap_or_default()
}

fn build_nav_items(items: &[ResolvedItem], links: &HashMap<DocumentId, DocumentLink>) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| build_nav_item(item, links))
        .collect()
}

/// Recursively build [`NavItem`] from a resolved item.
fn build_nav_item(item: &ResolvedItem, links: &HashMap<DocumentId, DocumentLink>) -> Option<NavItem> {
    match item {
        ResolvedItem::Doc(reference) => {
            if reference.status == ReferenceStatus::Broken {
                return None;
            }
            Some(NavItem {
                kind: NavKind::Doc,
                label: doc_label(reference, links),
                href: links.get(&reference.id).map(|link| link.href.clone()),
                doc_id: Some(reference.id.clone()),
                collapsed: None,
                collapsible: None,
                children: Vec::new(),
            })
        }
        ResolvedItem::Category(category) => {
            let index = category
                .link
                .as_ref()
                .filter(|link| link.status != ReferenceStatus::Broken);
            Some(NavItem {
                kind: NavKind::Category,
                label: category.label.clone(),
                href: index.and_then(|link| links.get(&link.id)).map(|link| link.href.clone()),
                doc_id: index.map(|link| link.id.clone()),
                collapsed: Some(category.collapsed),
                collapsible: Some(category.collapsible),
                children: build_nav_items(&category.items, links),
            })
        }
        ResolvedItem::Link(link) => Some(NavItem {
            kind: NavKind::Link,
            label: link.label.clone(),
            href: Some(link.href.clone()),
            doc_id: None,
            collapsed: None,
            collapsible: None,
            children: Vec::new(),
        }),
    }
}

fn doc_label(reference: &ResolvedReference, links: &HashMap<DocumentId, DocumentLink>) -> String {
    reference
        .label
        .clone()
        .or_else(|| links.get(&reference.id).and_then(|link| link.label.clone()))
        .unwrap_or_else(|| reference.id.to_string())
}
