//! Declared sidebar tree types.
//!
//! A [`SidebarTree`] maps sidebar names to ordered lists of [`SidebarItem`]s.
//! Items are either document references, categories with children, or
//! external links. The tree is an owned recursive value, so it cannot
//! contain cycles.
//!
//! # Item syntax
//!
//! Items deserialize from the same shapes used in sidebar files:
//!
//! - `"intro"` - shorthand document reference
//! - `{ "type": "doc", "id": "intro", "label": "Start here" }`
//! - `{ "type": "category", "label": "Week 1", "items": [...] }`
//! - `{ "type": "link", "label": "GitHub", "href": "https://..." }`

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier naming one content document (e.g. `tutorial-basics/create-a-document`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Leaf reference to a single document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentReference {
    /// Referenced document.
    pub id: DocumentId,
    /// Label override for navigation. Falls back to the document's own label.
    pub label: Option<String>,
}

/// Collapsible grouping node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Display label. Must be non-empty.
    pub label: String,
    /// Child items in declared order.
    pub items: Vec<SidebarItem>,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Whether the category can be collapsed at all.
    pub collapsible: bool,
    /// Document shown when the category label itself is clicked.
    pub link: Option<DocumentId>,
}

/// External hyperlink. Never checked against known documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Node of a declared sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawItem")]
pub enum SidebarItem {
    /// Document reference.
    Doc(DocumentReference),
    /// Category with children.
    Category(Category),
    /// External link.
    Link(ExternalLink),
}

impl SidebarItem {
    /// Document reference without a label override.
    pub fn doc(id: impl Into<DocumentId>) -> Self {
        Self::Doc(DocumentReference {
            id: id.into(),
            label: None,
        })
    }

    /// Collapsible category that starts collapsed.
    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Category(Category {
            label: label.into(),
            items,
            collapsed: true,
            collapsible: true,
            link: None,
        })
    }

    /// External link.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link(ExternalLink {
            label: label.into(),
            href: href.into(),
        })
    }
}

/// Item as written in a sidebar file.
enum RawItem {
    Shorthand(DocumentId),
    Typed(TypedItem),
}

impl<'de> Deserialize<'de> for RawItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawItemVisitor)
    }
}

/// Dispatches on the item's shape so errors inside a typed item keep their
/// own message (missing field, unknown `type`).
struct RawItemVisitor;

impl<'de> Visitor<'de> for RawItemVisitor {
    type Value = RawItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document id or an item with a `type` field")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawItem, E> {
        Ok(RawItem::Shorthand(DocumentId::from(value)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<RawItem, A::Error> {
        TypedItem::deserialize(MapAccessDeserializer::new(map)).map(RawItem::Typed)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TypedItem {
    Doc {
        id: DocumentId,
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarItem>,
        #[serde(default = "default_true")]
        collapsed: bool,
        #[serde(default = "default_true")]
        collapsible: bool,
        link: Option<CategoryLink>,
    },
    Link {
        label: String,
        href: String,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum CategoryLink {
    Doc { id: DocumentId },
}

fn default_true() -> bool {
    true
}

impl From<RawItem> for SidebarItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Shorthand(id) => Self::doc(id),
            RawItem::Typed(TypedItem::Doc { id, label }) => {
                Self::Doc(DocumentReference { id, label })
            }
            RawItem::Typed(TypedItem::Category {
                label,
                items,
                collapsed,
                collapsible,
                link,
            }) => Self::Category(Category {
                label,
                items,
                collapsed,
                collapsible,
                link: link.map(|CategoryLink::Doc { id }| id),
            }),
            RawItem::Typed(TypedItem::Link { label, href }) => Self::Link(ExternalLink { label, href }),
        }
    }
}

/// Named collection of declared sidebars.
///
/// Sidebars iterate in name order, which keeps resolution output stable
/// regardless of how the source file was written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SidebarTree {
    sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl SidebarTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sidebar.
    pub fn insert(&mut self, name: impl Into<String>, items: Vec<SidebarItem>) {
        self.sidebars.insert(name.into(), items);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_sidebar(mut self, name: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        self.insert(name, items);
        self
    }

    /// Root items of a sidebar.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[SidebarItem]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Whether a sidebar with this name is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sidebars.contains_key(name)
    }

    /// Sidebar names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Iterate sidebars with their root items.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether no sidebars are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}
