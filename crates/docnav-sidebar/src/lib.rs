//! Sidebar tree model and resolution for docnav.
//!
//! A documentation site declares its navigation as named sidebars made of
//! document references and nested categories. This crate:
//!
//! - models the declared tree ([`SidebarTree`], [`SidebarItem`]);
//! - loads it from JSON or YAML sidebar files ([`load_sidebars`]);
//! - validates it against the documents discovered on disk ([`resolve`]);
//! - turns the resolved tree into navigation nodes for rendering
//!   ([`build_navigation`]).
//!
//! Resolution never touches the filesystem and never prints. Problems are
//! returned as [`Diagnostic`]s whose severity follows the configured
//! [`Policy`] for each violation class.

mod diagnostic;
mod loader;
mod model;
mod navigation;
mod policy;
mod resolver;

pub use diagnostic::{Diagnostic, DiagnosticKind, ValidationError};
pub use loader::{SidebarError, SidebarFormat, load_sidebars, parse_sidebars};
pub use model::{Category, DocumentId, DocumentReference, ExternalLink, SidebarItem, SidebarTree};
pub use navigation::{DocumentLink, NavItem, NavKind, build_navigation};
pub use policy::{ParsePolicyError, Policy, ResolveOptions, Severity};
pub use resolver::{
    KnownDocuments, ReferenceStatus, Resolution, ResolvedCategory, ResolvedItem, ResolvedReference,
    ResolvedTree, resolve,
};
