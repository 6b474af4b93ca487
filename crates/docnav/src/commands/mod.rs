//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod docs;
pub(crate) mod project;
pub(crate) mod tree;

pub(crate) use check::CheckArgs;
pub(crate) use docs::DocsArgs;
pub(crate) use tree::TreeArgs;
