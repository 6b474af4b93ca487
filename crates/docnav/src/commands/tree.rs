//! `docnav tree` command implementation.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use clap::{Args, ValueEnum};
use docnav_sidebar::{NavItem, NavKind, build_navigation};

use super::project::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Output format for the navigation tree.
#[derive(Clone, Copy, Default, ValueEnum)]
pub(crate) enum TreeFormat {
    /// Indented outline.
    #[default]
    Text,
    /// `NavItem` JSON for the site renderer.
    Json,
}

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Only print this sidebar (default: all sidebars).
    #[arg(long)]
    sidebar_id: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: TreeFormat,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or resolution fails, or the requested
    /// sidebar does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(self.project)?;
        let resolution = project.resolve()?;
        for diagnostic in &resolution.diagnostics {
            output.warning(&format!("warning: {diagnostic}"));
        }

        let names: Vec<String> = match self.sidebar_id {
            Some(name) if project.sidebars.contains(&name) => vec![name],
            Some(name) => {
                return Err(CliError::Validation(format!("unknown sidebar `{name}`")));
            }
            None => project.sidebars.names().map(ToOwned::to_owned).collect(),
        };

        let links = project.document_links();
        let navigation: BTreeMap<String, Vec<NavItem>> = names
            .into_iter()
            .map(|name| {
                let items = build_navigation(&resolution.tree, &name, &links);
                (name, items)
            })
            .collect();

        let rendered = match self.format {
            TreeFormat::Json => serde_json::to_string_pretty(&navigation)?,
            TreeFormat::Text => render_text(&navigation),
        };
        output.data(&rendered)?;
        Ok(())
    }
}

/// Render sidebars as an indented outline.
fn render_text(navigation: &BTreeMap<String, Vec<NavItem>>) -> String {
    let mut out = String::new();
    for (name, items) in navigation {
        let _ = writeln!(out, "{name}");
        render_items(&mut out, items, 1);
    }
    out.trim_end().to_owned()
}

fn render_items(out: &mut String, items: &[NavItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        let marker = match item.kind {
            NavKind::Doc => "-",
            NavKind::Category => "+",
            NavKind::Link => "~",
        };
        match &item.href {
            Some(href) => {
                let _ = writeln!(out, "{indent}{marker} {} ({href})", item.label);
            }
            None => {
                let _ = writeln!(out, "{indent}{marker} {}", item.label);
            }
        }
        render_items(out, &item.children, depth + 1);
    }
}
