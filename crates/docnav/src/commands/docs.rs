//! `docnav docs` command implementation.

use std::fmt::Write as _;

use clap::Args;
use docnav_scan::DiscoveredDocument;

use super::project::{ProjectArgs, discover};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the docs command.
#[derive(Args)]
pub(crate) struct DocsArgs {
    #[command(flatten)]
    project: ProjectArgs,
}

impl DocsArgs {
    /// List discovered documents with their titles and source files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or discovery fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.project.load_config()?;
        let documents = discover(&config)?;

        output.highlight(&format!(
            "{} document(s) in {}",
            documents.len(),
            config.docs_resolved.source_dir.display()
        ));
        if !documents.is_empty() {
            output.data(&render_listing(&documents))?;
        }
        Ok(())
    }
}

/// One tab-separated line per document: id, label, source path.
fn render_listing(documents: &[DiscoveredDocument]) -> String {
    let mut out = String::new();
    for doc in documents {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            doc.id,
            doc.label().unwrap_or("-"),
            doc.source_path.display()
        );
    }
    out.trim_end().to_owned()
}
