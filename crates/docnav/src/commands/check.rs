//! `docnav check` command implementation.

use clap::Args;
use docnav_sidebar::{Diagnostic, Severity};

use super::project::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    project: ProjectArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Prints every diagnostic, then a summary. Warnings do not fail the
    /// command; error-severity diagnostics and navbar items naming unknown
    /// sidebars do.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or validation finds errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(self.project)?;

        output.info(&format!(
            "Source directory: {}",
            project.config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Sidebar file: {}",
            project.config.docs_resolved.sidebar_path.display()
        ));
        output.info(&format!(
            "Discovered {} document(s), {} sidebar(s)",
            project.documents.len(),
            project.sidebars.len()
        ));

        let unknown_sidebars = project.unknown_navbar_sidebars();
        for sidebar_id in &unknown_sidebars {
            output.error(&format!(
                "navbar item references unknown sidebar `{sidebar_id}`"
            ));
        }

        match project.resolve() {
            Ok(resolution) => {
                print_diagnostics(&output, &resolution.diagnostics);
                if !unknown_sidebars.is_empty() {
                    return Err(CliError::Validation(format!(
                        "navbar references {} unknown sidebar(s)",
                        unknown_sidebars.len()
                    )));
                }
                if resolution.diagnostics.is_empty() {
                    output.success("Sidebars are valid");
                } else {
                    output.warning(&format!(
                        "Sidebars are valid with {} warning(s)",
                        resolution.diagnostics.len()
                    ));
                }
                Ok(())
            }
            Err(err) => {
                print_diagnostics(&output, &err.diagnostics);
                Err(err.into())
            }
        }
    }
}

fn print_diagnostics(output: &Output, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Warning => output.warning(&format!("warning: {diagnostic}")),
            Severity::Error => output.error(&format!("error: {diagnostic}")),
        }
    }
}
