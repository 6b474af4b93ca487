//! Loading shared by all commands: config, documents and sidebars.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_scan::{DiscoveredDocument, ScanOptions, Scanner, document_links, known_documents};
use docnav_sidebar::{
    DocumentId, DocumentLink, KnownDocuments, Policy, Resolution, SidebarTree, ValidationError,
    load_sidebars, resolve,
};

use crate::error::CliError;

/// Arguments selecting the project to operate on.
#[derive(Args, Default)]
pub(crate) struct ProjectArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Sidebar file, JSON or YAML (overrides config).
    #[arg(long)]
    sidebar: Option<PathBuf>,

    /// Policy for references to missing documents: ignore, warn or error.
    #[arg(long)]
    on_broken_link: Option<Policy>,

    /// Policy for documents placed in more than one slot: ignore, warn or error.
    #[arg(long)]
    on_duplicate_id: Option<Policy>,
}

impl ProjectArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            sidebar_path: self.sidebar,
            on_broken_link: self.on_broken_link,
            on_duplicate_id: self.on_duplicate_id,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Everything a command needs: config, discovered documents, declared sidebars.
pub(crate) struct Project {
    pub config: Config,
    pub documents: Vec<DiscoveredDocument>,
    pub sidebars: SidebarTree,
}

impl Project {
    /// Load config, discover documents and parse the sidebar file.
    pub(crate) fn load(args: ProjectArgs) -> Result<Self, CliError> {
        let config = args.load_config()?;
        let documents = discover(&config)?;
        let sidebars = load_sidebars(&config.docs_resolved.sidebar_path)?;
        tracing::info!(
            documents = documents.len(),
            sidebars = sidebars.len(),
            "Project loaded"
        );
        Ok(Self {
            config,
            documents,
            sidebars,
        })
    }

    pub(crate) fn known_documents(&self) -> KnownDocuments {
        known_documents(&self.documents)
    }

    /// Resolve the sidebars with the configured policies.
    pub(crate) fn resolve(&self) -> Result<Resolution, ValidationError> {
        resolve(&self.sidebars, &self.known_documents(), &self.config.validation)
    }

    /// Labels and routes for navigation output.
    pub(crate) fn document_links(&self) -> HashMap<DocumentId, DocumentLink> {
        document_links(
            &self.documents,
            &self.config.site.base_url,
            &self.config.docs_resolved.route_base_path,
        )
    }

    /// Navbar `docSidebar` items that name no declared sidebar.
    pub(crate) fn unknown_navbar_sidebars(&self) -> Vec<&str> {
        self.config
            .navbar
            .sidebar_ids()
            .filter(|id| !self.sidebars.contains(id))
            .collect()
    }
}

/// Discover documents under the configured source directory.
pub(crate) fn discover(config: &Config) -> Result<Vec<DiscoveredDocument>, CliError> {
    let options = ScanOptions {
        exclude: config.docs_resolved.exclude.clone(),
    };
    let scanner = Scanner::new(config.docs_resolved.source_dir.clone(), &options)?;
    Ok(scanner.scan()?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    /// Write a small site: config, two documents and a sidebar file.
    pub(crate) fn write_site(dir: &Path, sidebars: &str) -> PathBuf {
        let config_path = dir.join("docnav.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "Notes"
base_url = "/notes/"

[docs]
route_base_path = "/"

[navbar]
items = [{ type = "docSidebar", sidebar_id = "docs", label = "Docs" }]
"#,
        )
        .unwrap();

        let docs = dir.join("docs");
        fs::create_dir_all(docs.join("week1")).unwrap();
        fs::write(docs.join("intro.md"), "# Introduction\n").unwrap();
        fs::write(
            docs.join("week1").join("a.md"),
            "---\nsidebar_label: Lecture A\n---\n# A\n",
        )
        .unwrap();
        fs::write(dir.join("sidebars.json"), sidebars).unwrap();

        config_path
    }

    pub(crate) fn project_args(config_path: PathBuf) -> ProjectArgs {
        ProjectArgs {
            config: Some(config_path),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_site(temp_dir.path(), r#"{"docs": ["intro"]}"#);

        let project = Project::load(project_args(config_path)).unwrap();

        assert_eq!(project.documents.len(), 2);
        assert!(project.sidebars.contains("docs"));
        assert!(project.unknown_navbar_sidebars().is_empty());
        assert!(project.resolve().is_ok());
    }

    #[test]
    fn test_project_policy_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_site(temp_dir.path(), r#"{"docs": ["intro", "missing"]}"#);

        let strict = Project::load(project_args(config_path.clone())).unwrap();
        assert!(strict.resolve().is_err());

        let lenient = Project::load(ProjectArgs {
            on_broken_link: Some(Policy::Warn),
            ..project_args(config_path)
        })
        .unwrap();
        let resolution = lenient.resolve().unwrap();
        assert_eq!(resolution.diagnostics.len(), 1);
    }

    #[test]
    fn test_unknown_navbar_sidebar() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_site(temp_dir.path(), r#"{"tutorial": ["intro"]}"#);

        let project = Project::load(project_args(config_path)).unwrap();

        assert_eq!(project.unknown_navbar_sidebars(), vec!["docs"]);
    }

    #[test]
    fn test_document_links_use_site_routes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_site(temp_dir.path(), r#"{"docs": ["intro"]}"#);

        let project = Project::load(project_args(config_path)).unwrap();
        let links = project.document_links();

        let link = &links[&DocumentId::new("week1/a")];
        assert_eq!(link.href, "/notes/week1/a");
        assert_eq!(link.label.as_deref(), Some("Lecture A"));
    }
}
