//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The loaded
//! [`Config`] is immutable site metadata plus the settings that drive
//! document discovery and sidebar validation.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base_url`

mod expand;

use std::path::{Path, PathBuf};

use docnav_sidebar::{Policy, ResolveOptions};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebar file path.
    pub sidebar_path: Option<PathBuf>,
    /// Override broken link policy.
    pub on_broken_link: Option<Policy>,
    /// Override duplicate id policy.
    pub on_duplicate_id: Option<Policy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata passed through to the renderer.
    pub site: SiteConfig,
    /// Locale settings.
    pub i18n: I18nConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Sidebar validation policies.
    pub validation: ResolveOptions,
    /// Navbar configuration.
    pub navbar: NavbarConfig,
    /// Footer configuration.
    pub footer: Option<FooterConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Short description shown under the title.
    pub tagline: Option<String>,
    /// Production URL origin (e.g. `https://example.github.io`).
    pub url: String,
    /// Path under `url` where the site is served. Starts and ends with `/`.
    pub base_url: String,
    /// Favicon path relative to static assets.
    pub favicon: Option<String>,
    /// Hosting organization (e.g. GitHub user or org).
    pub organization: Option<String>,
    /// Hosting project (e.g. repository name).
    pub project: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: None,
            url: "http://localhost".to_owned(),
            base_url: "/".to_owned(),
            favicon: None,
            organization: None,
            project: None,
        }
    }
}

/// Locale configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale of the default site build.
    pub default_locale: String,
    /// All locales built.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_path: Option<String>,
    route_base_path: Option<String>,
    breadcrumbs: Option<bool>,
    exclude: Vec<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory containing the Markdown documents.
    pub source_dir: PathBuf,
    /// Sidebar declaration file.
    pub sidebar_path: PathBuf,
    /// Route prefix of documents below the base URL.
    pub route_base_path: String,
    /// Whether the renderer shows breadcrumbs.
    pub breadcrumbs: bool,
    /// Glob patterns of documents to skip during discovery.
    pub exclude: Vec<String>,
}

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side.
    #[default]
    Left,
    /// Right side.
    Right,
}

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogoConfig {
    /// Alt text.
    pub alt: String,
    /// Image path.
    pub src: String,
    /// Link target when clicked.
    pub href: Option<String>,
}

/// Navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavbarItem {
    /// Link to the first document of a sidebar.
    DocSidebar {
        /// Name of the sidebar.
        sidebar_id: String,
        /// Display label.
        label: String,
        /// Placement.
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Plain hyperlink.
    Href {
        /// Target URL.
        href: String,
        /// Display label.
        label: String,
        /// Placement.
        #[serde(default)]
        position: NavbarPosition,
    },
}

/// Navbar configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Title next to the logo.
    pub title: Option<String>,
    /// Logo image.
    pub logo: Option<LogoConfig>,
    /// Entries in display order.
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    /// Sidebar names referenced by `docSidebar` items.
    pub fn sidebar_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            NavbarItem::DocSidebar { sidebar_id, .. } => Some(sidebar_id.as_str()),
            NavbarItem::Href { .. } => None,
        })
    }
}

/// Footer configuration.
#[derive(Debug, Deserialize)]
pub struct FooterConfig {
    /// Color style (`light` or `dark`).
    #[serde(default = "default_footer_style")]
    pub style: String,
    /// Copyright line.
    pub copyright: Option<String>,
}

fn default_footer_style() -> String {
    "light".to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} is not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebar_path) = &settings.sidebar_path {
            self.docs_resolved.sidebar_path.clone_from(sidebar_path);
        }
        if let Some(policy) = settings.on_broken_link {
            self.validation.on_broken_link = policy;
        }
        if let Some(policy) = settings.on_duplicate_id {
            self.validation.on_duplicate_id = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Find the nearest config file in `start` or one of its ancestors.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            i18n: I18nConfig::default(),
            docs: DocsConfigRaw::default(),
            validation: ResolveOptions::default(),
            navbar: NavbarConfig::default(),
            footer: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebar_path: base.join("sidebars.json"),
                route_base_path: "/docs".to_owned(),
                breadcrumbs: true,
                exclude: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_i18n()?;
        self.validate_docs()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_http_url(&self.site.url, "site.url")?;

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start and end with '/' (got \"{base_url}\")"
            )));
        }
        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.i18n.default_locale, "i18n.default_locale")?;
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.locales must include the default locale \"{}\"",
                self.i18n.default_locale
            )));
        }
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        if !self.docs_resolved.route_base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.route_base_path must start with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_field(&mut self.site.url, "site.url")?;
        expand::expand_field(&mut self.site.base_url, "site.base_url")?;
        for (index, item) in self.navbar.items.iter_mut().enumerate() {
            if let NavbarItem::Href { href, .. } = item {
                expand::expand_field(href, &format!("navbar.items[{index}].href"))?;
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(self.docs.sidebar_path.as_deref(), "sidebars.json"),
            route_base_path: self
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "/docs".to_owned()),
            breadcrumbs: self.docs.breadcrumbs.unwrap_or(true),
            exclude: self.docs.exclude.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SITE_TOML: &str = r#"
[site]
title = "Bioinformatics Note"
tagline = "バイオインフォマティクス講義ノート"
url = "https://susumutomita.github.io"
base_url = "/bioinformatics-note/"
favicon = "img/favicon.ico"
organization = "susumutomita"
project = "bioinformatics-note"

[i18n]
default_locale = "ja"
locales = ["ja"]

[docs]
sidebar_path = "sidebars.yaml"
route_base_path = "/"
breadcrumbs = false

[validation]
on_broken_link = "warn"

[navbar]
title = "Bioinformatics Note"
logo = { alt = "Bioinformatics Note Logo", src = "img/logo.svg", href = "/" }
items = [
  { type = "docSidebar", sidebar_id = "docs", position = "left", label = "ドキュメント" },
  { type = "href", href = "https://github.com/susumu/bioinformatics-note", label = "GitHub", position = "right" },
]

[footer]
style = "dark"
copyright = "Copyright Bioinformatics Note"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/test/sidebars.json")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/docs");
        assert!(config.docs_resolved.breadcrumbs);
        assert_eq!(config.validation, ResolveOptions::default());
        assert!(config.navbar.items.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.validation.on_broken_link, Policy::Error);
    }

    #[test]
    fn test_parse_full_config() {
        let mut config: Config = toml::from_str(SITE_TOML).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site.title, "Bioinformatics Note");
        assert_eq!(config.site.base_url, "/bioinformatics-note/");
        assert_eq!(config.site.project.as_deref(), Some("bioinformatics-note"));
        assert_eq!(config.i18n.locales, vec!["ja"]);
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/project/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/");
        assert!(!config.docs_resolved.breadcrumbs);
        assert_eq!(config.validation.on_broken_link, Policy::Warn);
        assert_eq!(config.validation.on_duplicate_id, Policy::Warn);
        assert_eq!(config.footer.as_ref().unwrap().style, "dark");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_navbar_items() {
        let config: Config = toml::from_str(SITE_TOML).unwrap();

        assert_eq!(
            config.navbar.items,
            vec![
                NavbarItem::DocSidebar {
                    sidebar_id: "docs".to_owned(),
                    label: "ドキュメント".to_owned(),
                    position: NavbarPosition::Left,
                },
                NavbarItem::Href {
                    href: "https://github.com/susumu/bioinformatics-note".to_owned(),
                    label: "GitHub".to_owned(),
                    position: NavbarPosition::Right,
                },
            ]
        );
        assert_eq!(config.navbar.sidebar_ids().collect::<Vec<_>>(), vec!["docs"]);
        assert_eq!(config.navbar.logo.as_ref().unwrap().src, "img/logo.svg");
    }

    #[test]
    fn test_parse_invalid_navbar_position() {
        let toml = r#"
[navbar]
items = [{ type = "href", href = "https://x.io", label = "X", position = "center" }]
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_policy() {
        let toml = r#"
[validation]
on_duplicate_id = "throw"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, SITE_TOML).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("docs"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/docnav.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "[site]\ntitle = \"Notes\"\n").unwrap();
        let nested = temp_dir.path().join("docs").join("week1");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config_from(&nested), Some(config_path.clone()));
        assert_eq!(Config::discover_config_from(temp_dir.path()), Some(config_path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILENAME), "").unwrap();
        let site = temp_dir.path().join("site");
        std::fs::create_dir_all(site.join("docs")).unwrap();
        std::fs::write(site.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config_from(&site.join("docs")),
            Some(site.join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_validates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\nbase_url = \"notes\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            on_duplicate_id: Some(Policy::Error),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/test/sidebars.json")
        ); // Unchanged
        assert_eq!(config.validation.on_broken_link, Policy::Error); // Unchanged
        assert_eq!(config.validation.on_duplicate_id, Policy::Error);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.validation, ResolveOptions::default());
    }

    #[test]
    fn test_expand_env_vars_site() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_CONFIG_TEST_URL", "https://docs.example.com");
        }

        let toml = r#"
[site]
url = "${DOCNAV_CONFIG_TEST_URL}"
base_url = "${DOCNAV_CONFIG_TEST_BASE_UNSET:-/}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.url, "https://docs.example.com");
        assert_eq!(config.site.base_url, "/");

        unsafe {
            std::env::remove_var("DOCNAV_CONFIG_TEST_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_navbar_href() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_CONFIG_TEST_REPO");
        }

        let toml = r#"
[navbar]
items = [
  { type = "docSidebar", sidebar_id = "docs", label = "Docs" },
  { type = "href", href = "${DOCNAV_CONFIG_TEST_REPO:-https://github.com/example/notes}", label = "GitHub", position = "right" },
  { type = "href", href = "${DOCNAV_CONFIG_TEST_REPO}", label = "Mirror" },
]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(err.to_string().contains("navbar.items[2].href"));
        match &config.navbar.items[1] {
            NavbarItem::Href { href, .. } => assert_eq!(href, "https://github.com/example/notes"),
            NavbarItem::DocSidebar { .. } => panic!("expected href item"),
        }
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.url = "ftp://example.com".to_owned();
        assert_validation_error(&config, &["site.url", "http"]);
    }

    #[test]
    fn test_validate_base_url_slashes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "/notes".to_owned();
        assert_validation_error(&config, &["site.base_url", "/notes"]);
    }

    #[test]
    fn test_validate_default_locale_listed() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.i18n.default_locale = "ja".to_owned();
        assert_validation_error(&config, &["i18n.locales", "ja"]);
    }

    #[test]
    fn test_validate_route_base_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.route_base_path = "docs".to_owned();
        assert_validation_error(&config, &["route_base_path"]);
    }
}
