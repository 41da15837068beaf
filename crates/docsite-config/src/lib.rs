//! Site configuration for documentation sites.
//!
//! Parses the site configuration (title, base path, head tags, top navigation
//! and per-section sidebars) from TOML, JSON or YAML into a typed
//! [`SiteConfig`], checks its paths, and cross-checks its references against
//! the documents under a content root.
//!
//! The loaded configuration is immutable. [`Config`] owns it behind an
//! [`Arc`] so it can be handed to any number of readers.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), docsite_config::ConfigError> {
//! use docsite_config::Config;
//!
//! let config = Config::load(None, None)?;
//! config.validate()?;
//!
//! let sidebar = &config.get().theme_config.sidebar;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! [`MockContentRoot`] (behind the `mock` feature flag) is an in-memory
//! content root for validating configurations without touching disk.
//!
//! ## Config Discovery
//!
//! Without an explicit path, the current directory and its parents are
//! searched. In each directory the first existing file wins:
//!
//! - `site.toml`, `site.json`, `site.yaml`, `site.yml`
//! - `.vuepress/config.{toml,json,yaml,yml}`
//! - `docs/.vuepress/config.{toml,json,yaml,yml}`
//!
//! ## Environment Variable Expansion
//!
//! String values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `base`

mod content;
mod decode;
mod error;
mod expand;
mod format;
mod links;
mod schema;
mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(any(test, feature = "mock"))]
pub use content::MockContentRoot;
pub use content::{ContentRoot, FsContentRoot};
pub use error::{ConfigError, DanglingReference};
pub use format::ConfigFormat;
pub use links::is_external;
pub use schema::{HeadTag, NavItem, SidebarGroup, SiteConfig, ThemeConfig};

/// Configuration filenames searched in each directory.
const CONFIG_FILENAMES: &[&str] = &["site.toml", "site.json", "site.yaml", "site.yml"];

/// Site generator directories searched in each directory.
const GENERATOR_DIRS: &[&str] = &[".vuepress", "docs/.vuepress"];

/// Extensions tried for `config.*` inside a generator directory.
const GENERATOR_EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml"];

/// Content directory next to a standalone config file.
const DEFAULT_CONTENT_DIR: &str = "docs";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override base path.
    pub base: Option<String>,
    /// Override content root directory.
    pub content_root: Option<PathBuf>,
}

/// Loaded site configuration.
///
/// Cheap to clone; every clone shares the same [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    site: Arc<SiteConfig>,
    content_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Parse a configuration definition.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on syntax errors, `ConfigError::Malformed`
    /// when a required field is missing or has the wrong shape, and
    /// `ConfigError::InvalidPath` when `base`, a sidebar key or a nav link is
    /// not a valid path.
    pub fn parse(source: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::parse_with(source, format, None)
    }

    fn parse_with(
        source: &str,
        format: ConfigFormat,
        settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let document = format.parse(source)?;
        let mut site = decode::site_config(document)?;
        site.expand_env_vars()?;

        if let Some(base) = settings.and_then(|s| s.base.as_ref()) {
            site.base.clone_from(base);
        }

        decode::check_paths(&site)?;
        Ok(site)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;
        self.base = expand::expand_env(&self.base, "base")?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches the current directory and parents (see
    /// [Config Discovery](crate#config-discovery)).
    ///
    /// CLI settings are applied before the configuration is checked and
    /// frozen, so an overriding `base` must be valid too.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be found or read, or if parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir()?;
            Self::discover_config(&cwd).ok_or(ConfigError::NotDiscovered(cwd))?
        };

        Self::load_from_file(&path, cli_settings)
    }

    /// Wrap an already parsed configuration.
    #[must_use]
    pub fn new(site: SiteConfig, content_root: impl Into<PathBuf>) -> Self {
        Self {
            site: Arc::new(site),
            content_root: content_root.into(),
            config_path: None,
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn get(&self) -> &SiteConfig {
        &self.site
    }

    /// Shared handle to the loaded configuration.
    #[must_use]
    pub fn shared(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.site)
    }

    /// Directory the configuration's references resolve against.
    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// File the configuration was loaded from.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Check references against the documents under [`Config::content_root`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DanglingReferences` listing every unresolved reference.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate(&FsContentRoot::new(&self.content_root))
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            tracing::debug!(dir = %current.display(), "Searching for site configuration");
            if let Some(found) = Self::config_in_dir(&current) {
                return Some(found);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// First existing config file in a single directory.
    fn config_in_dir(dir: &Path) -> Option<PathBuf> {
        let standalone = CONFIG_FILENAMES.iter().map(|name| dir.join(name));
        let generator = GENERATOR_DIRS.iter().flat_map(|sub| {
            GENERATOR_EXTENSIONS
                .iter()
                .map(move |ext| dir.join(sub).join(format!("config.{ext}")))
        });
        standalone.chain(generator).find(|path| path.is_file())
    }

    /// Content root for a config file without an explicit override.
    ///
    /// A config inside `.vuepress/` serves the directory containing it; any
    /// other config serves `docs/` next to it.
    fn default_content_root(config_path: &Path) -> PathBuf {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        if config_dir.file_name().is_some_and(|name| name == ".vuepress") {
            config_dir.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            config_dir.join(DEFAULT_CONTENT_DIR)
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path, settings: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let site = SiteConfig::parse_with(&content, format, settings)?;

        let content_root = settings
            .and_then(|s| s.content_root.clone())
            .unwrap_or_else(|| Self::default_content_root(path));

        tracing::info!(
            path = %path.display(),
            title = %site.title,
            base = %site.base,
            nav = site.theme_config.nav.len(),
            sidebars = site.theme_config.sidebar.len(),
            "Loaded site configuration"
        );

        Ok(Self {
            site: Arc::new(site),
            content_root,
            config_path: Some(path.to_path_buf()),
        })
    }
}
