//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod show;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use show::ShowArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command that loads a configuration.
#[derive(Args)]
pub(crate) struct LoadArgs {
    /// Path to configuration file (default: auto-discover site.toml or .vuepress/config.*).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base path the site is served under (overrides config).
    #[arg(long)]
    base: Option<String>,
}

impl LoadArgs {
    /// Load the configuration, with an optional content root override.
    pub(crate) fn load(self, content_root: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base: self.base,
            content_root,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
