//! docsite CLI - documentation site configuration checker.
//!
//! Provides commands for:
//! - `check`: Load the site configuration and verify its references
//! - `show`: Print the loaded configuration as JSON for the site generator
//! - `sidebar`: Print the sidebar a route resolves to

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ShowArgs, SidebarArgs};
use output::Output;

/// docsite - documentation site configuration checker.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (show loading and resolution logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and check every referenced document exists.
    Check(CheckArgs),
    /// Print the loaded configuration as JSON.
    Show(ShowArgs),
    /// Print the sidebar groups selected for a route.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_args() {
        let cli = Cli::try_parse_from([
            "docsite",
            "check",
            "--config",
            "docs/.vuepress/config.json",
            "--content-root",
            "docs",
            "--base",
            "/blog/",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_sidebar_requires_route() {
        assert!(Cli::try_parse_from(["docsite", "sidebar"]).is_err());
        assert!(Cli::try_parse_from(["docsite", "sidebar", "/code/"]).is_ok());
    }
}
