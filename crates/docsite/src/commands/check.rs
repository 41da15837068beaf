//! `docsite check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::{ConfigError, DanglingReference};

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    load: LoadArgs,

    /// Directory holding the documents (default: derived from config location).
    #[arg(long)]
    content_root: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or any reference is unresolved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.load.load(self.content_root)?;

        if let Some(path) = config.config_path() {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!("Content root: {}", config.content_root().display()));

        match config.validate() {
            Ok(()) => {
                output.success(&format!(
                    "{}: configuration is valid",
                    config.get().title
                ));
                Ok(())
            }
            Err(ConfigError::DanglingReferences(references)) => {
                for reference in &references {
                    output.error(&describe(reference));
                    output.detail(&format!("    at {}", reference.field));
                }
                Err(CliError::Dangling(references.len()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// One-line description of an unresolved reference.
fn describe(reference: &DanglingReference) -> String {
    if reference.candidates.is_empty() {
        return format!(
            "Missing document: {} (outside the content root)",
            reference.path
        );
    }
    let tried = reference
        .candidates
        .iter()
        .map(|c| c.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Missing document: {} (tried {tried})", reference.path)
}
