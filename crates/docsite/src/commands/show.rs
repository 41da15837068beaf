//! `docsite show` command implementation.

use clap::Args;

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    load: LoadArgs,

    /// Print on a single line instead of pretty-printing.
    #[arg(long)]
    compact: bool,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let compact = self.compact;
        let config = self.load.load(None)?;

        let json = if compact {
            serde_json::to_string(config.get())?
        } else {
            serde_json::to_string_pretty(config.get())?
        };

        Output::stdout().info(&json);
        Ok(())
    }
}
