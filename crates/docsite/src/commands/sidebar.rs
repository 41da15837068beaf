//! `docsite sidebar` command implementation.

use clap::Args;
use docsite_config::SidebarGroup;

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Route to resolve (e.g., /code/vue/vuex.html).
    route: String,

    #[command(flatten)]
    load: LoadArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let route = self.route;
        let config = self.load.load(None)?;
        let output = Output::stdout();

        let Some((prefix, groups)) = config.get().theme_config.sidebar_for(&route) else {
            Output::new().warning(&format!("No sidebar matches {route}"));
            return Ok(());
        };

        output.highlight(prefix);
        for group in groups {
            output.info(&group_heading(group));
            for child in &group.children {
                output.detail(&format!("    {child}"));
            }
        }
        Ok(())
    }
}

fn group_heading(group: &SidebarGroup) -> String {
    if group.collapsable {
        format!("  {} (collapsable)", group.title)
    } else {
        format!("  {}", group.title)
    }
}
