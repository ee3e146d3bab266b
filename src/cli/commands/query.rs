//! The `module-query` command.

use async_trait::async_trait;

use super::command::{no_results, Command, CommandResult};
use crate::cli::args::ModuleQueryArgs;
use crate::db::{build_report_query, BuildCatalog};
use crate::error::Result;
use crate::report::{render_report, terminal_columns, Layout};
use crate::ui::UserInterface;

/// Searches build reports and prints the matching report.
pub struct ModuleQueryCommand {
    args: ModuleQueryArgs,
    columns: usize,
}

impl ModuleQueryCommand {
    /// Create the command, sizing reports to the current terminal.
    pub fn new(args: ModuleQueryArgs) -> Self {
        Self::with_columns(args, terminal_columns())
    }

    /// Create the command with a fixed report width.
    pub fn with_columns(args: ModuleQueryArgs, columns: usize) -> Self {
        Self { args, columns }
    }
}

#[async_trait(?Send)]
impl Command for ModuleQueryCommand {
    fn name(&self) -> &'static str {
        "module-query"
    }

    async fn execute(
        &self,
        catalog: &mut dyn BuildCatalog,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let flavors = self.args.flavor_list();

        if self.args.verbose > 0 {
            ui.message("Verbose mode on");
            ui.message(&format!("Searching for {}", self.args.build));
        }

        let query = build_report_query(&self.args.build, &flavors, self.args.search_mode())?;
        tracing::debug!(
            "search {}, build_stack_names {}, fulltext {}",
            self.args.build,
            flavors.join(","),
            self.args.full_text
        );

        let rows = catalog.build_reports(&query).await?;
        if rows.is_empty() {
            return Ok(no_results(ui, &self.args.build, &flavors));
        }

        let layout = Layout::for_columns(self.columns);
        for block in render_report(&rows, &layout)? {
            ui.message(&block);
        }

        Ok(CommandResult::success())
    }
}
