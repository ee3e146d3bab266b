//! The `check-activation` command.

use async_trait::async_trait;

use super::command::{no_results, Command, CommandResult};
use crate::cli::args::CheckActivationArgs;
use crate::db::{build_activation_query, BuildCatalog};
use crate::error::Result;
use crate::shell::{ProcessExecutor, ShellExecutor};
use crate::ui::UserInterface;
use crate::verify::{ActivationOutcome, ActivationVerifier};

/// Checks that each matching build's activation command succeeds.
///
/// Failing builds are reported but do not change the exit code; the
/// command only fails when nothing matched.
pub struct CheckActivationCommand {
    args: CheckActivationArgs,
    executor: Box<dyn ProcessExecutor>,
}

impl CheckActivationCommand {
    /// Create the command using the system shell.
    pub fn new(args: CheckActivationArgs) -> Self {
        Self::with_executor(args, Box::new(ShellExecutor::new()))
    }

    pub fn with_executor(args: CheckActivationArgs, executor: Box<dyn ProcessExecutor>) -> Self {
        Self { args, executor }
    }
}

#[async_trait(?Send)]
impl Command for CheckActivationCommand {
    fn name(&self) -> &'static str {
        "check-activation"
    }

    async fn execute(
        &self,
        catalog: &mut dyn BuildCatalog,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let flavors = self.args.flavor_list();
        let query = build_activation_query(&self.args.search, &flavors)?;
        tracing::debug!(
            "search {}, build_stack_names {}",
            self.args.search,
            flavors.join(",")
        );

        let builds = catalog.builds(&query).await?;
        if builds.is_empty() {
            return Ok(no_results(ui, &self.args.search, &flavors));
        }

        let verifier = ActivationVerifier::new(self.executor.as_ref(), self.args.verbose);
        let results = verifier.verify(&builds, ui).await;

        let failed = results
            .iter()
            .filter(|r| r.outcome == ActivationOutcome::Fail)
            .count();
        tracing::info!("{} of {} activations failed", failed, results.len());

        Ok(CommandResult::success())
    }
}
