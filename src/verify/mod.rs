//! Activation checks for module builds.
//!
//! Each build's activation command is run in a freshly purged module
//! environment. Results are reported per build; a failing build never stops
//! the batch.

use std::fmt;

use crate::db::Build;
use crate::shell::{OutputHandling, ProcessExecutor};
use crate::ui::UserInterface;

/// Resets the module environment to an empty state.
pub const PURGE_COMMAND: &str = "module purge";

/// Outcome of one activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Success,
    Fail,
}

impl fmt::Display for ActivationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationOutcome::Success => write!(f, "Success"),
            ActivationOutcome::Fail => write!(f, "Fail"),
        }
    }
}

/// A build paired with the outcome of activating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationResult {
    pub build: String,
    pub outcome: ActivationOutcome,
}

/// Runs activation commands through a [`ProcessExecutor`].
pub struct ActivationVerifier<'a> {
    executor: &'a dyn ProcessExecutor,
    output: OutputHandling,
}

impl<'a> ActivationVerifier<'a> {
    /// Create a verifier. With `show_output` the commands' output reaches
    /// the terminal, otherwise it is discarded.
    pub fn new(executor: &'a dyn ProcessExecutor, show_output: bool) -> Self {
        let output = if show_output {
            OutputHandling::Inherit
        } else {
            OutputHandling::Discard
        };
        Self { executor, output }
    }

    /// Try every build once, in order, then purge the environment again.
    pub async fn verify(
        &self,
        builds: &[Build],
        ui: &mut dyn UserInterface,
    ) -> Vec<ActivationResult> {
        let mut results = Vec::with_capacity(builds.len());

        for build in builds {
            ui.write(&format!(
                "Attempting {} for build {}... ",
                build.activation, build.name
            ));
            let outcome = self.activate(build).await;
            ui.message(&outcome.to_string());
            results.push(ActivationResult {
                build: build.name.clone(),
                outcome,
            });
        }

        if let Err(e) = self.executor.run(PURGE_COMMAND, self.output).await {
            tracing::debug!("Final module purge could not start: {}", e);
        }

        results
    }

    async fn activate(&self, build: &Build) -> ActivationOutcome {
        let command_line = format!("{} && {}", PURGE_COMMAND, build.activation);
        match self.executor.run(&command_line, self.output).await {
            Ok(result) if result.success() => ActivationOutcome::Success,
            Ok(result) => {
                tracing::debug!("{} exited with {:?}", build.name, result.exit_code);
                ActivationOutcome::Fail
            }
            Err(e) => {
                tracing::debug!("Could not run activation for {}: {}", build.name, e);
                ActivationOutcome::Fail
            }
        }
    }
}
