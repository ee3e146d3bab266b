//! Command trait and result type.

use async_trait::async_trait;

use crate::db::BuildCatalog;
use crate::error::{ModuleQueryError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each binary runs exactly one command against a [`BuildCatalog`].
#[async_trait(?Send)]
pub trait Command {
    /// Name used to prefix error messages when `argv[0]` is unavailable.
    fn name(&self) -> &'static str;

    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Source of build records
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    async fn execute(
        &self,
        catalog: &mut dyn BuildCatalog,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Report a search that matched nothing and return exit code 1.
pub fn no_results(ui: &mut dyn UserInterface, search: &str, flavors: &[String]) -> CommandResult {
    let err = ModuleQueryError::NoResults {
        search: search.to_string(),
        flavors: flavors.to_vec(),
    };
    ui.error(&format!("\n{}\n", err));
    CommandResult::failure(err.exit_code())
}
