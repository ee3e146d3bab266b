//! Process setup shared by both binaries.
//!
//! Each binary parses its arguments, then hands its [`Command`] to [`run`],
//! which owns logging, the database catalog, the async runtime, interrupt
//! handling, and the mapping from errors to exit codes.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::commands::{Command, CommandResult};
use crate::config::DatabaseConfig;
use crate::db::{BuildCatalog, MySqlCatalog};
use crate::error::{ModuleQueryError, Result};
use crate::ui::{TerminalUI, UserInterface};

/// Printed after every error message.
pub const HELP_HINT: &str = "  for help use --help";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `MODULE_QUERY_DEBUG` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so reports on stdout stay clean.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("module_query=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("module_query=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Base name of the running executable, or `fallback` when unknown.
pub fn program_name(fallback: &str) -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Run `command` against the configured database and return the process
/// exit code.
pub fn run(command: &dyn Command, debug: bool) -> ExitCode {
    let program = program_name(command.name());
    let mut ui = TerminalUI::new();

    let outcome = DatabaseConfig::from_env().and_then(|config| {
        let mut catalog = MySqlCatalog::new(config);
        execute(command, &mut catalog, &mut ui)
    });

    match outcome {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            report_error(&mut ui, &program, &e, debug);
            exit_code(e.exit_code())
        }
    }
}

/// Drive `command` to completion on a single-threaded runtime.
///
/// An interrupt ends the run successfully.
pub fn execute(
    command: &dyn Command,
    catalog: &mut dyn BuildCatalog,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        tokio::select! {
            result = command.execute(catalog, ui) => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                tracing::debug!("Interrupted, exiting");
                Ok(CommandResult::success())
            }
        }
    })
}

/// Write `program: message` and the help hint to stderr. With `debug` the
/// underlying causes are included.
pub fn report_error(
    ui: &mut dyn UserInterface,
    program: &str,
    error: &ModuleQueryError,
    debug: bool,
) {
    let message = if debug {
        error.diagnostic()
    } else {
        error.to_string()
    };
    ui.error(&format!("{}: {}", program, message));
    ui.error(HELP_HINT);
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::CheckActivationArgs;
    use crate::cli::commands::CheckActivationCommand;
    use crate::db::MemoryCatalog;
    use crate::ui::MockUI;
    use crate::verify::testing::ScriptedExecutor;
    use clap::Parser;

    #[test]
    fn report_error_names_program_and_hints_help() {
        let mut ui = MockUI::new();
        let err = ModuleQueryError::Connection {
            host: "rcdb-internal".into(),
            source: None,
        };

        report_error(&mut ui, "module-query", &err, false);

        assert_eq!(
            ui.stderr(),
            "module-query: Unable to connect to rcdb-internal\n  for help use --help\n"
        );
    }

    #[test]
    fn report_error_in_debug_includes_causes() {
        let mut ui = MockUI::new();
        let err = ModuleQueryError::Connection {
            host: "db".into(),
            source: Some(sqlx::Error::PoolTimedOut),
        };

        report_error(&mut ui, "check-activation", &err, true);

        assert!(ui.errors()[0].starts_with("check-activation: Unable to connect to db"));
        assert!(ui.errors()[0].contains("caused by"));
        assert_eq!(ui.errors()[1], HELP_HINT);
    }

    #[test]
    fn program_name_is_a_base_name() {
        let name = program_name("fallback");
        assert!(!name.is_empty());
        assert!(!name.contains('/'));
    }

    #[test]
    fn execute_runs_command_to_completion() {
        let args = CheckActivationArgs::parse_from(["check-activation", "--flavors", "Java", "x"]);
        let command =
            CheckActivationCommand::with_executor(args, Box::new(ScriptedExecutor::default()));
        let mut catalog = MemoryCatalog::default();
        let mut ui = MockUI::new();

        let result = execute(&command, &mut catalog, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(catalog.queries().len(), 1);
    }
}
