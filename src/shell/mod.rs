//! Shell command execution.

pub mod command;

pub use command::{CommandResult, OutputHandling, ProcessExecutor, ShellExecutor, DEFAULT_SHELL};
