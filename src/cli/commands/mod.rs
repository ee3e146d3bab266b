//! CLI command implementations.
//!
//! Each binary's work is a [`Command`], which provides a uniform interface
//! for executing against a build catalog and reporting an exit code.

pub mod check;
pub mod command;
pub mod query;

pub use check::CheckActivationCommand;
pub use command::{Command, CommandResult};
pub use query::ModuleQueryCommand;
