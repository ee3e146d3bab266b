//! Command-line interface for module-query and check-activation.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`runner`] - Process setup shared by both binaries

pub mod args;
pub mod commands;
pub mod runner;

pub use args::{CheckActivationArgs, ModuleQueryArgs};
pub use commands::{CheckActivationCommand, Command, CommandResult, ModuleQueryCommand};
pub use runner::{init_tracing, run};
