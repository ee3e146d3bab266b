//! check-activation entry point.

use std::process::ExitCode;

use clap::Parser;
use module_query::cli::{init_tracing, run, CheckActivationArgs, CheckActivationCommand};
use module_query::config::debug_enabled;

fn main() -> ExitCode {
    let args = CheckActivationArgs::parse();
    let debug = debug_enabled();
    init_tracing(debug);

    tracing::debug!("check-activation starting with args: {:?}", args);

    run(&CheckActivationCommand::new(args), debug)
}
