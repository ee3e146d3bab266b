//! module-query entry point.

use std::process::ExitCode;

use clap::Parser;
use module_query::cli::{init_tracing, run, ModuleQueryArgs, ModuleQueryCommand};
use module_query::config::debug_enabled;

fn main() -> ExitCode {
    let args = ModuleQueryArgs::parse();
    let debug = debug_enabled();
    init_tracing(debug);

    tracing::debug!("module-query starting with args: {:?}", args);

    run(&ModuleQueryCommand::new(args), debug)
}
