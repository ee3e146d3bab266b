//! CLI argument definitions.
//!
//! One [`Parser`] struct per binary: [`ModuleQueryArgs`] and
//! [`CheckActivationArgs`].

use clap::{ArgAction, Parser};

use crate::config::{parse_flavors, DEFAULT_FLAVORS, FLAVORS_VAR};
use crate::db::SearchMode;

/// module-query -- Command line query of the applications database.
///
/// Like `module spider`: a search matching a single build shows its full
/// details, including how to load it and its run time dependencies. A
/// search matching several builds shows them grouped by application and
/// build flavor.
#[derive(Debug, Clone, Parser)]
#[command(name = "module-query")]
#[command(version, about, long_about)]
pub struct ModuleQueryArgs {
    /// Set verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Comma separated list of application flavors
    #[arg(
        long,
        visible_alias = "flavor",
        value_name = "CSV",
        env = FLAVORS_VAR,
        default_value = DEFAULT_FLAVORS
    )]
    pub flavors: String,

    /// Search all text, including description
    #[arg(long)]
    pub full_text: bool,

    /// Build name. May be partial.
    #[arg(value_name = "BUILD")]
    pub build: String,
}

impl ModuleQueryArgs {
    /// Requested flavors as a list.
    pub fn flavor_list(&self) -> Vec<String> {
        parse_flavors(&self.flavors)
    }

    pub fn search_mode(&self) -> SearchMode {
        if self.full_text {
            SearchMode::FullText
        } else {
            SearchMode::BuildName
        }
    }
}

/// check-activation -- Retrieve the activation code for builds and ensure
/// that it returns 0.
#[derive(Debug, Clone, Parser)]
#[command(name = "check-activation")]
#[command(version, about, long_about = None)]
pub struct CheckActivationArgs {
    /// Comma separated list of application flavors
    #[arg(
        long,
        visible_alias = "flavor",
        value_name = "CSV",
        env = FLAVORS_VAR,
        default_value = DEFAULT_FLAVORS
    )]
    pub flavors: String,

    /// Show output of the activation commands
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Build name search text. Leave empty to get all of the builds for the
    /// application flavors
    #[arg(value_name = "SEARCH")]
    pub search: String,
}

impl CheckActivationArgs {
    /// Requested flavors as a list.
    pub fn flavor_list(&self) -> Vec<String> {
        parse_flavors(&self.flavors)
    }
}
