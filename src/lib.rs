//! module-query - Command line query of the cluster applications database.
//!
//! Two tools share this library:
//!
//! - `module-query` searches build reports and prints either the full detail
//!   of one build or a consolidated listing grouped by application
//! - `check-activation` runs each matching build's activation command in a
//!   purged module environment and reports `Success` or `Fail`
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, commands, and process setup
//! - [`config`] - Settings read from the environment
//! - [`db`] - Query building, connection retry, and build catalogs
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report document parsing and text rendering
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`verify`] - Activation checks
//!
//! # Example
//!
//! ```
//! use module_query::db::{build_report_query, SearchMode};
//!
//! let query = build_report_query("samtools", &["Easy Build".to_string()], SearchMode::BuildName)
//!     .unwrap();
//! assert_eq!(query.params, vec!["%samtools%", "Easy Build"]);
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;
pub mod verify;

pub use error::{ModuleQueryError, Result};
