//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing reports to stdout and errors to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use module_query::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.write("Attempting module load R for build R... ");
//! ui.message("Success");
//! ui.error("Unable to connect to rcdb-internal");
//!
//! assert_eq!(ui.stdout(), "Attempting module load R for build R... Success\n");
//! assert_eq!(ui.errors(), &["Unable to connect to rcdb-internal".to_string()]);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user interface output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Write a line to standard output.
    fn message(&mut self, msg: &str);

    /// Write text to standard output without a trailing newline.
    fn write(&mut self, text: &str);

    /// Write a line to standard error.
    fn error(&mut self, msg: &str);
}
