//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures everything
//! written for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    stdout: String,
    messages: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to standard output, newlines included.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Lines written with `message`.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Lines written with `error`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything written to standard error, newlines included.
    pub fn stderr(&self) -> String {
        self.errors.iter().map(|e| format!("{e}\n")).collect()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.stdout.push_str(msg);
        self.stdout.push('\n');
        self.messages.push(msg.to_string());
    }

    fn write(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
