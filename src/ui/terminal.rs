//! Terminal UI implementation.

use std::io::Write;

use console::Term;

use super::UserInterface;

/// Writes reports to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
}

impl TerminalUI {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        let _ = self.out.write_line(msg);
    }

    fn write(&mut self, text: &str) {
        // Flushed so progress text shows before a child process writes.
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    fn error(&mut self, msg: &str) {
        let _ = self.err.write_line(msg);
    }
}
