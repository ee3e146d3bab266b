//! Report geometry and terminal width detection.

use console::Term;

use super::wrap::TextWrapper;

/// Width used when no terminal size can be determined.
pub const DEFAULT_COLUMNS: usize = 80;

/// Left margin of wrapped text blocks.
pub const TEXT_MARGIN: usize = 6;

/// Continuation indent for build flavor labels in the consolidated report.
pub const FLAVOR_CONTINUATION: usize = 30;

/// Continuation indent for version lines in the consolidated report.
pub const VERSION_CONTINUATION: usize = 58;

/// Detect the terminal width in columns.
///
/// Tries the terminal attached to stdout, then stderr, then the `COLUMNS`
/// environment variable. Falls back to 80, also when a width of 0 is
/// reported.
pub fn terminal_columns() -> usize {
    let detected = [Term::stdout(), Term::stderr()]
        .iter()
        .find_map(|term| term.size_checked())
        .map(|(_rows, columns)| columns as usize)
        .or_else(|| columns_from(std::env::var("COLUMNS").ok().as_deref()));

    resolve_columns(detected)
}

fn columns_from(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.trim().parse().ok())
}

fn resolve_columns(detected: Option<usize>) -> usize {
    match detected {
        Some(0) | None => DEFAULT_COLUMNS,
        Some(columns) => columns,
    }
}

/// Column geometry shared by both report styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Total width of report text (terminal width minus 2).
    pub width: usize,
    /// Width handed to the wrappers (width minus both margins).
    pub text_width: usize,
}

impl Layout {
    /// Geometry for a terminal `columns` wide. A width of 0 means 80.
    pub fn for_columns(columns: usize) -> Self {
        let columns = resolve_columns(Some(columns));
        let width = columns.saturating_sub(2);
        Self {
            width,
            text_width: width.saturating_sub(TEXT_MARGIN * 2).max(1),
        }
    }

    /// Horizontal rule spanning the report width.
    pub fn border(&self) -> String {
        "-".repeat(self.width)
    }

    /// Wrapper for free text, with every whitespace character collapsed.
    pub fn text_wrapper(&self) -> TextWrapper {
        TextWrapper::new(self.text_width)
            .initial_indent(TEXT_MARGIN)
            .subsequent_indent(TEXT_MARGIN)
    }

    /// Wrapper for text whose line breaks should survive.
    pub fn preserving_wrapper(&self) -> TextWrapper {
        self.text_wrapper().preserve_whitespace()
    }

    /// Wrapper for build flavor labels.
    pub fn flavor_wrapper(&self) -> TextWrapper {
        TextWrapper::new(self.text_width)
            .initial_indent(TEXT_MARGIN)
            .subsequent_indent(FLAVOR_CONTINUATION)
    }

    /// Wrapper for version lines.
    pub fn version_wrapper(&self) -> TextWrapper {
        TextWrapper::new(self.text_width)
            .initial_indent(TEXT_MARGIN)
            .subsequent_indent(VERSION_CONTINUATION)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_columns(DEFAULT_COLUMNS)
    }
}
