//! Error types for module-query operations.
//!
//! This module defines [`ModuleQueryError`], the error type shared by both
//! binaries, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant's `Display` text is the one-line message shown to users
//! - Low-level causes (driver errors, JSON errors) are kept as `source()` and
//!   only printed when `MODULE_QUERY_DEBUG` is set
//! - [`ModuleQueryError::NoResults`] is not a fault; commands report it with
//!   exit code 1 instead of 2

use thiserror::Error;

/// Core error type for module-query operations.
#[derive(Debug, Error)]
pub enum ModuleQueryError {
    /// Database unreachable after every connection attempt.
    #[error("Unable to connect to {host}")]
    Connection {
        host: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    /// Query parameters cannot form a valid query.
    #[error("Invalid query: {message}")]
    Query { message: String },

    /// A stored build report is not a valid report document.
    #[error("Unable to parse the build report for this module.  Please report to rchelp.")]
    ReportParse {
        build: String,
        #[source]
        source: serde_json::Error,
    },

    /// The search matched no builds.
    #[error(
        "Unable to find a match for '{search}' \nsearch was limited to build flavors {}",
        .flavors.join(", ")
    )]
    NoResults { search: String, flavors: Vec<String> },

    /// Missing or invalid environment settings.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Query failed after the connection was established.
    #[error("Database query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModuleQueryError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ModuleQueryError::NoResults { .. } => 1,
            _ => 2,
        }
    }

    /// Full diagnostic text: the message followed by every underlying cause.
    pub fn diagnostic(&self) -> String {
        let mut text = format!("{self}");
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        text
    }
}

/// Result type alias for module-query operations.
pub type Result<T> = std::result::Result<T, ModuleQueryError>;
