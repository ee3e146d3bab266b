//! Applications database access.
//!
//! - [`query`] - Parameterized search queries
//! - [`connection`] - Connection establishment with bounded retry
//! - [`catalog`] - The [`BuildCatalog`] seam and its MySQL implementation
//! - [`models`] - Typed result rows

pub mod catalog;
pub mod connection;
pub mod models;
pub mod query;

pub use catalog::{BuildCatalog, MemoryCatalog, MySqlCatalog};
pub use connection::{connect, connect_with_retry, RetryPolicy};
pub use models::{Build, BuildReportRow};
pub use query::{build_activation_query, build_report_query, BuiltQuery, SearchMode};
