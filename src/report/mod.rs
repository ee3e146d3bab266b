//! Terminal reports for build search results.
//!
//! A search matching exactly one build gets the [`detail`] view; any other
//! number of matches gets the [`consolidated`] view. All text is wrapped to
//! the [`Layout`] derived from the terminal width.
//!
//! # Example
//!
//! ```
//! use module_query::db::BuildReportRow;
//! use module_query::report::{render_report, Layout};
//!
//! let row = BuildReportRow {
//!     name: "samtools".into(),
//!     build_name: "samtools/1.10-fasrc01".into(),
//!     build_stack_name: "HeLmod CentOS 7".into(),
//!     build_order: Some(1),
//!     report_text: r#"{"title": "samtools", "name": "samtools/1.10-fasrc01",
//!         "description": "SAM tools", "activation": "module load samtools/1.10-fasrc01",
//!         "build_stack": "HeLmod CentOS 7"}"#.into(),
//! };
//!
//! let blocks = render_report(&[row], &Layout::for_columns(80)).unwrap();
//! assert_eq!(blocks.len(), 1);
//! assert!(blocks[0].contains("samtools : samtools/1.10-fasrc01"));
//! ```

pub mod consolidated;
pub mod detail;
pub mod document;
pub mod layout;
pub mod wrap;

pub use consolidated::{group_applications, render_consolidated, ApplicationGroup};
pub use detail::render_detail;
pub use document::ReportDocument;
pub use layout::{terminal_columns, Layout};
pub use wrap::TextWrapper;

use crate::db::BuildReportRow;
use crate::error::Result;

/// Render report rows, choosing the view by the number of rows.
///
/// Every row is parsed before anything is rendered; the first malformed
/// document aborts the report.
pub fn render_report(rows: &[BuildReportRow], layout: &Layout) -> Result<Vec<String>> {
    let docs = rows
        .iter()
        .map(ReportDocument::from_row)
        .collect::<Result<Vec<_>>>()?;

    match docs.as_slice() {
        [doc] => Ok(vec![render_detail(doc, layout)]),
        docs => Ok(render_consolidated(docs, layout)),
    }
}
