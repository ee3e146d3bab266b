//! Typed query result rows.

/// A row of the `build_report` reporting view.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BuildReportRow {
    pub name: String,
    pub build_name: String,
    pub build_stack_name: String,
    pub build_order: Option<i64>,
    /// Serialized [`ReportDocument`](crate::report::ReportDocument).
    pub report_text: String,
}

/// A build and the shell command that loads its module.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Build {
    pub name: String,
    pub activation: String,
}

impl Build {
    pub fn new(name: impl Into<String>, activation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activation: activation.into(),
        }
    }
}
