//! The JSON report document stored with each build.

use serde::{Deserialize, Deserializer, Serialize};

use crate::db::BuildReportRow;
use crate::error::{ModuleQueryError, Result};

/// Parsed contents of `build_report.report_text`.
///
/// `title`, `name`, `description` and `activation` are required. The other
/// fields default to empty when missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Application name.
    pub title: String,
    /// Build (module) name.
    pub name: String,
    pub description: String,
    /// Shell command(s) that load the module.
    pub activation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub run_dependencies: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_build: bool,
    /// Build flavor display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub build_stack: String,
    #[serde(default)]
    pub build_stack_activation: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ReportDocument {
    /// Parse the document stored in a report row.
    pub fn from_row(row: &BuildReportRow) -> Result<Self> {
        serde_json::from_str(&row.report_text).map_err(|source| {
            tracing::debug!("Bad report text for {}: {}", row.build_name, source);
            ModuleQueryError::ReportParse {
                build: row.build_name.clone(),
                source,
            }
        })
    }

    /// Build comments, when they contain more than whitespace.
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Flavor-level activation note, when present.
    pub fn build_stack_activation(&self) -> Option<&str> {
        self.build_stack_activation
            .as_deref()
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str) -> BuildReportRow {
        BuildReportRow {
            name: "R".into(),
            build_name: "R/4.0.2-fasrc01".into(),
            build_stack_name: "HeLmod CentOS 7".into(),
            build_order: Some(1),
            report_text: text.into(),
        }
    }

    #[test]
    fn parses_complete_document() {
        let doc = ReportDocument::from_row(&row(
            r#"{
                "title": "R",
                "name": "R/4.0.2-fasrc01",
                "description": "R is a language for statistical computing.",
                "activation": "module load R/4.0.2-fasrc01",
                "run_dependencies": ["gcc/9.3.0-fasrc01", "openblas/0.3.10-fasrc01"],
                "comments": "Built with OpenBLAS",
                "preferred_build": true,
                "build_stack": "HeLmod CentOS 7",
                "build_stack_activation": "source new-modules.sh"
            }"#,
        ))
        .unwrap();

        assert_eq!(doc.title, "R");
        assert_eq!(doc.run_dependencies.len(), 2);
        assert!(doc.preferred_build);
        assert_eq!(doc.comments(), Some("Built with OpenBLAS"));
        assert_eq!(doc.build_stack_activation(), Some("source new-modules.sh"));
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let doc = ReportDocument::from_row(&row(
            r#"{"title": "R", "name": "R/4", "description": "d", "activation": "module load R/4"}"#,
        ))
        .unwrap();

        assert!(doc.run_dependencies.is_empty());
        assert!(!doc.preferred_build);
        assert_eq!(doc.comments(), None);
        assert_eq!(doc.build_stack_activation(), None);
    }

    #[test]
    fn optional_fields_default_when_null() {
        let doc = ReportDocument::from_row(&row(
            r#"{"title": "R", "name": "R/4", "description": "d", "activation": "a",
                "run_dependencies": null, "comments": null, "preferred_build": null,
                "build_stack": null, "build_stack_activation": null}"#,
        ))
        .unwrap();

        assert!(doc.run_dependencies.is_empty());
        assert!(!doc.preferred_build);
        assert_eq!(doc.build_stack, "");
    }

    #[test]
    fn blank_comments_are_ignored() {
        let doc = ReportDocument {
            comments: Some("  \n\t ".into()),
            ..Default::default()
        };
        assert_eq!(doc.comments(), None);
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let err = ReportDocument::from_row(&row(r#"{"title": "R", "name": "R/4"}"#)).unwrap_err();
        assert!(matches!(err, ModuleQueryError::ReportParse { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = ReportDocument::from_row(&row("{\"title\": ")).unwrap_err();
        match err {
            ModuleQueryError::ReportParse { build, .. } => assert_eq!(build, "R/4.0.2-fasrc01"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
