//! Parameterized search queries.
//!
//! Search terms and flavor names are always bound as parameters; only the
//! placeholder count depends on user input.

use crate::error::{ModuleQueryError, Result};

/// Which column of `build_report` a module search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Match the build (module) name.
    #[default]
    BuildName,
    /// Match anywhere in the stored report text, including the description.
    FullText,
}

impl SearchMode {
    fn column(self) -> &'static str {
        match self {
            SearchMode::BuildName => "br.build_name",
            SearchMode::FullText => "br.report_text",
        }
    }
}

/// A query template and its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// SQL text with `?` placeholders.
    pub sql: String,
    /// Values for the placeholders, in order.
    pub params: Vec<String>,
}

/// Build the `build_report` search used by `module-query`.
///
/// # Example
///
/// ```
/// use module_query::db::{build_report_query, SearchMode};
///
/// let flavors = vec!["Easy Build".to_string(), "Bioconda".to_string()];
/// let query = build_report_query("samtools", &flavors, SearchMode::BuildName).unwrap();
///
/// assert!(query.sql.contains("in (?, ?)"));
/// assert_eq!(query.params, vec!["%samtools%", "Easy Build", "Bioconda"]);
/// ```
pub fn build_report_query(
    search: &str,
    flavors: &[String],
    mode: SearchMode,
) -> Result<BuiltQuery> {
    let in_clause = placeholders(flavors)?;
    let sql = format!(
        "select br.name, br.build_name, br.build_stack_name, br.build_order, br.report_text \
         from build_report br \
         where {} like ? and br.build_stack_name in ({}) \
         order by br.app_name, br.build_order",
        mode.column(),
        in_clause
    );

    Ok(BuiltQuery {
        sql,
        params: params(search, flavors),
    })
}

/// Build the `build`/`build_stack` search used by `check-activation`.
pub fn build_activation_query(search: &str, flavors: &[String]) -> Result<BuiltQuery> {
    let in_clause = placeholders(flavors)?;
    let sql = format!(
        "select b.name, b.activation \
         from build b inner join build_stack bs on bs.id = b.build_stack_id \
         where b.name like ? and bs.name in ({})",
        in_clause
    );

    Ok(BuiltQuery {
        sql,
        params: params(search, flavors),
    })
}

fn placeholders(flavors: &[String]) -> Result<String> {
    if flavors.is_empty() {
        return Err(ModuleQueryError::Query {
            message: "at least one build flavor is required".to_string(),
        });
    }
    Ok(vec!["?"; flavors.len()].join(", "))
}

fn params(search: &str, flavors: &[String]) -> Vec<String> {
    let mut params = Vec::with_capacity(flavors.len() + 1);
    params.push(format!("%{}%", search));
    params.extend(flavors.iter().cloned());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flavors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("flavor {}", i)).collect()
    }

    #[test]
    fn in_clause_has_one_placeholder_per_flavor() {
        for n in 1..=7 {
            let query = build_report_query("R", &flavors(n), SearchMode::BuildName).unwrap();
            // one for the like term, n for the in clause
            assert_eq!(query.sql.matches('?').count(), n + 1);
            assert_eq!(query.params.len(), n + 1);
        }
    }

    #[test]
    fn params_are_term_then_flavors_in_order() {
        let list = vec!["Java".to_string(), "Anaconda".to_string(), "Bioconda".to_string()];
        let query = build_activation_query("gcc", &list).unwrap();
        assert_eq!(query.params, vec!["%gcc%", "Java", "Anaconda", "Bioconda"]);
    }

    #[test]
    fn user_input_never_reaches_sql_text() {
        let list = vec!["x'); drop table build; --".to_string()];
        let query =
            build_report_query("'; delete from build_report; --", &list, SearchMode::FullText)
                .unwrap();
        assert!(!query.sql.contains("drop table"));
        assert!(!query.sql.contains("delete"));
        assert_eq!(query.params[0], "%'; delete from build_report; --%");
    }

    #[test]
    fn empty_search_matches_everything() {
        let query = build_activation_query("", &flavors(2)).unwrap();
        assert_eq!(query.params[0], "%%");
    }

    #[test]
    fn name_mode_matches_build_name() {
        let query = build_report_query("R", &flavors(1), SearchMode::BuildName).unwrap();
        assert!(query.sql.contains("br.build_name like ?"));
        assert!(query.sql.contains("order by br.app_name, br.build_order"));
    }

    #[test]
    fn full_text_mode_matches_report_text() {
        let query = build_report_query("R", &flavors(1), SearchMode::FullText).unwrap();
        assert!(query.sql.contains("br.report_text like ?"));
        assert!(!query.sql.contains("br.build_name like"));
    }

    #[test]
    fn activation_query_joins_build_stack() {
        let query = build_activation_query("R", &flavors(1)).unwrap();
        assert!(query.sql.contains("inner join build_stack bs on bs.id = b.build_stack_id"));
        assert!(query.sql.contains("b.name like ?"));
        assert!(query.sql.contains("bs.name in (?)"));
    }

    #[test]
    fn empty_flavor_list_is_rejected() {
        let err = build_report_query("R", &[], SearchMode::BuildName).unwrap_err();
        assert!(matches!(err, ModuleQueryError::Query { .. }));
        assert!(build_activation_query("R", &[]).is_err());
    }
}
