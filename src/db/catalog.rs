//! Build catalog access.
//!
//! Commands read builds through the [`BuildCatalog`] trait so they can run
//! against [`MySqlCatalog`] in production and [`MemoryCatalog`] in tests.

use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;

use super::connection::{connect, RetryPolicy};
use super::models::{Build, BuildReportRow};
use super::query::BuiltQuery;
use crate::config::DatabaseConfig;
use crate::error::Result;

/// Source of build records.
#[async_trait(?Send)]
pub trait BuildCatalog {
    /// Fetch `build_report` rows for a report query.
    async fn build_reports(&mut self, query: &BuiltQuery) -> Result<Vec<BuildReportRow>>;

    /// Fetch builds and their activation commands.
    async fn builds(&mut self, query: &BuiltQuery) -> Result<Vec<Build>>;
}

/// Catalog backed by the applications database.
///
/// The connection is opened on first use, so argument errors are reported
/// without touching the network.
pub struct MySqlCatalog {
    config: DatabaseConfig,
    policy: RetryPolicy,
    connection: Option<MySqlConnection>,
}

impl MySqlCatalog {
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_policy(config, RetryPolicy::default())
    }

    pub fn with_policy(config: DatabaseConfig, policy: RetryPolicy) -> Self {
        Self {
            config,
            policy,
            connection: None,
        }
    }

    async fn connection(&mut self) -> Result<&mut MySqlConnection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => connect(&self.config, &self.policy).await?,
        };
        Ok(self.connection.insert(connection))
    }
}

#[async_trait(?Send)]
impl BuildCatalog for MySqlCatalog {
    async fn build_reports(&mut self, query: &BuiltQuery) -> Result<Vec<BuildReportRow>> {
        tracing::debug!("Query parameters: {:?}", query.params);
        let connection = self.connection().await?;

        let mut statement = sqlx::query_as::<_, BuildReportRow>(&query.sql);
        for param in &query.params {
            statement = statement.bind(param.as_str());
        }
        let rows = statement.fetch_all(&mut *connection).await?;

        tracing::debug!("Fetched {} build reports", rows.len());
        Ok(rows)
    }

    async fn builds(&mut self, query: &BuiltQuery) -> Result<Vec<Build>> {
        tracing::debug!("Query parameters: {:?}", query.params);
        let connection = self.connection().await?;

        let mut statement = sqlx::query_as::<_, Build>(&query.sql);
        for param in &query.params {
            statement = statement.bind(param.as_str());
        }
        let rows = statement.fetch_all(&mut *connection).await?;

        tracing::debug!("Fetched {} builds", rows.len());
        Ok(rows)
    }
}

/// In-memory catalog that returns fixed rows and records the queries it saw.
///
/// # Example
///
/// ```
/// use module_query::db::{Build, BuildCatalog, MemoryCatalog, build_activation_query};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut catalog = MemoryCatalog::with_builds(vec![Build::new("R/4.0.2", "module load R/4.0.2")]);
/// let query = build_activation_query("R", &["Easy Build".to_string()]).unwrap();
///
/// let builds = catalog.builds(&query).await.unwrap();
/// assert_eq!(builds.len(), 1);
/// assert_eq!(catalog.queries().len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    reports: Vec<BuildReportRow>,
    builds: Vec<Build>,
    queries: Vec<BuiltQuery>,
}

impl MemoryCatalog {
    pub fn with_reports(reports: Vec<BuildReportRow>) -> Self {
        Self {
            reports,
            ..Default::default()
        }
    }

    pub fn with_builds(builds: Vec<Build>) -> Self {
        Self {
            builds,
            ..Default::default()
        }
    }

    /// Every query received, in order.
    pub fn queries(&self) -> &[BuiltQuery] {
        &self.queries
    }
}

#[async_trait(?Send)]
impl BuildCatalog for MemoryCatalog {
    async fn build_reports(&mut self, query: &BuiltQuery) -> Result<Vec<BuildReportRow>> {
        self.queries.push(query.clone());
        Ok(self.reports.clone())
    }

    async fn builds(&mut self, query: &BuiltQuery) -> Result<Vec<Build>> {
        self.queries.push(query.clone());
        Ok(self.builds.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::query::{build_report_query, SearchMode};
    use crate::error::ModuleQueryError;
    use std::time::Duration;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            database: "p3".into(),
            user: "modulequery".into(),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    async fn memory_catalog_records_queries() {
        let mut catalog = MemoryCatalog::default();
        let query =
            build_report_query("R", &["Java".to_string()], SearchMode::BuildName).unwrap();

        let rows = catalog.build_reports(&query).await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(catalog.queries(), &[query]);
    }

    #[tokio::test]
    async fn mysql_catalog_reports_unreachable_host() {
        let policy = RetryPolicy {
            max_attempts: 2,
            backoff: Duration::ZERO,
        };
        let mut catalog = MySqlCatalog::with_policy(unreachable_config(), policy);
        let query =
            build_report_query("R", &["Java".to_string()], SearchMode::BuildName).unwrap();

        let err = catalog.build_reports(&query).await.unwrap_err();

        assert!(matches!(err, ModuleQueryError::Connection { .. }));
        assert_eq!(err.to_string(), "Unable to connect to 127.0.0.1");
    }
}
