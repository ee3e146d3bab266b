//! Database connection with bounded retry.

use std::future::Future;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::database::CHARSET;
use crate::config::DatabaseConfig;
use crate::error::{ModuleQueryError, Result};

/// How many times to try connecting, and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Pause after a failed attempt that will be retried.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

/// Run `connect` until it succeeds or the policy's attempts are used up.
///
/// Attempts are sequential. The last driver error is kept as the source of
/// the returned [`ModuleQueryError::Connection`].
pub async fn connect_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    host: &str,
    mut connect: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match connect().await {
            Ok(connection) => {
                tracing::debug!("Connected to {} on attempt {}", host, attempt);
                return Ok(connection);
            }
            Err(e) => {
                tracing::debug!("Connection attempt {} to {} failed: {}", attempt, host, e);
                last_error = Some(e);
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.backoff).await;
                }
            }
        }
    }

    Err(ModuleQueryError::Connection {
        host: host.to_string(),
        source: last_error,
    })
}

/// Connection options for the configured database.
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .charset(CHARSET)
}

/// Open a MySQL connection, retrying per `policy`.
pub async fn connect(config: &DatabaseConfig, policy: &RetryPolicy) -> Result<MySqlConnection> {
    tracing::debug!("Connecting with {:?}", config);
    let options = connect_options(config);
    connect_with_retry(policy, &config.host, || MySqlConnection::connect_with(&options)).await
}
