//! Database connection settings.
//!
//! Settings are read once from the process environment at start-up and
//! passed by reference to the connection manager.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ModuleQueryError, Result};

/// Environment variable holding the database host.
pub const HOST_VAR: &str = "MODULE_QUERY_HOST";
/// Environment variable holding the database port.
pub const PORT_VAR: &str = "MODULE_QUERY_PORT";
/// Environment variable holding the database name.
pub const DATABASE_VAR: &str = "MODULE_QUERY_DB";
/// Environment variable holding the database user.
pub const USER_VAR: &str = "MODULE_QUERY_USER";
/// Environment variable holding the database password.
pub const PASSWORD_VAR: &str = "MODULE_QUERY_PASSWD";

pub const DEFAULT_HOST: &str = "rcdb-internal";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "p3";
pub const DEFAULT_USER: &str = "modulequery";

/// Connection charset. Report text carries non-ASCII descriptions.
pub const CHARSET: &str = "utf8mb4";

/// Database connection configuration.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use module_query::config::DatabaseConfig;
///
/// let mut vars = HashMap::new();
/// vars.insert("MODULE_QUERY_PASSWD".to_string(), "secret".to_string());
///
/// let config = DatabaseConfig::from_vars(&vars).unwrap();
/// assert_eq!(config.host, "rcdb-internal");
/// assert_eq!(config.database, "p3");
/// assert!(!format!("{:?}", config).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build the configuration from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str, default: &str| -> String {
            vars.get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let port = match vars.get(PORT_VAR).filter(|v| !v.is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ModuleQueryError::Config {
                message: format!("{PORT_VAR} must be a port number, got '{raw}'"),
            })?,
            None => DEFAULT_PORT,
        };

        let password = vars
            .get(PASSWORD_VAR)
            .cloned()
            .ok_or_else(|| ModuleQueryError::Config {
                message: format!("{PASSWORD_VAR} is not set"),
            })?;

        Ok(Self {
            host: get(HOST_VAR, DEFAULT_HOST),
            port,
            database: get(DATABASE_VAR, DEFAULT_DATABASE),
            user: get(USER_VAR, DEFAULT_USER),
            password,
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"REDACTED")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = DatabaseConfig::from_vars(&vars(&[(PASSWORD_VAR, "pw")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database, DEFAULT_DATABASE);
        assert_eq!(config.user, DEFAULT_USER);
        assert_eq!(config.password, "pw");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = DatabaseConfig::from_vars(&vars(&[
            (HOST_VAR, "db.example.org"),
            (PORT_VAR, "3307"),
            (DATABASE_VAR, "apps"),
            (USER_VAR, "reader"),
            (PASSWORD_VAR, "pw"),
        ]))
        .unwrap();
        assert_eq!(config.host, "db.example.org");
        assert_eq!(config.port, 3307);
        assert_eq!(config.database, "apps");
        assert_eq!(config.user, "reader");
    }

    #[test]
    fn missing_password_is_config_error() {
        let err = DatabaseConfig::from_vars(&HashMap::new()).unwrap_err();
        assert!(matches!(err, ModuleQueryError::Config { .. }));
        assert!(err.to_string().contains(PASSWORD_VAR));
    }

    #[test]
    fn invalid_port_is_config_error() {
        let err = DatabaseConfig::from_vars(&vars(&[(PASSWORD_VAR, "pw"), (PORT_VAR, "mysql")]))
            .unwrap_err();
        assert!(err.to_string().contains("mysql"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DatabaseConfig::from_vars(&vars(&[(PASSWORD_VAR, "hunter2")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }
}
