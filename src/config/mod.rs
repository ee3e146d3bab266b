//! Runtime configuration.
//!
//! All settings come from the environment and are read once in the binaries:
//! - Database connection settings in [`database`]
//! - Build flavor list parsing in [`flavors`]
//! - Debug switch ([`debug_enabled`])
//!
//! | variable | default |
//! |---|---|
//! | `MODULE_QUERY_HOST` | `rcdb-internal` |
//! | `MODULE_QUERY_PORT` | `3306` |
//! | `MODULE_QUERY_DB` | `p3` |
//! | `MODULE_QUERY_USER` | `modulequery` |
//! | `MODULE_QUERY_PASSWD` | required |
//! | `FASRCSW_FLAVORS` | [`DEFAULT_FLAVORS`] |
//! | `MODULE_QUERY_DEBUG` | off |

pub mod database;
pub mod flavors;

pub use database::DatabaseConfig;
pub use flavors::{parse_flavors, DEFAULT_FLAVORS, FLAVORS_VAR};

/// Environment variable that enables debug logging and full error output.
pub const DEBUG_VAR: &str = "MODULE_QUERY_DEBUG";

/// Whether debug output was requested through `MODULE_QUERY_DEBUG`.
pub fn debug_enabled() -> bool {
    is_truthy(std::env::var(DEBUG_VAR).ok().as_deref())
}

// Any non-empty value turns debug on, "0" included.
fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_values() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some("")));
        assert!(is_truthy(Some("0")));
        assert!(is_truthy(Some("false")));
        assert!(is_truthy(Some("1")));
        assert!(is_truthy(Some("yes")));
    }
}
