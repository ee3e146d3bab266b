//! Build flavor list handling.

use std::sync::LazyLock;

use regex::Regex;

/// Environment variable holding the default comma separated flavor list.
pub const FLAVORS_VAR: &str = "FASRCSW_FLAVORS";

/// Flavors searched when neither `--flavors` nor `FASRCSW_FLAVORS` is given.
pub const DEFAULT_FLAVORS: &str =
    "HeLmod CentOS 7,Easy Build,Singularity 3,Bioconda,Anaconda,x86_64 binary,Java";

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Split a comma separated flavor list.
///
/// Whitespace around each comma is removed and empty entries are dropped.
///
/// # Example
///
/// ```
/// use module_query::config::parse_flavors;
///
/// assert_eq!(
///     parse_flavors("Easy Build , Bioconda,Java"),
///     vec!["Easy Build", "Bioconda", "Java"]
/// );
/// ```
pub fn parse_flavors(csv: &str) -> Vec<String> {
    SEPARATOR
        .split(csv.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
