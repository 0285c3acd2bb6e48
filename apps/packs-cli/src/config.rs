//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.
//!
//! | Variable              | Default                      | Meaning                     |
//! |-----------------------|------------------------------|-----------------------------|
//! | `PACKS_SIZES`         | `5000,2000,1000,500,250`     | Comma-separated pack sizes  |
//! | `PACKS_SEARCH_BUDGET` | unset (exhaustive)           | Exact-search node budget    |
//! | `PACKS_LOG`           | `RUST_LOG`, then `warn`      | tracing filter directive    |

use std::env;

use packs_core::STANDARD_PACK_SIZES;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Pack sizes used by `packs order` unless `--packs` is given.
    pub pack_sizes: Vec<i64>,

    /// Node budget for the exact search.
    pub search_budget: Option<u64>,

    /// tracing filter directive, e.g. `warn` or `packs_core=debug`.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            pack_sizes: STANDARD_PACK_SIZES.to_vec(),
            search_budget: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = CliConfig::default();

        let pack_sizes = match lookup("PACKS_SIZES") {
            Some(raw) => match parse_pack_sizes(&raw) {
                Some(sizes) => sizes,
                None => return Err(invalid("PACKS_SIZES", raw)),
            },
            None => defaults.pack_sizes,
        };

        let search_budget = match lookup("PACKS_SEARCH_BUDGET") {
            Some(raw) => match raw.trim().parse() {
                Ok(budget) => Some(budget),
                Err(_) => return Err(invalid("PACKS_SEARCH_BUDGET", raw)),
            },
            None => None,
        };

        let log_filter = lookup("PACKS_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or(defaults.log_filter);

        Ok(CliConfig {
            pack_sizes,
            search_budget,
            log_filter,
        })
    }
}

/// Parses `"5000, 2000,250"` into sizes. `None` on any non-integer piece.
///
/// Positivity and duplicates are left to `packs_core::Catalog`.
fn parse_pack_sizes(raw: &str) -> Option<Vec<i64>> {
    raw.split(',')
        .map(|piece| piece.trim().parse::<i64>().ok())
        .collect()
}

fn invalid(var: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.pack_sizes, vec![5000, 2000, 1000, 500, 250]);
    }

    #[test]
    fn test_reads_environment() {
        let config = load(&[
            ("PACKS_SIZES", "500, 251,250"),
            ("PACKS_SEARCH_BUDGET", "10000"),
            ("RUST_LOG", "info"),
        ])
        .unwrap();
        assert_eq!(config.pack_sizes, vec![500, 251, 250]);
        assert_eq!(config.search_budget, Some(10_000));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_packs_log_wins_over_rust_log() {
        let config = load(&[("PACKS_LOG", "debug"), ("RUST_LOG", "info")]).unwrap();
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = load(&[("PACKS_SIZES", "500,abc")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PACKS_SIZES: '500,abc'");

        assert!(load(&[("PACKS_SIZES", "")]).is_err());
        assert!(load(&[("PACKS_SEARCH_BUDGET", "-1")]).is_err());
    }
}
