use std::path::PathBuf;

use assettrack_core::validation::ValidationPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be one of 'permissive' or 'strict', got '{value}'")]
    InvalidPolicy { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0), got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// Contract and host configuration loaded from environment variables.
///
/// All fields have defaults suitable for local runs.
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// Checks applied to `create` arguments (default: permissive).
    pub validation_policy: ValidationPolicy,
    /// JSON snapshot the host loads at start and saves at exit.
    pub snapshot_path: Option<PathBuf>,
    /// Run the seed step when the host starts with an empty ledger.
    pub seed_on_start: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            validation_policy: ValidationPolicy::Permissive,
            snapshot_path: None,
            seed_on_start: true,
        }
    }
}

impl ContractConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default      |
    /// |---------------------------|--------------|
    /// | `ASSET_VALIDATION_POLICY` | `permissive` |
    /// | `LEDGER_SNAPSHOT_PATH`    | unset        |
    /// | `LEDGER_SEED_ON_START`    | `true`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let validation_policy = match lookup("ASSET_VALIDATION_POLICY") {
            Some(value) => ValidationPolicy::from_name(&value).ok_or(ConfigError::InvalidPolicy {
                var: "ASSET_VALIDATION_POLICY",
                value,
            })?,
            None => defaults.validation_policy,
        };

        let snapshot_path = lookup("LEDGER_SNAPSHOT_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let seed_on_start = match lookup("LEDGER_SEED_ON_START") {
            Some(value) => parse_bool("LEDGER_SEED_ON_START", value)?,
            None => defaults.seed_on_start,
        };

        Ok(Self {
            validation_policy,
            snapshot_path,
            seed_on_start,
        })
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ContractConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ContractConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.validation_policy, ValidationPolicy::Permissive);
        assert_eq!(config.snapshot_path, None);
        assert!(config.seed_on_start);
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("ASSET_VALIDATION_POLICY", "strict"),
            ("LEDGER_SNAPSHOT_PATH", "/tmp/ledger.json"),
            ("LEDGER_SEED_ON_START", "0"),
        ])
        .unwrap();
        assert_eq!(config.validation_policy, ValidationPolicy::Strict);
        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/ledger.json")));
        assert!(!config.seed_on_start);
    }

    #[test]
    fn blank_snapshot_path_is_unset() {
        let config = load(&[("LEDGER_SNAPSHOT_PATH", "  ")]).unwrap();
        assert_eq!(config.snapshot_path, None);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert_matches!(
            load(&[("ASSET_VALIDATION_POLICY", "lenient")]),
            Err(ConfigError::InvalidPolicy { value, .. }) if value == "lenient"
        );
    }

    #[test]
    fn rejects_malformed_bool() {
        assert_matches!(
            load(&[("LEDGER_SEED_ON_START", "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        );
    }
}
