//! Default configuration values

/// Default pre-commit configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";
