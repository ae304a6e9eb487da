//! Error types for sync-with-uv
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Lockfile errors
#[derive(Error, Debug)]
pub enum LockError {
    /// IO error reading the lockfile
    #[error("Failed to read lockfile '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Malformed lockfile (missing or non-array package table, bad TOML)
    #[error("Failed to parse lockfile '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Pre-commit configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// IO error writing the config file back
    #[error("Failed to write config '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Malformed YAML
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}

/// Custom package-mapping table errors
#[derive(Error, Debug)]
pub enum DbError {
    /// IO error reading the mapping file
    #[error("Failed to read package mapping '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Malformed JSON mapping
    #[error("Failed to parse package mapping: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level sync-with-uv error type
#[derive(Error, Debug)]
pub enum SyncError {
    /// Lockfile error
    #[error("Lockfile error: {0}")]
    Lock(#[from] LockError),

    /// Config file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Package mapping error
    #[error("Package mapping error: {0}")]
    Db(#[from] DbError),
}
