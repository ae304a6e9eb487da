//! Lockfile handling
//!
//! The uv.lock file records exact resolved package versions. It is read-only
//! input; sync-with-uv never writes it.

use serde::Deserialize;
use std::path::Path;

use crate::error::LockError;

/// Parsed uv.lock contents
///
/// Only the fields the sync needs are modeled; everything else in the
/// lockfile is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UvLock {
    /// Resolved packages, in lockfile order
    pub package: Vec<LockedPackage>,
}

/// One resolved package entry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LockedPackage {
    /// Package name as recorded by uv
    pub name: String,

    /// Exact resolved version
    pub version: String,
}

impl UvLock {
    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a lockfile from disk
    pub fn load(path: &Path) -> Result<Self, LockError> {
        let content = std::fs::read_to_string(path).map_err(|e| LockError::ReadFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|source| LockError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
