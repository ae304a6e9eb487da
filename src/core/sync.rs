//! Per-file synchronization
//!
//! One invocation reads the lockfile and the pre-commit config, rewrites the
//! config in memory, and writes it back as a whole only if a line changed.
//! There is no partial persistence and no retry; the first error aborts the
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::db::DependencyDb;
use crate::config::defaults::DEFAULT_CONFIG_FILE;
use crate::core::index::VersionIndex;
use crate::core::lock::UvLock;
use crate::core::precommit::PreCommitConfig;
use crate::core::rewrite::{self, PinUpdate, RevUpdate};
use crate::error::{ConfigError, SyncError};

/// Knobs consumed by the sync
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Package names excluded from `rev:` sync (their versions still feed
    /// additional-dependency pins)
    pub skip: Vec<String>,

    /// Path to the pre-commit config file
    pub config: PathBuf,

    /// Rewrite additional-dependency pins
    pub additional_dependencies: bool,

    /// Trust `# frozen:` annotations on commit-hash pins
    pub frozen: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            skip: Vec::new(),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            additional_dependencies: true,
            frozen: false,
        }
    }
}

/// Result of synchronizing the config against one lockfile
#[derive(Debug, Default)]
pub struct SyncResult {
    /// Whether any line was rewritten
    pub changed: bool,

    /// Rewritten `rev:` lines
    pub rev_updates: Vec<RevUpdate>,

    /// Rewritten additional-dependency pins
    pub dependency_updates: Vec<PinUpdate>,
}

/// Synchronize the config file with one lockfile
pub fn sync_file(
    lockfile: &Path,
    options: &SyncOptions,
    db: &DependencyDb,
) -> Result<SyncResult, SyncError> {
    let lock = UvLock::load(lockfile)?;
    tracing::debug!("loaded {} packages from {}", lock.package.len(), lockfile.display());

    let index = VersionIndex::build(&lock.package, &options.skip, db);

    let original = fs::read_to_string(&options.config).map_err(|e| ConfigError::ReadFile {
        path: options.config.clone(),
        error: e.to_string(),
    })?;

    // Malformed YAML is fatal for this file; the rewrite itself only ever
    // sees raw lines.
    let structure = PreCommitConfig::from_yaml(&original).map_err(|source| ConfigError::Parse {
        path: options.config.clone(),
        source,
    })?;
    tracing::debug!("config declares {} repositories", structure.repos.len());

    let mut lines: Vec<String> = original.split_inclusive('\n').map(str::to_string).collect();

    let rev_updates = rewrite::sync_revisions(&mut lines, &index, options.frozen);
    let dependency_updates = if options.additional_dependencies {
        rewrite::sync_additional_dependencies(&mut lines, &index)
    } else {
        Vec::new()
    };

    let changed = !rev_updates.is_empty() || !dependency_updates.is_empty();
    if changed {
        fs::write(&options.config, lines.concat()).map_err(|e| ConfigError::WriteFile {
            path: options.config.clone(),
            error: e.to_string(),
        })?;
    }

    Ok(SyncResult {
        changed,
        rev_updates,
        dependency_updates,
    })
}
