//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::db::{self, DependencyDb};
use crate::config::defaults::DEFAULT_CONFIG_FILE;
use crate::core::sync::{self, SyncOptions};

/// Sync-with-uv - keep pre-commit hooks in sync with uv.lock
///
/// Rewrites the pinned `rev:` lines and additional-dependency version pins
/// of .pre-commit-config.yaml to match the versions resolved in uv.lock.
/// Exits non-zero when any line was rewritten, so it can run as a pre-commit
/// hook itself.
#[derive(Parser, Debug)]
#[command(name = "sync-with-uv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lockfiles to synchronize from (as passed by pre-commit)
    pub filenames: Vec<PathBuf>,

    /// Packages to skip
    #[arg(long, num_args = 0.., value_name = "PACKAGE")]
    pub skip: Vec<String>,

    /// Path to the .pre-commit-config.yaml file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Trust `# frozen: xxx` comments for frozen revisions.
    ///
    /// If the comment records the same revision as the lock file the check
    /// passes, otherwise the revision is replaced with the expected tag.
    #[arg(long)]
    pub allow_frozen: bool,

    /// Skip matching versions for hooks' additional dependencies
    #[arg(long)]
    pub skip_additional_dependencies: bool,

    /// Path to a custom package list (json)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Tracing level implied by the output flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            match self.verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::INFO,
                _ => tracing::Level::DEBUG,
            }
        }
    }

    /// Run the sync over every lockfile given on the command line.
    ///
    /// Lockfiles are processed sequentially; the first error aborts the run.
    /// Returns `true` when at least one config line was rewritten.
    pub fn run(&self) -> Result<bool> {
        let db: DependencyDb = match &self.db {
            Some(path) => db::load_mapping(path).with_context(|| {
                format!("Failed to load package mapping from {}", path.display())
            })?,
            None => db::builtin_mapping(),
        };

        let options = SyncOptions {
            skip: self.skip.clone(),
            config: self.config.clone(),
            additional_dependencies: !self.skip_additional_dependencies,
            frozen: self.allow_frozen,
        };

        let mut changed = false;
        for lockfile in &self.filenames {
            let result = sync::sync_file(lockfile, &options, &db).with_context(|| {
                format!(
                    "Failed to sync {} with {}",
                    options.config.display(),
                    lockfile.display()
                )
            })?;
            if !self.quiet {
                output::report(&options.config, &result);
            }
            changed |= result.changed;
        }

        Ok(changed)
    }
}
