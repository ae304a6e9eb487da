//! Output formatting
//!
//! This module provides utilities for displaying status lines and errors to
//! the user. Normal operation prints one line per rewritten pin; `--quiet`
//! suppresses everything except errors.

use std::path::Path;

use crate::core::sync::SyncResult;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Display a fatal error and its cause chain
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Print a summary of what the sync rewrote in the config file
pub fn report(config: &Path, result: &SyncResult) {
    if !result.changed {
        tracing::info!("{} is up to date", config.display());
        return;
    }

    for update in &result.rev_updates {
        println!(
            "{} {}: {} -> {}",
            status::INFO,
            update.repo,
            update.old,
            update.new
        );
    }
    for update in &result.dependency_updates {
        println!(
            "{} {}: {} -> {}",
            status::INFO,
            update.package,
            update.old,
            update.new
        );
    }
    println!("{} {} updated", status::WARNING, config.display());
}
