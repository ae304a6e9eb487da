//! Core business logic module
//!
//! This module contains all business logic for sync-with-uv.
//!
//! # Submodules
//!
//! - [`lock`] - Lockfile (uv.lock) parsing
//! - [`index`] - Version index built from the lockfile
//! - [`precommit`] - Structural view of .pre-commit-config.yaml
//! - [`rewrite`] - Line-level rewrite engine
//! - [`sync`] - Per-file synchronization

pub mod index;
pub mod lock;
pub mod precommit;
pub mod rewrite;
pub mod sync;
