//! Sync-with-uv - keep pre-commit hooks in sync with uv.lock
//!
//! This library rewrites the pinned `rev:` lines and additional-dependency
//! version pins of a `.pre-commit-config.yaml` file to match the package
//! versions resolved in a `uv.lock` lockfile, touching only the substrings
//! that have to change.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (lockfile parsing, version index, rewriting)
//! - [`config`] - Static reference data (built-in package mapping, defaults)
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
