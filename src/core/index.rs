//! Version index built from the lockfile
//!
//! Two lookups derived once per run and immutable afterwards: repository URL
//! to resolved revision (for `rev:` lines) and normalized package name to
//! version (for additional-dependency pins).

use std::collections::HashMap;

use crate::config::db::DependencyDb;
use crate::core::lock::LockedPackage;

/// Resolved pin for one pre-commit repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPin {
    /// Package name the repository distributes
    pub name: String,

    /// Revision the config should pin, tag template already applied
    pub rev: String,
}

/// Lookup tables from lockfile contents to config values
#[derive(Debug, Default)]
pub struct VersionIndex {
    by_repository: HashMap<String, RepoPin>,
    by_package: HashMap<String, String>,
}

/// Normalize a package name: ASCII lowercase, underscores to hyphens
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

impl VersionIndex {
    /// Build the index from lockfile records.
    ///
    /// Every record contributes its version to the package lookup (last
    /// write wins on duplicate names). Packages listed in `skip` or absent
    /// from the mapping table are silently excluded from the repository
    /// lookup; `skip` does not affect the package lookup.
    pub fn build(packages: &[LockedPackage], skip: &[String], db: &DependencyDb) -> Self {
        let mut index = Self::default();

        for package in packages {
            index
                .by_package
                .insert(normalize_name(&package.name), package.version.clone());

            if skip.contains(&package.name) {
                continue;
            }

            if let Some(mapping) = db.get(&package.name) {
                let rev = mapping.rev.replace("${rev}", &package.version);
                index.by_repository.insert(
                    mapping.repo.clone(),
                    RepoPin {
                        name: package.name.clone(),
                        rev,
                    },
                );
            }
        }

        index
    }

    /// Resolved pin for a repository URL, if the lockfile manages it
    pub fn repo_pin(&self, repo: &str) -> Option<&RepoPin> {
        self.by_repository.get(repo)
    }

    /// Resolved version for a normalized package name
    pub fn package_version(&self, name: &str) -> Option<&str> {
        self.by_package.get(name).map(String::as_str)
    }
}
