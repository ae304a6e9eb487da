//! Package to repository mapping
//!
//! Maps package names to the pre-commit repository that distributes them and
//! the tag template their releases use. The built-in table is constant
//! reference data loaded at startup; a custom table with the same shape can
//! replace it wholesale via `--db`.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::DbError;

/// Repository and revision-tag template for one known package
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoMapping {
    /// Pre-commit repository URL
    pub repo: String,

    /// Revision tag template; `${rev}` is replaced with the locked version
    pub rev: String,
}

/// Mapping from package name to its pre-commit repository
pub type DependencyDb = HashMap<String, RepoMapping>;

/// Built-in package mapping as `(name, repository, revision template)`
const BUILTIN_MAPPING: &[(&str, &str, &str)] = &[
    (
        "autopep8",
        "https://github.com/pre-commit/mirrors-autopep8",
        "v${rev}",
    ),
    ("bandit", "https://github.com/PyCQA/bandit", "${rev}"),
    ("black", "https://github.com/psf/black", "${rev}"),
    (
        "commitizen",
        "https://github.com/commitizen-tools/commitizen",
        "v${rev}",
    ),
    ("flake8", "https://github.com/pycqa/flake8", "${rev}"),
    (
        "flakeheaven",
        "https://github.com/flakeheaven/flakeheaven",
        "${rev}",
    ),
    ("isort", "https://github.com/pycqa/isort", "${rev}"),
    ("mypy", "https://github.com/pre-commit/mirrors-mypy", "v${rev}"),
    ("pyupgrade", "https://github.com/asottile/pyupgrade", "v${rev}"),
    (
        "check-jsonschema",
        "https://github.com/python-jsonschema/check-jsonschema",
        "${rev}",
    ),
    ("ruff", "https://github.com/astral-sh/ruff-pre-commit", "v${rev}"),
    ("deptry", "https://github.com/fpgmaas/deptry.git", "${rev}"),
    (
        "licenseheaders",
        "https://github.com/johann-petrak/licenseheaders.git",
        "v${rev}",
    ),
    ("sqlfluff", "https://github.com/sqlfluff/sqlfluff", "${rev}"),
    (
        "tombi",
        "https://github.com/tombi-toml/tombi-pre-commit",
        "v${rev}",
    ),
];

/// Materialize the built-in mapping table
pub fn builtin_mapping() -> DependencyDb {
    BUILTIN_MAPPING
        .iter()
        .map(|&(name, repo, rev)| {
            (
                name.to_string(),
                RepoMapping {
                    repo: repo.to_string(),
                    rev: rev.to_string(),
                },
            )
        })
        .collect()
}

/// Load a custom mapping table from a JSON file
///
/// The file has the same shape as the built-in table, e.g.
/// `{"black": {"repo": "https://github.com/psf/black", "rev": "${rev}"}}`.
pub fn load_mapping(path: &Path) -> Result<DependencyDb, DbError> {
    let content = std::fs::read_to_string(path).map_err(|e| DbError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(serde_json::from_str(&content)?)
}
