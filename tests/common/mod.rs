//! Common test utilities and helpers
//!
//! This module provides shared fixtures and utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

use sync_with_uv::core::precommit::PreCommitConfig;

/// A lockfile with a mix of mapped, unmapped and dummy packages
pub const LOCK_CONTENT: &str = concat!(
    "[[package]]\n",
    "name = \"mypy\"\n",
    "version = \"0.910\"\n",
    "description = \"Optional static typing for Python\"\n",
    "optional = false\n",
    "python-versions = \">=3.5\"\n",
    "[[package]]\n",
    "name = \"flake8\"\n",
    "version = \"4.0.1\"\n",
    "description = \"the modular source code checker: pep8 pyflakes and co\"\n",
    "optional = false\n",
    "python-versions = \">=3.6\"\n",
    "[[package]]\n",
    "name = \"black\"\n",
    "version = \"21.11b1\"\n",
    "description = \"The uncompromising code formatter.\"\n",
    "optional = false\n",
    "python-versions = \">=3.6.2\"\n",
    "[[package]]\n",
    "name = \"pytest\"\n",
    "version = \"6.2.5\"\n",
    "description = \"pytest: simple powerful testing with Python\"\n",
    "optional = false\n",
    "python-versions = \">=3.6\"\n",
    "[[package]]\n",
    "name = \"foobarbaz\"\n",
    "version = \"1.0.1\"\n",
    "description = \"a dummy package\"\n",
    "optional = false\n",
    "python-versions = \">=3.6\"\n",
);

/// A pre-commit config exercising local hooks, comments, quoting and
/// dependency pins
pub const CONFIG_CONTENT: &str = concat!(
    "repos:\n",
    "  # local hooks\n",
    "  - repo: local\n",
    "    hooks:\n",
    "      - id: sync\n",
    "        name: sync with uv\n",
    "        entry: sync-with-uv\n",
    "        language: system\n",
    "        files: uv.lock\n",
    "  # mypy\n",
    "  - repo: https://github.com/pre-commit/mirrors-mypy\n",
    "    rev: v0.812\n",
    "    hooks:\n",
    "      - id: mypy\n",
    "        additional_dependencies:\n",
    "        - foobarbaz>=0.9,<1\n",
    "        - foobarbaz>=0.9,<1  # comment\n",
    "        - FOOBARBAZ>=0.9,<1\n",
    "        - FOOBARBAZ[bla]>=0.9,<1\n",
    "  # comment\n",
    "  - repo: https://github.com/pycqa/flake8\n",
    "    rev: 3.9.0\n",
    "    hooks:\n",
    "      - id: flake8\n",
    "        args: [--max-line-length=88]\n",
    "  - repo: https://github.com/psf/black\n",
    "    rev: 20.8b1 # this is a rev\n",
    "    hooks:\n",
    "      - id: black\n",
    "    # another repo\n",
    "  - repo: https://github.com/pycqa/isort\n",
    "    rev: 5.10.1\n",
    "    hooks:\n",
    "      - id: isort\n",
    "        args: [--filter-files]\n",
    "  - repo: https://example.org/fakepackages/foobarbaz\n",
    "    rev: 1.0.0\n",
    "    hooks:\n",
    "      - id: foobarbaz\n",
);

/// A custom package mapping covering the dummy package
pub const CUSTOM_DB_CONTENT: &str = r#"{
  "foobarbaz": {
    "repo": "https://example.org/fakepackages/foobarbaz",
    "rev": "${rev}"
  }
}"#;

/// Test project context
///
/// Creates a temporary directory for test projects and provides utilities
/// for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Set up a project with the standard lockfile and config fixtures
#[allow(dead_code)]
pub fn setup_project() -> TestProject {
    let project = TestProject::new();
    project.create_file("uv.lock", LOCK_CONTENT);
    project.create_file(".pre-commit-config.yaml", CONFIG_CONTENT);
    project
}

/// Return the revision a repo is pinned to in the project's config
#[allow(dead_code)]
pub fn get_repo_version(project: &TestProject, repo: &str) -> Option<String> {
    let content = project.read_file(".pre-commit-config.yaml");
    let config = PreCommitConfig::from_yaml(&content).expect("Failed to parse config");
    config.repo_rev(repo)
}
