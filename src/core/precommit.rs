//! Structural view of .pre-commit-config.yaml
//!
//! The rewrite engine works on raw text; this parse validates the document
//! shape up front (malformed YAML aborts the file) and provides the
//! repository list for diagnostics. Unknown keys are ignored.

use serde::Deserialize;

/// Parsed pre-commit configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PreCommitConfig {
    /// Hook repositories, in declaration order
    pub repos: Vec<RepoEntry>,
}

/// One entry of the `repos` sequence
#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    /// Repository URL, or the literal `local`
    pub repo: String,

    /// Pinned revision; absent for local repos. Kept as a raw value since
    /// unquoted revisions may scan as numbers.
    #[serde(default)]
    pub rev: Option<serde_yaml_ng::Value>,

    /// Hooks configured for this repository
    #[serde(default)]
    pub hooks: Vec<HookEntry>,
}

/// One hook of a repository entry
#[derive(Debug, Clone, Deserialize)]
pub struct HookEntry {
    /// Hook id
    pub id: String,

    /// Extra packages installed into the hook environment
    #[serde(default)]
    pub additional_dependencies: Vec<String>,
}

impl PreCommitConfig {
    /// Parse from YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }

    /// Revision pinned for a repository URL, as written in the document
    pub fn repo_rev(&self, repo: &str) -> Option<String> {
        self.repos
            .iter()
            .find(|entry| entry.repo == repo)?
            .rev
            .as_ref()
            .map(|rev| match rev {
                serde_yaml_ng::Value::String(s) => s.clone(),
                other => serde_yaml_ng::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            })
    }
}
