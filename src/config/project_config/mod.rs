//! Curation profile support
//!
//! Loads the curation profile from `curation.toml` or `.curationrc.json`
//! in a project directory, or from an explicit file. Without a profile the
//! built-in wxt-dev/wxt profile is used.
//!
//! # Configuration Format
//!
//! ```toml
//! # curation.toml
//!
//! [repo]
//! name = "wxt-dev/wxt"
//! branch = "main"
//! commit = "78f8434a0691a2e1a5be80fbebad2a4cc07c73a0"
//!
//! [patterns]
//! include = ["packages/wxt/src/**", "package.json"]
//! exclude = ["templates/**", "**/*.md"]
//!
//! [paths]
//! snapshot = "github-api-tree.txt"
//! output = "."
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::RepoIdentity;

/// Project config file names, in lookup order
pub const CONFIG_FILE_NAMES: &[&str] = &["curation.toml", ".curationrc.json"];

/// Exclusions every curation honors. The classifier always receives these
/// and the sparse-checkout file always ends with them negated.
pub const MANDATORY_EXCLUSIONS: &[&str] = &[
    "**/__tests__/**",
    "**/test/**",
    "**/tests/**",
    "**/*.test.*",
    "**/*.spec.*",
    "**/*.snap",
    "**/__mocks__/**",
    "**/fixtures/**",
    "docs/**",
    "doc/**",
    "documentation/**",
];

const BUILTIN_INCLUDE: &[&str] = &[
    // Core framework
    "packages/wxt/src/**",
    "packages/wxt/package.json",
    "packages/wxt/tsconfig.json",
    // Representative modules
    "packages/storage/src/**",
    "packages/storage/package.json",
    "packages/i18n/src/**",
    "packages/i18n/package.json",
    "packages/runner/src/**",
    "packages/runner/package.json",
    // Root configuration
    "package.json",
    "pnpm-workspace.yaml",
    "tsconfig.base.json",
    "tsconfig.json",
];

const BUILTIN_EXCLUDE: &[&str] = &[
    // Tests
    "**/__tests__/**",
    "**/test/**",
    "**/tests/**",
    "**/*.test.*",
    "**/*.spec.*",
    "**/*.snap",
    "**/e2e/**",
    "**/__snapshots__/**",
    "**/__mocks__/**",
    "**/fixtures/**",
    // Documentation
    "docs/**",
    "doc/**",
    "documentation/**",
    "**/*.md",
    // CI/CD
    ".github/**",
    // Configuration
    ".vscode/**",
    ".codecov.yml",
    ".commitlintrc.yml",
    ".prettierrc.yml",
    ".prettierignore",
    ".markdownlint.json",
    ".markdownlintignore",
    ".gitattributes",
    // Templates and examples
    "templates/**",
    "packages/wxt-demo/**",
    "packages/runner/demo-extension/**",
    // Build/scripts
    "scripts/**",
    "patches/**",
    // Lock files
    "pnpm-lock.yaml",
];

/// A complete curation profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationConfig {
    pub repo: RepoConfig,

    pub patterns: PatternConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

/// Repository identity stamped on the artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// `owner/name`
    pub name: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    pub commit: String,
}

fn default_branch() -> String {
    "main".to_string()
}

impl RepoConfig {
    pub fn identity(&self) -> RepoIdentity {
        RepoIdentity {
            repo: self.name.clone(),
            branch: self.branch.clone(),
            commit: self.commit.clone(),
        }
    }
}

/// Ordered include/exclude pattern lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Paths to keep; first match is cited
    pub include: Vec<String>,

    /// Paths to omit, checked before `include`
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl PatternConfig {
    /// Exclude patterns handed to the classifier: the configured list in
    /// order, then any mandatory exclusion it did not already name.
    pub fn effective_excludes(&self) -> Vec<String> {
        let mut patterns: Vec<String> = Vec::new();

        for p in &self.exclude {
            if !patterns.contains(p) {
                patterns.push(p.clone());
            }
        }

        for p in MANDATORY_EXCLUSIONS {
            if !patterns.iter().any(|existing| existing == p) {
                patterns.push(p.to_string());
            }
        }

        patterns
    }
}

/// Input/output locations, relative to the project directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Tab-separated tree listing
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Directory receiving the three artifacts
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            output: default_output(),
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("github-api-tree.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

impl PathsConfig {
    pub fn snapshot_in(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.snapshot)
    }

    pub fn output_in(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.output)
    }
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CurationConfig {
    /// The wxt-dev/wxt profile
    pub fn builtin() -> Self {
        Self {
            repo: RepoConfig {
                name: "wxt-dev/wxt".to_string(),
                branch: default_branch(),
                commit: "78f8434a0691a2e1a5be80fbebad2a4cc07c73a0".to_string(),
            },
            patterns: PatternConfig {
                include: BUILTIN_INCLUDE.iter().map(|s| s.to_string()).collect(),
                exclude: BUILTIN_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            },
            paths: PathsConfig::default(),
        }
    }

    pub fn identity(&self) -> RepoIdentity {
        self.repo.identity()
    }

    /// Render the profile as a commented `curation.toml`
    pub fn to_toml(&self) -> anyhow::Result<String> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            "# Curation profile\n\
             # Excludes are checked before includes; the first matching pattern is cited.\n\
             # Mandatory exclusions (tests, fixtures, docs) are always applied.\n\n{}",
            body
        ))
    }
}

/// Load the curation profile for a project directory.
///
/// Searches `curation.toml`, then `.curationrc.json`. Falls back to the
/// built-in profile when none is found or the file fails to load.
pub fn load_project_config(project_dir: &Path) -> CurationConfig {
    for name in CONFIG_FILE_NAMES {
        let path = project_dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded curation profile from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No curation profile found, using built-in profile");
    CurationConfig::builtin()
}

/// Load a profile from an explicit file; the format follows the extension
pub fn load_config_file(path: &Path) -> anyhow::Result<CurationConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let config: CurationConfig = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON config {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML config {}", path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML config {}", path.display()))?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests;
