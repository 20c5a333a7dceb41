//! Artifact writers for curator
//!
//! Every curation produces three files:
//! - `curated-tree.json` - sorted entries with decisions and reasons
//! - `sparse-checkout` - include patterns plus the mandatory negative block
//! - `curation.yaml` - identity, date, keep and exclude lists
//!
//! Writers only format state the classifier already computed.

mod sparse_checkout;
mod summary;
mod tree;

pub use sparse_checkout::MANDATORY_HEADER;
pub use summary::CurationSummary;

use crate::models::{CuratedTree, RepoIdentity};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// The generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Tree,
    SparseCheckout,
    Summary,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Tree, Artifact::SparseCheckout, Artifact::Summary];

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Tree => "curated-tree.json",
            Artifact::SparseCheckout => "sparse-checkout",
            Artifact::Summary => "curation.yaml",
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Everything the writers need for one run
#[derive(Debug, Clone)]
pub struct ArtifactSet<'a> {
    pub tree: &'a CuratedTree,
    pub identity: &'a RepoIdentity,
    pub include: &'a [String],
    pub exclude: &'a [String],
    pub date: NaiveDate,
}

impl ArtifactSet<'_> {
    /// Render one artifact to text
    pub fn render(&self, artifact: Artifact) -> Result<String> {
        match artifact {
            Artifact::Tree => tree::render(self.tree),
            Artifact::SparseCheckout => Ok(sparse_checkout::render(self.identity, self.include)),
            Artifact::Summary => summary::render(&CurationSummary::new(
                self.identity,
                self.date,
                self.include,
                self.exclude,
            )),
        }
    }

    /// Write all artifacts into `out_dir`, creating it if needed.
    /// Returns the written paths in [`Artifact::ALL`] order.
    pub fn write_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

        let mut written = Vec::with_capacity(Artifact::ALL.len());
        for artifact in Artifact::ALL {
            let path = out_dir.join(artifact.file_name());
            let content = self.render(artifact)?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({})", path.display(), artifact);
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Decision, Entry, NodeKind};

    pub(crate) fn test_identity() -> RepoIdentity {
        RepoIdentity {
            repo: "acme/widgets".into(),
            branch: "main".into(),
            commit: "0123abcd".into(),
        }
    }

    /// Create a small classified tree for testing
    pub(crate) fn test_tree() -> CuratedTree {
        CuratedTree::new(
            &test_identity(),
            vec![
                Entry {
                    path: "src/lib.rs".into(),
                    node: NodeKind::File,
                    decision: Decision::Keep,
                    reasons: vec!["Included by pattern 'src/**'".into()],
                },
                Entry {
                    path: "docs/".into(),
                    node: NodeKind::Dir,
                    decision: Decision::OmitAll,
                    reasons: vec!["Excluded by pattern 'docs/**'".into()],
                },
                Entry {
                    path: "README.md".into(),
                    node: NodeKind::File,
                    decision: Decision::Omit,
                    reasons: vec!["Outside include patterns".into()],
                },
            ],
        )
    }

    #[test]
    fn test_artifact_names() {
        let names: Vec<String> = Artifact::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["curated-tree.json", "sparse-checkout", "curation.yaml"]);
    }

    #[test]
    fn test_write_all_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested/out");
        let tree = test_tree();
        let identity = test_identity();
        let include = vec!["src/**".to_string()];
        let exclude = vec!["docs/**".to_string()];
        let set = ArtifactSet {
            tree: &tree,
            identity: &identity,
            include: &include,
            exclude: &exclude,
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };

        let written = set.write_all(&out_dir).expect("write artifacts");
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }

        let checkout = std::fs::read_to_string(out_dir.join("sparse-checkout")).unwrap();
        assert!(checkout.starts_with("# Core acme/widgets sources\nsrc/**\n\n"));

        let summary: CurationSummary =
            serde_yaml::from_str(&std::fs::read_to_string(out_dir.join("curation.yaml")).unwrap())
                .unwrap();
        assert_eq!(summary.date, "2025-01-31");
        assert_eq!(summary.exclude, exclude);
    }

    #[test]
    fn test_write_all_fails_on_file_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "not a directory").unwrap();
        let tree = test_tree();
        let identity = test_identity();
        let set = ArtifactSet {
            tree: &tree,
            identity: &identity,
            include: &[],
            exclude: &[],
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };
        assert!(set.write_all(&blocker).is_err());
    }
}
