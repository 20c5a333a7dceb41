//! Curation pipeline
//!
//! Orchestrates one curation run:
//! 1. Read and parse the tree snapshot
//! 2. Classify every node against the profile's patterns
//! 3. Sort entries into the tree document
//! 4. Write the artifacts (unless running dry)

use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::config::CurationConfig;
use crate::models::{CuratedTree, RepoIdentity};
use crate::reporters::ArtifactSet;
use crate::snapshot::ListingNode;

/// A profile prepared for classification
pub struct Pipeline {
    identity: RepoIdentity,
    include: Vec<String>,
    exclude: Vec<String>,
    classifier: Classifier,
}

impl Pipeline {
    /// Compile the profile's pattern lists.
    pub fn new(config: &CurationConfig) -> Result<Self> {
        let include = config.patterns.include.clone();
        let exclude = config.patterns.effective_excludes();
        let classifier = Classifier::new(&include, &exclude)?;
        debug!(
            "Compiled {} include and {} exclude patterns for {}",
            include.len(),
            exclude.len(),
            config.repo.name
        );
        Ok(Self {
            identity: config.identity(),
            include,
            exclude,
            classifier,
        })
    }

    /// Classify parsed listing nodes into a sorted tree document.
    pub fn curate(&self, nodes: &[ListingNode]) -> CuratedTree {
        let entries = self
            .classifier
            .classify_all(nodes.iter().map(|n| (n.path.as_str(), n.is_dir)));
        CuratedTree::new(&self.identity, entries)
    }

    /// Write the three artifacts for a curated tree.
    pub fn write_artifacts(
        &self,
        tree: &CuratedTree,
        out_dir: &Path,
        date: NaiveDate,
    ) -> Result<Vec<PathBuf>> {
        let set = ArtifactSet {
            tree,
            identity: &self.identity,
            include: &self.include,
            exclude: &self.exclude,
            date,
        };
        let written = set.write_all(out_dir)?;

        let stats = tree.statistics();
        info!(
            "Curated {}: {} entries, {} keep, {} omit",
            self.identity.repo, stats.total, stats.keep, stats.omit
        );
        Ok(written)
    }
}
