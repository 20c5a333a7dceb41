//! Core data models for curator
//!
//! An [`Entry`] is one node of a tree listing together with the decision the
//! classifier made for it. Entries are built once, never mutated, and sorted
//! by path before serialization.

use serde::{Deserialize, Serialize};

/// Node kind as reported by the tree listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Dir,
}

impl NodeKind {
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir {
            NodeKind::Dir
        } else {
            NodeKind::File
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Dir)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Dir => write!(f, "dir"),
        }
    }
}

/// Classification outcome for a single entry.
///
/// Files get `Keep`/`Omit`; directories get the `_all` variants, which
/// imply every descendant inherits the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Keep,
    Omit,
    KeepAll,
    OmitAll,
    /// Directory with both kept and omitted descendants. No aggregation pass
    /// exists yet, so the classifier never produces it.
    Mixed,
}

impl Decision {
    pub fn keep(kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Decision::Keep,
            NodeKind::Dir => Decision::KeepAll,
        }
    }

    pub fn omit(kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Decision::Omit,
            NodeKind::Dir => Decision::OmitAll,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Decision::Keep | Decision::KeepAll)
    }

    pub fn is_omit(&self) -> bool {
        matches!(self, Decision::Omit | Decision::OmitAll)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Keep => write!(f, "keep"),
            Decision::Omit => write!(f, "omit"),
            Decision::KeepAll => write!(f, "keep_all"),
            Decision::OmitAll => write!(f, "omit_all"),
            Decision::Mixed => write!(f, "mixed"),
        }
    }
}

/// One classified node of the tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Path as listed; directories carry a trailing `/`
    pub path: String,
    pub node: NodeKind,
    pub decision: Decision,
    /// Never empty
    pub reasons: Vec<String>,
}

/// Repository identity stamped on every artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    pub repo: String,
    pub branch: String,
    pub commit: String,
}

/// The structured tree document (`curated-tree.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedTree {
    pub repo: String,
    pub branch: String,
    pub commit: String,
    /// Always false: whole listings are processed
    pub truncated: bool,
    pub entries: Vec<Entry>,
}

impl CuratedTree {
    /// Build the document, sorting entries ascending by path
    pub fn new(identity: &RepoIdentity, mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            repo: identity.repo.clone(),
            branch: identity.branch.clone(),
            commit: identity.commit.clone(),
            truncated: false,
            entries,
        }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_entries(&self.entries)
    }
}

/// Decision tallies over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    /// `keep` + `keep_all`
    pub keep: usize,
    /// `omit` + `omit_all`
    pub omit: usize,
}

impl Statistics {
    pub fn from_entries(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            stats.total += 1;
            if entry.decision.is_keep() {
                stats.keep += 1;
            } else if entry.decision.is_omit() {
                stats.omit += 1;
            }
            stats
        })
    }
}
