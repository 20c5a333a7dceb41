//! Curator - keep/omit classification for repository tree listings
//!
//! Reads a tab-separated tree snapshot, decides for every node whether it
//! belongs to a curated subset using ordered include/exclude globs, and
//! emits a JSON tree, a sparse-checkout file and a YAML summary.

pub mod classifier;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod snapshot;
