//! Tree document reporter
//!
//! Outputs the sorted, classified entries as pretty-printed JSON
//! (`curated-tree.json`).

use crate::models::CuratedTree;
use anyhow::Result;

/// Render the tree document as JSON
pub fn render(tree: &CuratedTree) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}
