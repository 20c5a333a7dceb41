//! Tree listing snapshots
//!
//! A snapshot is a tab-separated listing, one node per line:
//!
//! ```text
//! 040000 tree<TAB>packages/wxt/src
//! 100644 blob<TAB>packages/wxt/src/index.ts
//! ```
//!
//! The first field carries the node kind (`tree` marks a directory); the
//! remaining fields, rejoined on tab, are the path. Lines with fewer than
//! two fields are skipped without comment.

use anyhow::{Context, Result};
use std::path::Path;

/// Marker in the first field identifying a directory
pub const DIR_MARKER: &str = "tree";

/// One parsed listing line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingNode {
    pub path: String,
    pub is_dir: bool,
}

/// Parse a whole listing
pub fn parse_listing(text: &str) -> Vec<ListingNode> {
    text.trim().split('\n').filter_map(parse_line).collect()
}

/// Parse a single line; `None` when it has fewer than two fields
pub fn parse_line(line: &str) -> Option<ListingNode> {
    let (mode, rest) = line.split_once('\t')?;
    Some(ListingNode {
        path: rest.trim().to_string(),
        is_dir: mode.contains(DIR_MARKER),
    })
}

/// Read and parse a snapshot file. Invalid UTF-8 in a path is replaced
/// with U+FFFD rather than failing the whole listing.
pub fn read_snapshot(path: &Path) -> Result<Vec<ListingNode>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read tree snapshot {}", path.display()))?;
    Ok(parse_listing(&String::from_utf8_lossy(&bytes)))
}
