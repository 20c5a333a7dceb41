//! Sparse-checkout reporter
//!
//! Include patterns as positive lines, then the mandatory exclusions
//! negated. The negative block always comes from [`MANDATORY_EXCLUSIONS`],
//! the same list the classifier is guaranteed to receive.

use crate::config::MANDATORY_EXCLUSIONS;
use crate::models::RepoIdentity;

pub const MANDATORY_HEADER: &str = "# MANDATORY GLOBAL EXCLUSIONS (DO NOT OMIT)";

/// Render the sparse-checkout file (newline-joined, no trailing newline)
pub fn render(identity: &RepoIdentity, include: &[String]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(include.len() + MANDATORY_EXCLUSIONS.len() + 3);
    lines.push(format!("# Core {} sources", identity.repo));
    lines.extend(include.iter().cloned());
    lines.push(String::new());
    lines.push(MANDATORY_HEADER.to_string());
    lines.extend(MANDATORY_EXCLUSIONS.iter().map(|p| format!("!{}", p)));
    lines.join("\n")
}
