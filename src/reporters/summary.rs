//! Curation summary reporter (`curation.yaml`)

use crate::models::RepoIdentity;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Human-readable record of what a curation keeps and drops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationSummary {
    pub repo: String,
    pub branch: String,
    pub commit: String,
    pub date: String,
    pub keep: Vec<String>,
    pub exclude: Vec<String>,
}

impl CurationSummary {
    pub fn new(
        identity: &RepoIdentity,
        date: NaiveDate,
        keep: &[String],
        exclude: &[String],
    ) -> Self {
        Self {
            repo: identity.repo.clone(),
            branch: identity.branch.clone(),
            commit: identity.commit.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            keep: keep.to_vec(),
            exclude: exclude.to_vec(),
        }
    }
}

/// Render the summary as YAML
pub fn render(summary: &CurationSummary) -> Result<String> {
    Ok(serde_yaml::to_string(summary)?)
}
