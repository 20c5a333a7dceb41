//! Configuration module for curator
//!
//! This module handles:
//! - Curation profiles (curation.toml / .curationrc.json)
//! - The built-in wxt-dev/wxt profile
//! - Mandatory exclusions shared by the classifier and sparse-checkout output

mod project_config;

pub use project_config::{
    load_config_file,
    load_project_config,
    CurationConfig,
    PathsConfig,
    PatternConfig,
    RepoConfig,
    CONFIG_FILE_NAMES,
    MANDATORY_EXCLUSIONS,
};
