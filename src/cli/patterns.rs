//! Patterns command - show the effective pattern lists

use anyhow::Result;
use console::style;
use std::path::Path;

use curator::config::MANDATORY_EXCLUSIONS;

use super::resolve_config;

pub fn run(project_dir: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(project_dir, config_path)?;

    println!(
        "{} {} @ {} ({})",
        style("Profile").bold(),
        config.repo.name,
        config.repo.branch,
        config.repo.commit
    );

    println!("\n{}", style("Exclude (checked first):").bold());
    for (i, pattern) in config.patterns.effective_excludes().iter().enumerate() {
        let marker = if MANDATORY_EXCLUSIONS.contains(&pattern.as_str()) {
            style("mandatory").yellow().to_string()
        } else {
            String::new()
        };
        println!("  {:>3}. {} {}", i + 1, pattern, marker);
    }

    println!("\n{}", style("Include:").bold());
    for (i, pattern) in config.patterns.include.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, pattern);
    }

    Ok(())
}
