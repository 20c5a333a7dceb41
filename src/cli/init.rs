//! Init command - write a curation.toml template

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use curator::config::{CurationConfig, CONFIG_FILE_NAMES};

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists; remove it first to regenerate",
            config_path.display()
        );
    }

    let template = CurationConfig::builtin().to_toml()?;
    std::fs::write(&config_path, template)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!("\nNext steps:");
    println!("  {} Edit repo identity and patterns", style(config_path.display()).cyan());
    println!("  {} Preview decisions", style("curator generate --dry-run").cyan());
    println!("  {} Write artifacts", style("curator generate").cyan());

    Ok(())
}
