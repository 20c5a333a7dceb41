//! Generate command - classify the snapshot and write the artifacts

use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;

use curator::models::Statistics;
use curator::pipeline::Pipeline;
use curator::snapshot;

use super::resolve_config;

/// Run the generate command
pub fn run(
    project_dir: &Path,
    config_path: Option<&Path>,
    snapshot_override: Option<&Path>,
    out_dir_override: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let config = resolve_config(project_dir, config_path)?;
    let pipeline = Pipeline::new(&config)?;

    let snapshot_path = snapshot_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.snapshot_in(project_dir));
    let out_dir = out_dir_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.paths.output_in(project_dir));
    debug!(
        "Snapshot {}, output {}",
        snapshot_path.display(),
        out_dir.display()
    );

    println!("Reading tree snapshot...");
    let nodes = snapshot::read_snapshot(&snapshot_path)?;

    // Counts parsed nodes; malformed lines were already dropped
    println!("Processing {} entries...", nodes.len());
    let tree = pipeline.curate(&nodes);
    let statistics = tree.statistics();

    let written = if dry_run {
        Vec::new()
    } else {
        pipeline.write_artifacts(&tree, &out_dir, Utc::now().date_naive())?
    };

    print_run(&written, &statistics, dry_run);
    Ok(())
}

/// `written` is empty for dry runs
fn print_run(written: &[PathBuf], statistics: &Statistics, dry_run: bool) {
    for path in written {
        println!("{} Generated: {}", style("✓").green(), style(path.display()).cyan());
    }

    if dry_run {
        println!("\nDry run - no artifacts written.");
    } else {
        println!("\n{} All artifacts generated successfully", style("✓").green());
    }

    print_statistics(statistics);
}

fn print_statistics(stats: &Statistics) {
    println!("\nStatistics:");
    println!("  Total entries: {}", stats.total);
    println!("  Keep decisions: {}", style(stats.keep).green());
    println!("  Omit decisions: {}", style(stats.omit).red());
}
