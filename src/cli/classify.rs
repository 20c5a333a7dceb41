//! Classify command - explain the decision for one path

use anyhow::Result;
use console::style;
use std::path::Path;

use curator::classifier::Classifier;
use curator::models::Entry;

use super::resolve_config;

pub fn run(
    project_dir: &Path,
    config_path: Option<&Path>,
    target: &str,
    dir: bool,
    json: bool,
) -> Result<()> {
    let config = resolve_config(project_dir, config_path)?;
    let classifier = Classifier::new(
        &config.patterns.include,
        config.patterns.effective_excludes(),
    )?;

    let entry = classify_target(&classifier, target, dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    let decision = if entry.decision.is_keep() {
        style(entry.decision.to_string()).green().bold()
    } else {
        style(entry.decision.to_string()).red().bold()
    };
    println!("{} {} ({})", decision, entry.path, entry.node);
    for reason in &entry.reasons {
        println!("  {}", style(reason).dim());
    }
    Ok(())
}

/// A trailing `/` marks a directory, same as `--dir`
fn classify_target(classifier: &Classifier, target: &str, dir: bool) -> Entry {
    match target.strip_suffix('/') {
        Some(stripped) => classifier.classify(stripped, true),
        None => classifier.classify(target, dir),
    }
}
