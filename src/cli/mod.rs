//! CLI command definitions and handlers

mod classify;
mod generate;
mod init;
mod patterns;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use curator::config::{load_config_file, load_project_config, CurationConfig};

/// Curator - curated subsets of repository trees
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(
    version,
    about = "Classify a repository tree listing into keep/omit buckets and emit curation artifacts",
    long_about = "Curator reads a tab-separated tree snapshot, decides for every path whether it \
belongs to the curated subset using ordered include/exclude globs, and writes \
curated-tree.json, sparse-checkout and curation.yaml.\n\n\
Exclude patterns are checked before include patterns; the first matching pattern \
is cited as the reason.\n\n\
Run without a subcommand to generate artifacts for the current directory:\n  \
curator",
    after_help = "\
Examples:
  curator                                          Generate artifacts in the current directory
  curator -C projects/wxt                          Generate artifacts for another project
  curator generate --out-dir curated               Write artifacts to ./curated
  curator generate --dry-run                       Classify and print statistics only
  curator classify packages/wxt/src/index.ts       Explain the decision for one path
  curator patterns                                 Show the effective pattern lists
  curator init                                     Write a curation.toml template"
)]
pub struct Cli {
    /// Project directory holding curation.toml and the snapshot
    #[arg(long = "project", short = 'C', global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Curation profile file (TOML, JSON or YAML); skips project discovery
    #[arg(long, short = 'c', global = true, env = "CURATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the tree snapshot and write the three artifacts (default)
    #[command(after_help = "\
Examples:
  curator generate                                 Use curation.toml in the current directory
  curator generate --snapshot tree.txt             Read a different snapshot
  curator generate --out-dir curated               Write artifacts to ./curated
  curator generate --dry-run                       Print statistics without writing")]
    Generate {
        /// Tree snapshot to read (default: profile's paths.snapshot)
        #[arg(long, short = 's')]
        snapshot: Option<PathBuf>,

        /// Directory for the artifacts (default: profile's paths.output)
        #[arg(long, short = 'o')]
        out_dir: Option<PathBuf>,

        /// Classify and report statistics without writing artifacts
        #[arg(long)]
        dry_run: bool,
    },

    /// Explain the decision for a single path
    #[command(after_help = "\
Examples:
  curator classify packages/wxt/src/index.ts       Decide a file
  curator classify packages/wxt/src --dir          Decide a directory
  curator classify docs/                           Trailing slash also marks a directory
  curator classify package.json --json             JSON output for scripting")]
    Classify {
        /// Path to classify, relative to the repository root
        target: String,

        /// Treat the path as a directory
        #[arg(long)]
        dir: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the include list and the effective exclude list
    Patterns,

    /// Write a curation.toml template with the built-in profile
    Init,
}

/// Resolve the profile: an explicit file must load, project discovery
/// falls back to the built-in profile
fn resolve_config(project_dir: &Path, config: Option<&Path>) -> Result<CurationConfig> {
    match config {
        Some(file) => load_config_file(file),
        None => Ok(load_project_config(project_dir)),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        None => generate::run(&cli.path, config_path, None, None, false),

        Some(Commands::Generate {
            snapshot,
            out_dir,
            dry_run,
        }) => generate::run(
            &cli.path,
            config_path,
            snapshot.as_deref(),
            out_dir.as_deref(),
            dry_run,
        ),

        Some(Commands::Classify { target, dir, json }) => {
            classify::run(&cli.path, config_path, &target, dir, json)
        }

        Some(Commands::Patterns) => patterns::run(&cli.path, config_path),

        Some(Commands::Init) => init::run(&cli.path),
    }
}
