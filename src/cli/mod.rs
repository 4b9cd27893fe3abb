//! Command-line interface for issue-dedup.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **detect**: Flag duplicate issues in an issue list
//! - **compare**: Show how two issues from a list score against each other
//!
//! ## Usage
//!
//! ```text
//! # Flag duplicates, one issue number per line
//! issue-dedup detect < issues.json
//!
//! # Same thing; detect runs when no subcommand is given
//! issue-dedup < issues.json
//!
//! # Read from a file and explain each flag
//! issue-dedup detect issues.json --format json
//!
//! # Tighten the title threshold
//! issue-dedup detect issues.json --title-threshold 0.9
//!
//! # Score issue 12 against issue 40
//! issue-dedup compare 12 40 issues.json
//! ```

use clap::{Parser, Subcommand};

use crate::matching::engine::DetectionConfig;
use crate::utils::validation::{parse_threshold, DEFAULT_MAX_ISSUES};

pub mod compare;
pub mod detect;

#[derive(Parser)]
#[command(name = "issue-dedup")]
#[command(version)]
#[command(about = "Flag likely-duplicate issues in an issue backlog")]
#[command(
    long_about = "issue-dedup reads a JSON array of issues ({number, title, body}) and flags the ones that duplicate an earlier issue.\n\nAn issue is flagged when:\n- its normalized title or body is identical to an earlier issue's, or\n- its title is at least 80% similar to an earlier title, or\n- its body is at least 90% similar to an earlier body\n\nOnly the later issue of a matching pair is flagged."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for `detect` when no subcommand is given
    #[command(flatten)]
    pub detect: detect::DetectArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flag duplicate issues
    Detect(detect::DetectArgs),

    /// Score two issues against each other
    Compare(compare::CompareArgs),
}

/// Detection tuning shared by all subcommands
#[derive(clap::Args, Clone, Debug)]
pub struct DetectionArgs {
    /// Minimum title similarity (0-1, inclusive) for a fuzzy duplicate
    #[arg(long, default_value = "0.8", value_parser = parse_threshold)]
    pub title_threshold: f64,

    /// Minimum body similarity (0-1, inclusive) for a fuzzy duplicate
    #[arg(long, default_value = "0.9", value_parser = parse_threshold)]
    pub body_threshold: f64,

    /// Do not treat empty titles or bodies as matching each other
    #[arg(long)]
    pub ignore_empty_fields: bool,

    /// Compare every pair in full instead of skipping pairs that cannot match
    #[arg(long)]
    pub no_prefilter: bool,

    /// Ignore very frequent characters when matching long texts
    #[arg(long)]
    pub autojunk: bool,

    /// Maximum number of issues accepted
    #[arg(long, default_value_t = DEFAULT_MAX_ISSUES)]
    pub max_issues: usize,
}

impl DetectionArgs {
    #[must_use]
    pub fn to_config(&self) -> DetectionConfig {
        DetectionConfig {
            title_threshold: self.title_threshold,
            body_threshold: self.body_threshold,
            prefilter: !self.no_prefilter,
            match_empty_fields: !self.ignore_empty_fields,
            autojunk: self.autojunk,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
