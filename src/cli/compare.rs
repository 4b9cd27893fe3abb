use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::{DetectionArgs, OutputFormat};
use crate::core::issue::{Issue, NormalizedIssue};
use crate::core::types::{Field, Finding, IssueNumber, MatchKind};
use crate::matching::engine::DetectionConfig;
use crate::matching::fuzzy::{FuzzySimilarityMatcher, PairScore};
use crate::parsing;

#[derive(Args)]
pub struct CompareArgs {
    /// Number of the first issue
    #[arg(required = true, allow_negative_numbers = true)]
    pub issue_a: i64,

    /// Number of the second issue
    ///
    /// Whichever of the two comes later in the input is the one that would be
    /// flagged.
    #[arg(required = true, allow_negative_numbers = true)]
    pub issue_b: i64,

    /// JSON file holding an array of issues
    /// Use '-' for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,
}

/// Result of comparing one issue against another
#[derive(Debug, Clone)]
pub struct Comparison {
    pub earlier: NormalizedIssue,
    pub later: NormalizedIssue,
    pub score: PairScore,
    /// Reasons `later` would be flagged against `earlier`
    pub findings: Vec<Finding>,
}

impl Comparison {
    /// Compare two issues under a configuration, without pruning.
    #[must_use]
    pub fn between(earlier: &Issue, later: &Issue, config: &DetectionConfig) -> Self {
        let earlier = NormalizedIssue::from(earlier);
        let later = NormalizedIssue::from(later);
        let score = FuzzySimilarityMatcher::new(config).score_pair(&earlier, &later);

        let mut findings = Vec::new();
        for (field, value, threshold) in [
            (Field::Title, score.title, config.title_threshold),
            (Field::Body, score.body, config.body_threshold),
        ] {
            let (a, b) = (earlier.field(field), later.field(field));
            if (a.is_empty() || b.is_empty()) && !config.match_empty_fields {
                continue;
            }
            let kind = if a == b {
                MatchKind::Exact
            } else if value >= threshold {
                MatchKind::Fuzzy
            } else {
                continue;
            };
            findings.push(Finding {
                duplicate: later.number,
                original: earlier.number,
                field,
                kind,
                score: value,
            });
        }

        Self {
            earlier,
            later,
            score,
            findings,
        }
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, or if either issue number is
/// not present in it.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let issues = parsing::read_issues_from_path(&args.input, args.detection.max_issues)?;

    if verbose {
        eprintln!("Read {} issues", issues.len());
    }

    let (earlier, later) = in_input_order(
        &issues,
        IssueNumber(args.issue_a),
        IssueNumber(args.issue_b),
    )?;

    let config = args.detection.to_config();
    let comparison = Comparison::between(earlier, later, &config);

    match format {
        OutputFormat::Text => print_text_comparison(&comparison, &config),
        OutputFormat::Json => print_json_comparison(&comparison)?,
        OutputFormat::Tsv => print_tsv_comparison(&comparison),
    }

    Ok(())
}

/// Position of the first issue in the list carrying `number`
fn find_issue(issues: &[Issue], number: IssueNumber) -> anyhow::Result<usize> {
    issues
        .iter()
        .position(|issue| issue.number == number)
        .ok_or_else(|| anyhow::anyhow!("Issue {number} not found in input"))
}

/// Look up two issues and return them as (earlier, later) by input position.
fn in_input_order(
    issues: &[Issue],
    a: IssueNumber,
    b: IssueNumber,
) -> anyhow::Result<(&Issue, &Issue)> {
    let pos_a = find_issue(issues, a)?;
    let pos_b = find_issue(issues, b)?;
    if pos_b < pos_a {
        debug!("Issue {b} precedes issue {a} in the input; comparing {a} against {b}");
        Ok((&issues[pos_b], &issues[pos_a]))
    } else {
        Ok((&issues[pos_a], &issues[pos_b]))
    }
}

fn print_text_comparison(comparison: &Comparison, config: &DetectionConfig) {
    let (a, b) = (&comparison.earlier, &comparison.later);

    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nIssue {} (earlier)", a.number);
    println!("  Title: {:?}", a.title.as_str());
    println!("  Body:  {:?}", a.body.as_str());

    println!("\nIssue {} (later)", b.number);
    println!("  Title: {:?}", b.title.as_str());
    println!("  Body:  {:?}", b.body.as_str());

    println!("\nSimilarity Scores:");
    println!(
        "  Title: {:.2}% (threshold {:.0}%)",
        comparison.score.title * 100.0,
        config.title_threshold * 100.0
    );
    println!(
        "  Body:  {:.2}% (threshold {:.0}%)",
        comparison.score.body * 100.0,
        config.body_threshold * 100.0
    );

    if comparison.is_duplicate() {
        println!("\nIssue {} is a duplicate of issue {}:", b.number, a.number);
        for f in &comparison.findings {
            println!("  - {} {} match ({:.2}%)", f.kind, f.field, f.score * 100.0);
        }
    } else {
        println!("\nIssue {} is not a duplicate of issue {}", b.number, a.number);
    }
}

fn print_json_comparison(comparison: &Comparison) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "earlier": comparison.earlier,
        "later": comparison.later,
        "score": {
            "title": comparison.score.title,
            "body": comparison.score.body,
        },
        "is_duplicate": comparison.is_duplicate(),
        "findings": comparison.findings,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(comparison: &Comparison) {
    println!("earlier\tlater\ttitle_score\tbody_score\tis_duplicate");
    println!(
        "{}\t{}\t{:.4}\t{:.4}\t{}",
        comparison.earlier.number,
        comparison.later.number,
        comparison.score.title,
        comparison.score.body,
        comparison.is_duplicate(),
    );
}
