use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{DetectionArgs, OutputFormat};
use crate::matching::engine::{DetectionConfig, DuplicateDetector, DuplicateReport};
use crate::parsing;

#[derive(Args)]
pub struct DetectArgs {
    /// JSON file holding an array of issues
    /// Use '-' for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,
}

/// Execute detect subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a valid issue list,
/// or if writing the output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DetectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let issues = parsing::read_issues_from_path(&args.input, args.detection.max_issues)?;

    if verbose {
        eprintln!("Read {} issues from {}", issues.len(), source_name(&args));
    }

    let config = args.detection.to_config();
    let detector = DuplicateDetector::new(config);
    let report = detector.detect(&issues);

    if verbose {
        eprintln!(
            "Compared {} pairs ({} skipped by prefilter), flagged {} duplicates",
            report.stats.pairs,
            report.stats.pruned,
            report.len()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report, detector.config())?,
        OutputFormat::Tsv => write_tsv(&mut out, &report)?,
    }
    out.flush()?;

    Ok(())
}

fn source_name(args: &DetectArgs) -> String {
    if args.input.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        args.input.display().to_string()
    }
}

/// One flagged number per line, ascending, nothing else
pub fn write_text<W: Write>(out: &mut W, report: &DuplicateReport) -> std::io::Result<()> {
    for number in &report.duplicates {
        writeln!(out, "{number}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    report: &DuplicateReport,
    config: &DetectionConfig,
) -> anyhow::Result<()> {
    let duplicates: Vec<serde_json::Value> = report
        .by_duplicate()
        .into_iter()
        .map(|(number, findings)| {
            serde_json::json!({
                "number": number,
                "matches": findings
                    .iter()
                    .map(|f| serde_json::json!({
                        "original": f.original,
                        "field": f.field,
                        "kind": f.kind,
                        "score": f.score,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "issue_count": report.issue_count,
        "config": config,
        "duplicate_numbers": report.numbers(),
        "duplicates": duplicates,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

pub fn write_tsv<W: Write>(out: &mut W, report: &DuplicateReport) -> std::io::Result<()> {
    writeln!(out, "duplicate\toriginal\tfield\tkind\tscore")?;
    for (number, findings) in report.by_duplicate() {
        for f in findings {
            writeln!(
                out,
                "{number}\t{}\t{}\t{}\t{:.4}",
                f.original, f.field, f.kind, f.score
            )?;
        }
    }
    Ok(())
}
