use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::info;

use crate::core::issue::{Issue, NormalizedIssue};
use crate::core::types::{Finding, IssueNumber};
use crate::matching::exact::ExactMatchIndex;
use crate::matching::fuzzy::{FuzzySimilarityMatcher, ScanStats};

/// Default minimum title similarity for a fuzzy duplicate
pub const DEFAULT_TITLE_THRESHOLD: f64 = 0.80;

/// Default minimum body similarity for a fuzzy duplicate
pub const DEFAULT_BODY_THRESHOLD: f64 = 0.90;

/// Configuration for duplicate detection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionConfig {
    /// Inclusive title similarity threshold
    pub title_threshold: f64,
    /// Inclusive body similarity threshold
    pub body_threshold: f64,
    /// Skip pairs whose similarity bounds rule out both thresholds
    pub prefilter: bool,
    /// Treat empty normalized fields as matchable text
    pub match_empty_fields: bool,
    /// Popular-character heuristic for long texts
    pub autojunk: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            title_threshold: DEFAULT_TITLE_THRESHOLD,
            body_threshold: DEFAULT_BODY_THRESHOLD,
            prefilter: true,
            match_empty_fields: true,
            autojunk: false,
        }
    }
}

/// Outcome of one detection run
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateReport {
    /// Number of issues examined
    pub issue_count: usize,

    /// Flagged issue numbers, ascending
    pub duplicates: BTreeSet<IssueNumber>,

    /// Every reason any issue was flagged, exact pass first, in scan order
    pub findings: Vec<Finding>,

    /// Pairwise scan counters
    #[serde(skip)]
    pub stats: ScanStats,
}

impl DuplicateReport {
    /// Flagged issue numbers in ascending order
    #[must_use]
    pub fn numbers(&self) -> Vec<IssueNumber> {
        self.duplicates.iter().copied().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.duplicates.len()
    }

    /// Findings grouped by the flagged issue, in ascending issue order
    #[must_use]
    pub fn by_duplicate(&self) -> BTreeMap<IssueNumber, Vec<&Finding>> {
        let mut grouped: BTreeMap<IssueNumber, Vec<&Finding>> = BTreeMap::new();
        for finding in &self.findings {
            grouped.entry(finding.duplicate).or_default().push(finding);
        }
        grouped
    }
}

/// Runs both detection passes over an ordered issue list and unions the result
pub struct DuplicateDetector {
    config: DetectionConfig,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

impl DuplicateDetector {
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect duplicates in `issues`, taken in the given order.
    ///
    /// The exact pass and the fuzzy pass both see the same input and neither
    /// affects the other; the report holds the union of what they flag.
    #[must_use]
    pub fn detect(&self, issues: &[Issue]) -> DuplicateReport {
        let normalized: Vec<NormalizedIssue> = issues.iter().map(NormalizedIssue::from).collect();
        self.detect_normalized(&normalized)
    }

    /// [`detect`](Self::detect) over issues that are already normalized.
    #[must_use]
    pub fn detect_normalized(&self, issues: &[NormalizedIssue]) -> DuplicateReport {
        let mut findings = ExactMatchIndex::scan(issues, self.config.match_empty_fields);
        let exact_count = findings.len();

        let (fuzzy, stats) = FuzzySimilarityMatcher::new(&self.config).scan(issues);
        let fuzzy_count = fuzzy.len();
        findings.extend(fuzzy);

        let duplicates: BTreeSet<IssueNumber> = findings.iter().map(|f| f.duplicate).collect();

        info!(
            "Checked {} issues ({} pairs, {} pruned): {exact_count} exact and {fuzzy_count} fuzzy findings, {} duplicates",
            issues.len(),
            stats.pairs,
            stats.pruned,
            duplicates.len()
        );

        DuplicateReport {
            issue_count: issues.len(),
            duplicates,
            findings,
            stats,
        }
    }
}

/// Detect duplicates with the default configuration, returning the flagged
/// numbers in ascending order.
///
/// # Examples
///
/// ```
/// use issue_dedup::{detect_duplicates, Issue, IssueNumber};
///
/// let issues = vec![
///     Issue::new(1).with_title("Pump broken").with_body("leaks oil"),
///     Issue::new(2).with_title("Pump broken").with_body("leaks oil"),
/// ];
/// assert_eq!(detect_duplicates(&issues), vec![IssueNumber(2)]);
/// ```
#[must_use]
pub fn detect_duplicates(issues: &[Issue]) -> Vec<IssueNumber> {
    DuplicateDetector::default().detect(issues).numbers()
}
