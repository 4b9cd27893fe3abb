use tracing::debug;

use crate::core::issue::NormalizedIssue;
use crate::core::types::{Field, Finding, MatchKind};
use crate::matching::engine::DetectionConfig;
use crate::matching::similarity::{quick_ratio, real_quick_ratio, similarity_with};

/// Similarity scores of one pair of issues
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub title: f64,
    pub body: f64,
}

/// Counters from one pairwise scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Pairs examined
    pub pairs: usize,
    /// Pairs skipped because neither field could reach its threshold
    pub pruned: usize,
}

/// Pairwise scan flagging the later issue of every pair whose title or body
/// similarity reaches its threshold.
pub struct FuzzySimilarityMatcher<'a> {
    config: &'a DetectionConfig,
}

impl<'a> FuzzySimilarityMatcher<'a> {
    pub fn new(config: &'a DetectionConfig) -> Self {
        Self { config }
    }

    fn threshold(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.config.title_threshold,
            Field::Body => self.config.body_threshold,
        }
    }

    /// Whether a field comparison can be skipped without changing the outcome.
    ///
    /// Both bounds are never below the full ratio, so a bound under the
    /// threshold proves the field cannot flag.
    fn cannot_reach(
        &self,
        earlier: &NormalizedIssue,
        later: &NormalizedIssue,
        field: Field,
    ) -> bool {
        let (a, b) = (earlier.field(field), later.field(field));
        if !self.config.match_empty_fields && (a.is_empty() || b.is_empty()) {
            return true;
        }
        if !self.config.prefilter {
            return false;
        }
        let threshold = self.threshold(field);
        real_quick_ratio(a.as_bytes(), b.as_bytes()) < threshold
            || quick_ratio(a.as_bytes(), b.as_bytes()) < threshold
    }

    fn field_score(
        &self,
        earlier: &NormalizedIssue,
        later: &NormalizedIssue,
        field: Field,
    ) -> f64 {
        similarity_with(earlier.field(field), later.field(field), self.config.autojunk)
    }

    /// Score both fields of a pair, with no pruning.
    #[must_use]
    pub fn score_pair(&self, earlier: &NormalizedIssue, later: &NormalizedIssue) -> PairScore {
        PairScore {
            title: self.field_score(earlier, later, Field::Title),
            body: self.field_score(earlier, later, Field::Body),
        }
    }

    /// Findings for one ordered pair; `later` is the only issue that can be
    /// flagged.
    pub fn compare(&self, earlier: &NormalizedIssue, later: &NormalizedIssue) -> Vec<Finding> {
        let mut findings = Vec::new();

        for field in [Field::Title, Field::Body] {
            if self.cannot_reach(earlier, later, field) {
                continue;
            }
            let score = self.field_score(earlier, later, field);
            if score >= self.threshold(field) {
                findings.push(Finding {
                    duplicate: later.number,
                    original: earlier.number,
                    field,
                    kind: MatchKind::Fuzzy,
                    score,
                });
            }
        }

        findings
    }

    /// Compare every pair `(i, j)` with `i < j` in input order.
    pub fn scan(&self, issues: &[NormalizedIssue]) -> (Vec<Finding>, ScanStats) {
        let mut findings = Vec::new();
        let mut stats = ScanStats::default();

        for (i, earlier) in issues.iter().enumerate() {
            for later in &issues[i + 1..] {
                stats.pairs += 1;
                if self.cannot_reach(earlier, later, Field::Title)
                    && self.cannot_reach(earlier, later, Field::Body)
                {
                    stats.pruned += 1;
                    continue;
                }
                let pair_findings = self.compare(earlier, later);
                for finding in &pair_findings {
                    debug!(
                        "Issue {} resembles issue {} on {} ({:.3})",
                        finding.duplicate, finding.original, finding.field, finding.score
                    );
                }
                findings.extend(pair_findings);
            }
        }

        (findings, stats)
    }
}
