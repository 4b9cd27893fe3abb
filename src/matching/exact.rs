use std::collections::HashMap;

use tracing::debug;

use crate::core::issue::NormalizedIssue;
use crate::core::normalize::NormalizedText;
use crate::core::types::{Field, Finding, IssueNumber, MatchKind};

/// First-seen index of normalized titles and bodies.
///
/// One index serves one detection run. Feeding issues in input order flags each
/// issue whose title or body was already registered by an earlier one; the
/// first occurrence of a text is never flagged.
#[derive(Debug, Default)]
pub struct ExactMatchIndex {
    titles: HashMap<NormalizedText, IssueNumber>,
    bodies: HashMap<NormalizedText, IssueNumber>,
    /// Register and match empty texts like any other key
    match_empty: bool,
}

impl ExactMatchIndex {
    #[must_use]
    pub fn new(match_empty: bool) -> Self {
        Self {
            titles: HashMap::new(),
            bodies: HashMap::new(),
            match_empty,
        }
    }

    /// Check one issue against everything seen so far, then register it.
    ///
    /// Title and body are handled independently: an issue can be flagged on
    /// one field while registering the other.
    pub fn observe(&mut self, issue: &NormalizedIssue) -> Vec<Finding> {
        let mut findings = Vec::new();

        for field in [Field::Title, Field::Body] {
            let text = issue.field(field);
            if text.is_empty() && !self.match_empty {
                continue;
            }

            let seen = match field {
                Field::Title => &mut self.titles,
                Field::Body => &mut self.bodies,
            };

            match seen.get(text) {
                Some(&original) => {
                    debug!(
                        "Issue {} repeats the {field} of issue {original}",
                        issue.number
                    );
                    findings.push(Finding {
                        duplicate: issue.number,
                        original,
                        field,
                        kind: MatchKind::Exact,
                        score: 1.0,
                    });
                }
                None => {
                    seen.insert(text.clone(), issue.number);
                }
            }
        }

        findings
    }

    /// Run the forward pass over a whole list.
    pub fn scan(issues: &[NormalizedIssue], match_empty: bool) -> Vec<Finding> {
        let mut index = Self::new(match_empty);
        issues.iter().flat_map(|issue| index.observe(issue)).collect()
    }

    /// Number of distinct (title, body) keys registered
    #[must_use]
    pub fn key_counts(&self) -> (usize, usize) {
        (self.titles.len(), self.bodies.len())
    }
}
