use serde::{Deserialize, Serialize};

/// Identity of an issue in the tracker
///
/// Uniqueness is not enforced: two records may carry the same number, and the
/// duplicate set simply contains it once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(pub i64);

impl IssueNumber {
    #[must_use]
    pub fn new(n: i64) -> Self {
        Self(n)
    }
}

impl From<i64> for IssueNumber {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which text field of an issue a comparison was made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Body,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// How a duplicate was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized text identical to an earlier issue's
    Exact,
    /// Similarity ratio at or above the field's threshold
    Fuzzy,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// One reason an issue was flagged as a duplicate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// The later issue, which is flagged
    pub duplicate: IssueNumber,

    /// The earlier issue it matched
    pub original: IssueNumber,

    pub field: Field,
    pub kind: MatchKind,

    /// Similarity ratio of the field; 1.0 for exact matches
    pub score: f64,
}
