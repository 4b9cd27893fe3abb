use serde::{Deserialize, Deserializer, Serialize};

use crate::core::normalize::{normalize, NormalizedText};
use crate::core::types::{Field, IssueNumber};

/// A tracked work item as read from the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Identity of the issue (required)
    pub number: IssueNumber,

    /// Title text; absent, null and non-string values all read as `None`
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Body text; same leniency as `title`
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(number: i64) -> Self {
        Self {
            number: IssueNumber(number),
            title: None,
            body: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Accept any JSON value for a text field, keeping only strings.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// An issue with both text fields normalized once, ready for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedIssue {
    pub number: IssueNumber,
    pub title: NormalizedText,
    pub body: NormalizedText,
}

impl NormalizedIssue {
    #[must_use]
    pub fn field(&self, field: Field) -> &NormalizedText {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
        }
    }
}

impl From<&Issue> for NormalizedIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            number: issue.number,
            title: normalize(issue.title.as_deref()),
            body: normalize(issue.body.as_deref()),
        }
    }
}
