use std::io::Read;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::issue::Issue;
use crate::utils::validation::check_issue_limit;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Record {index} is missing the required 'number' field")]
    MissingNumber { index: usize },

    #[error("Record {index} has an invalid 'number' (expected an integer, got {found})")]
    InvalidNumber { index: usize, found: String },

    #[error("Too many issues: {count} exceeds maximum allowed ({max})")]
    TooManyIssues { count: usize, max: usize },
}

impl InputError {
    /// Whether the error concerns a single record rather than the document
    #[must_use]
    pub fn is_record_error(&self) -> bool {
        matches!(self, Self::MissingNumber { .. } | Self::InvalidNumber { .. })
    }
}

/// Read an issue list from a file, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns `InputError::Io` if the source cannot be read, and the errors of
/// [`parse_issues`] otherwise.
pub fn read_issues_from_path(path: &Path, max_issues: usize) -> Result<Vec<Issue>, InputError> {
    if path.as_os_str() == "-" {
        read_issues(std::io::stdin().lock(), max_issues)
    } else {
        let file = std::fs::File::open(path)?;
        read_issues(std::io::BufReader::new(file), max_issues)
    }
}

/// Read the whole source, then parse it as an issue list
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails, and the errors of
/// [`parse_issues`] otherwise.
pub fn read_issues<R: Read>(mut reader: R, max_issues: usize) -> Result<Vec<Issue>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_issues(&text, max_issues)
}

/// Parse a JSON array of issue records.
///
/// Every record must be an object with an integer `number`. `title` and
/// `body` are optional; values that are not strings are read as absent.
/// Validation covers the whole document before anything is returned.
///
/// # Errors
///
/// Returns `InputError::InvalidFormat` if the text is not a JSON array of
/// objects, `InputError::MissingNumber` or `InputError::InvalidNumber` for a
/// bad record, or `InputError::TooManyIssues` if the list exceeds `max_issues`.
pub fn parse_issues(text: &str, max_issues: usize) -> Result<Vec<Issue>, InputError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| InputError::InvalidFormat(e.to_string()))?;

    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(InputError::InvalidFormat(format!(
                "expected a JSON array of issues, got {}",
                value_kind(&other)
            )))
        }
    };

    if let Some(max) = check_issue_limit(records.len(), max_issues) {
        return Err(InputError::TooManyIssues {
            count: records.len(),
            max,
        });
    }

    let mut issues = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        issues.push(parse_record(index, record)?);
    }

    debug!("Parsed {} issues", issues.len());
    Ok(issues)
}

fn parse_record(index: usize, record: Value) -> Result<Issue, InputError> {
    let Value::Object(fields) = &record else {
        return Err(InputError::InvalidFormat(format!(
            "record {index} is {}, expected an object",
            value_kind(&record)
        )));
    };

    match fields.get("number") {
        None | Some(Value::Null) => return Err(InputError::MissingNumber { index }),
        Some(Value::Number(n)) if n.as_i64().is_some() => {}
        Some(other) => {
            return Err(InputError::InvalidNumber {
                index,
                found: other.to_string(),
            })
        }
    }

    for field in ["title", "body"] {
        if let Some(value) = fields.get(field) {
            if !value.is_string() && !value.is_null() {
                warn!(
                    "Record {index} has a non-string '{field}' ({}); treating it as empty",
                    value_kind(value)
                );
            }
        }
    }

    serde_json::from_value(record).map_err(|e| InputError::InvalidFormat(e.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
