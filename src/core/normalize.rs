//! Canonical text form used for every comparison.

use serde::Serialize;

/// Text that has been through [`normalize`]
///
/// Only lowercase ASCII letters, digits and single interior spaces can appear,
/// with no leading or trailing space. The only way to build one is through
/// [`normalize`] or [`normalize_str`], so the invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII bytes of the text, as consumed by the similarity matcher
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize an optional field; absent text becomes the empty string.
#[must_use]
pub fn normalize(text: Option<&str>) -> NormalizedText {
    text.map(normalize_str).unwrap_or_default()
}

/// Normalize text for comparison.
///
/// Lowercases, collapses whitespace runs to one space, drops everything that is
/// not `[a-z0-9 ]`, and trims. Dropped characters do not break a whitespace
/// run, so `"a ! b"` becomes `"a b"` and the function is idempotent.
///
/// # Examples
///
/// ```
/// use issue_dedup::core::normalize::normalize_str;
///
/// assert_eq!(normalize_str("A  B!").as_str(), "a b");
/// assert_eq!(normalize_str("  Pump\tis  BROKEN!! ").as_str(), "pump is broken");
/// assert_eq!(normalize_str("").as_str(), "");
/// ```
#[must_use]
pub fn normalize_str(text: &str) -> NormalizedText {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }

    NormalizedText(out)
}
