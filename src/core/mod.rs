//! Core data types for duplicate detection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Issue`]: A work item as read from the input, with optional title and body
//! - [`NormalizedIssue`]: An issue with both fields in canonical form
//! - [`NormalizedText`]: Lowercase, alphanumeric-and-space-only text
//! - [`IssueNumber`], [`Field`], [`MatchKind`], [`Finding`]: Identity and result types
//!
//! ## Normalization
//!
//! All comparisons run on normalized text, so these titles are identical:
//!
//! | Raw                   | Normalized       |
//! |-----------------------|------------------|
//! | `Pump is broken`      | `pump is broken` |
//! | `pump  IS broken!!`   | `pump is broken` |
//! | `Pump is\tbroken.`    | `pump is broken` |
//!
//! Absent text normalizes to the empty string, which is a valid value: two
//! issues without a body have identical bodies.
//!
//! [`Issue`]: issue::Issue
//! [`NormalizedIssue`]: issue::NormalizedIssue
//! [`NormalizedText`]: normalize::NormalizedText
//! [`IssueNumber`]: types::IssueNumber
//! [`Field`]: types::Field
//! [`MatchKind`]: types::MatchKind
//! [`Finding`]: types::Finding

pub mod issue;
pub mod normalize;
pub mod types;
