//! # issue-dedup
//!
//! A library for flagging likely-duplicate issues in a tracked-issue backlog.
//!
//! Backlogs collect the same report many times over: a second copy pasted by a
//! different reporter, a title retyped with different punctuation, a body
//! reworded slightly. `issue-dedup` finds those before they move further down a
//! triage or compliance pipeline. It only classifies; nothing is closed or
//! merged.
//!
//! ## Features
//!
//! - **Normalization**: Case, punctuation and whitespace differences are ignored
//! - **Exact matching**: A repeated title or body flags the later issue
//! - **Fuzzy matching**: Titles at least 80% similar, or bodies at least 90%
//!   similar, flag the later issue
//! - **Provenance**: Every flag records which earlier issue and field it matched
//!
//! ## Example
//!
//! ```rust
//! use issue_dedup::{DuplicateDetector, Issue, IssueNumber};
//!
//! let issues = vec![
//!     Issue::new(1).with_title("Pump is broken").with_body("leaks oil"),
//!     Issue::new(2).with_title("pump is broken!!").with_body("oil everywhere"),
//!     Issue::new(3).with_title("Fan is noisy").with_body("rattles at night"),
//! ];
//!
//! let report = DuplicateDetector::default().detect(&issues);
//! assert_eq!(report.numbers(), vec![IssueNumber(2)]);
//!
//! for finding in &report.findings {
//!     println!(
//!         "#{} duplicates #{} ({} {}, {:.0}%)",
//!         finding.duplicate,
//!         finding.original,
//!         finding.kind,
//!         finding.field,
//!         finding.score * 100.0
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Issue records, normalized text, and result types
//! - [`matching`]: Exact index, similarity ratio, fuzzy matcher and detector
//! - [`parsing`]: Reading issue lists from JSON
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::issue::{Issue, NormalizedIssue};
pub use core::normalize::{normalize, normalize_str, NormalizedText};
pub use core::types::*;
pub use matching::engine::{detect_duplicates, DetectionConfig, DuplicateDetector, DuplicateReport};
pub use matching::similarity::similarity;
