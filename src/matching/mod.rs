//! Duplicate detection passes and similarity scoring.
//!
//! This module provides the core matching functionality:
//!
//! - [`DuplicateDetector`]: Main entry point, runs both passes and unions them
//! - [`ExactMatchIndex`]: Forward pass over identical normalized text
//! - [`FuzzySimilarityMatcher`]: Pairwise pass over similarity ratios
//! - [`similarity`]: The longest-matching-block ratio
//!
//! ## Detection
//!
//! Issues are taken in input order, and only the later issue of a matching
//! pair is ever flagged:
//!
//! 1. **Exact pass**: A title or body already seen on an earlier issue
//! 2. **Fuzzy pass**: Title similarity `>= 0.80` or body similarity `>= 0.90`
//!    against any earlier issue
//!
//! The passes are independent; the result is the union of both.
//!
//! [`DuplicateDetector`]: engine::DuplicateDetector
//! [`ExactMatchIndex`]: exact::ExactMatchIndex
//! [`FuzzySimilarityMatcher`]: fuzzy::FuzzySimilarityMatcher
//! [`similarity`]: similarity::similarity

pub mod engine;
pub mod exact;
pub mod fuzzy;
pub mod similarity;
