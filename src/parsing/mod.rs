//! Reading issue lists.
//!
//! The input is a single JSON array of records:
//!
//! ```json
//! [
//!   {"number": 1, "title": "Pump broken", "body": "leaks oil"},
//!   {"number": 2, "title": "Pump broken"}
//! ]
//! ```
//!
//! | Field    | Type    | Required |
//! |----------|---------|----------|
//! | `number` | integer | Yes      |
//! | `title`  | string  | No       |
//! | `body`   | string  | No       |
//!
//! Other fields are ignored. A `title` or `body` that is null or not a string
//! counts as absent.

pub mod json;

pub use json::{parse_issues, read_issues, read_issues_from_path, InputError};
