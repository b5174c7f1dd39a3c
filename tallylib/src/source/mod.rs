//! Source parsing: turn raw input text into match records.
//!
//! This module handles the first stage of the pipeline - splitting delimited
//! lines into `(home, away, outcome)` triples. It provides:
//!
//! - **MatchRecord**: One parsed line with its source line number
//! - **Parsing**: `parse_records`, `parse_records_with`, `parse_line`
//!
//! ## Example
//!
//! ```rust
//! use tallylib::source::parse_records;
//!
//! let records = parse_records("# opener\nA;B;win\n").unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].line, 2);
//! ```

pub mod parser;

pub use parser::{parse_line, parse_records, parse_records_with, MatchRecord};
