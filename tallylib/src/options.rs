//! Input options for parsing match records.
//!
//! Controls how raw text is split into records. The defaults match the
//! common `Home;Away;outcome` format with `#` comments.

use serde::{Deserialize, Serialize};

/// Default field separator within a record line
pub const DEFAULT_DELIMITER: char = ';';

/// Default marker for comment lines
pub const DEFAULT_COMMENT: char = '#';

/// Configuration for the record parser.
///
/// ```rust
/// use tallylib::ParseOptions;
///
/// let options = ParseOptions::new().delimiter(',').comment('%');
/// assert_eq!(options.delimiter, ',');
/// assert_eq!(options.comment, '%');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Character separating the three fields of a record
    pub delimiter: char,
    /// Lines starting with this character are skipped
    pub comment: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            comment: DEFAULT_COMMENT,
        }
    }
}

impl ParseOptions {
    /// Create options with the default delimiter and comment marker
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: set the comment marker
    pub fn comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }
}
