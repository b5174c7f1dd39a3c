//! Record parsing: split raw text into match records.
//!
//! Each meaningful line holds exactly three fields separated by the
//! configured delimiter:
//!
//! ```text
//! Allegoric Alaskians;Blithering Badgers;win
//! ```
//!
//! Comment lines and blank lines are skipped. Fields are kept verbatim (no
//! trimming) and the outcome is left as a string; validating it is the
//! league's job.

use serde::{Deserialize, Serialize};

use crate::error::TallyError;
use crate::options::ParseOptions;
use crate::Result;

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based line number in the source text
    pub line: usize,
    /// First-named team
    pub home: String,
    /// Second-named team
    pub away: String,
    /// Outcome for `home`, unvalidated
    pub outcome: String,
}

/// Parse all records using the default options.
pub fn parse_records(text: &str) -> Result<Vec<MatchRecord>> {
    parse_records_with(text, &ParseOptions::default())
}

/// Parse all records, stopping at the first malformed line.
pub fn parse_records_with(text: &str, options: &ParseOptions) -> Result<Vec<MatchRecord>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line, options).transpose())
        .collect()
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(
    line_no: usize,
    line: &str,
    options: &ParseOptions,
) -> Result<Option<MatchRecord>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() || line.starts_with(options.comment) {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(options.delimiter).collect();
    match fields.as_slice() {
        [home, away, outcome] => Ok(Some(MatchRecord {
            line: line_no,
            home: home.to_string(),
            away: away.to_string(),
            outcome: outcome.to_string(),
        })),
        _ => Err(TallyError::MalformedRecord {
            line: line_no,
            content: line.to_string(),
            fields: fields.len(),
        }),
    }
}
