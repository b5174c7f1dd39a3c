//! Error types for tallylib

use thiserror::Error;

/// Errors that can occur while tallying a league
#[derive(Error, Debug)]
pub enum TallyError {
    /// A record line did not split into exactly three fields
    #[error("malformed record on line {line}: expected 3 fields, found {fields} in '{content}'")]
    MalformedRecord {
        line: usize,
        content: String,
        fields: usize,
    },

    /// The outcome field was not one of `win`, `draw` or `loss`
    #[error("invalid match outcome '{outcome}'{}", line_suffix(.line))]
    InvalidOutcome { line: Option<usize>, outcome: String },

    /// Reading the input or writing the table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TallyError {
    /// Attach a source line number to an outcome error that has none yet.
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            TallyError::InvalidOutcome { line: None, outcome } => TallyError::InvalidOutcome {
                line: Some(line_no),
                outcome,
            },
            other => other,
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|n| format!(" on line {}", n)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_malformed_record_message() {
        let err = TallyError::MalformedRecord {
            line: 4,
            content: "A;B".to_string(),
            fields: 2,
        };
        assert_eq!(
            err.to_string(),
            "malformed record on line 4: expected 3 fields, found 2 in 'A;B'"
        );
    }

    #[test]
    fn test_invalid_outcome_message() {
        let err = TallyError::InvalidOutcome {
            line: None,
            outcome: "tie".to_string(),
        };
        assert_eq!(err.to_string(), "invalid match outcome 'tie'");
        assert_eq!(
            err.at_line(7).to_string(),
            "invalid match outcome 'tie' on line 7"
        );
    }

    #[test]
    fn test_at_line_keeps_existing_line() {
        let err = TallyError::InvalidOutcome {
            line: Some(2),
            outcome: "tie".to_string(),
        };
        assert!(matches!(
            err.at_line(9),
            TallyError::InvalidOutcome { line: Some(2), .. }
        ));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = TallyError::from(io);
        let source = err.source().expect("io error should have a source");
        assert_eq!(source.to_string(), "truncated");
    }
}
