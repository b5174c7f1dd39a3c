//! # tallylib
//!
//! A football league tally library: turns a list of match results into a
//! ranked standings table.
//!
//! ## Overview
//!
//! Input is one match per line, three fields separated by `;`:
//!
//! ```text
//! Allegoric Alaskians;Blithering Badgers;win
//! Devastating Donkeys;Courageous Californians;draw
//! ```
//!
//! The outcome (`win`, `draw` or `loss`) is from the first team's perspective.
//! Lines starting with `#` and blank lines are skipped.
//!
//! ## Pipeline
//!
//! - **source**: Split lines into `MatchRecord`s
//! - **data**: Fold records into per-team `TeamStats` inside a `League`
//! - **query**: Rank teams by points with a name tie-break
//! - **output**: Format the ranking as a `StandingsTable`
//!
//! A win is worth 3 points, a draw 1. Any malformed line or unknown outcome
//! aborts the whole tally; no partial table is written.
//!
//! ## Example
//!
//! ```rust
//! use tallylib::tally;
//!
//! let input = "Allegoric Alaskians;Blithering Badgers;win\n";
//! let mut out = Vec::new();
//! tally(input.as_bytes(), &mut out).unwrap();
//!
//! let table = String::from_utf8(out).unwrap();
//! assert_eq!(
//!     table,
//!     "Team                           | MP |  W |  D |  L |  P\n\
//!      Allegoric Alaskians            |  1 |  1 |  0 |  0 |  3\n\
//!      Blithering Badgers             |  1 |  0 |  0 |  1 |  0\n"
//! );
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
mod pipeline;
pub mod query;
pub mod source;

pub use data::{League, Outcome, Team, TeamStats};
pub use error::TallyError;
pub use options::ParseOptions;
pub use output::{StandingsTable, TableRow};
pub use pipeline::{standings, tally, tally_with};
pub use query::{rank, Standings};
pub use source::{parse_records, MatchRecord};

/// Result type for tallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
