//! Data collection: accumulate team statistics from match records.
//!
//! This module handles the second stage of the pipeline - folding parsed
//! records into per-team totals. It provides:
//!
//! - **Statistics**: Core data structures (`TeamStats`, `Team`)
//! - **Scoring**: `Outcome` and the points/record deltas it produces
//! - **League**: Find-or-create team registry that ingests records
//!
//! ## Example
//!
//! ```rust
//! use tallylib::data::{League, Outcome};
//!
//! let mut league = League::new();
//! league.apply("Devastating Donkeys", "Blithering Badgers", Outcome::Win);
//! assert_eq!(league.get("Devastating Donkeys").unwrap().stats.points, 3);
//! ```

pub mod league;
pub mod outcome;
pub mod stats;

pub use league::League;
pub use outcome::Outcome;
pub use stats::{Team, TeamStats, POINTS_PER_DRAW, POINTS_PER_WIN};
