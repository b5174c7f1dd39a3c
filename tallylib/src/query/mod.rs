//! Query processing: rank teams into standings.
//!
//! This module handles the third stage of the pipeline - turning an
//! insertion-ordered league into table order. It provides:
//!
//! - **Standings**: Ranked teams, ready for presentation
//! - **Ranking**: `rank` (points, then the name tie-break)
//!
//! ## Example
//!
//! ```rust
//! use tallylib::data::{League, Outcome};
//! use tallylib::query::rank;
//!
//! let mut league = League::new();
//! league.apply("A", "B", Outcome::Loss);
//! let standings = rank(&league);
//! assert_eq!(standings.teams[0].name, "B");
//! ```

pub mod ranking;

pub use ranking::{rank, rank_teams, Standings};
