//! Output formatting: present standings as a table.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting ranked standings for display. It provides:
//!
//! - **StandingsTable**: Table-ready structure with headers and rows
//! - **TableRow**: Individual row with label and formatted values
//!
//! StandingsTable is a pure presentation layer - it only formats data into
//! strings. All ranking happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tallylib::output::StandingsTable;
//!
//! let table = StandingsTable::from_standings(&standings);
//! print!("{}", table);
//! ```

pub mod table;

pub use table::{StandingsTable, TableRow, HEADERS, MIN_NAME_WIDTH};
