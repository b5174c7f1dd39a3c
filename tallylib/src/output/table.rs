//! Table-ready data structures for standings output.
//!
//! `StandingsTable` is a presentation-ready structure that can be rendered to
//! text or serialized to JSON.
//!
//! The data flow is:
//! 1. League (accumulated team stats)
//! 2. Standings (ranked)
//! 3. StandingsTable (formatted strings for display)
//!
//! StandingsTable only formats; no ranking logic lives here. The rendered text
//! is byte-stable:
//!
//! ```text
//! Team                           | MP |  W |  D |  L |  P
//! Devastating Donkeys            |  3 |  2 |  1 |  0 |  7
//! ```

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::data::Team;
use crate::query::Standings;
use crate::Result;

/// Minimum width of the team name column
pub const MIN_NAME_WIDTH: usize = 31;

/// Width of each numeric column
pub const STAT_WIDTH: usize = 2;

/// Header cells: name column, then MP, W, D, L, P
pub const HEADERS: [&str; 6] = ["Team", "MP", "W", "D", "L", "P"];

/// A single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Team name
    pub label: String,
    /// MP, W, D, L, P as display strings
    pub values: Vec<String>,
}

/// Table-ready standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Column headers: [name header, MP, W, D, L, P]
    pub headers: Vec<String>,
    /// One row per team, in standings order
    pub rows: Vec<TableRow>,
    /// Width of the name column in characters
    pub name_width: usize,
}

impl StandingsTable {
    /// Format ranked standings into display strings.
    pub fn from_standings(standings: &Standings) -> Self {
        let rows: Vec<TableRow> = standings.iter().map(team_row).collect();
        let name_width = rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);

        StandingsTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
            name_width,
        }
    }

    /// Write the rendered table.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.to_string().as_bytes())?;
        Ok(())
    }

    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, label: &str, values: &[String]) -> fmt::Result {
        write!(f, "{:<width$}", label, width = self.name_width)?;
        let last = values.len().saturating_sub(1);
        for (i, value) in values.iter().enumerate() {
            write!(f, "| {:>width$}", value, width = STAT_WIDTH)?;
            if i < last {
                f.write_str(" ")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for StandingsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((label, values)) = self.headers.split_first() {
            self.fmt_line(f, label, values)?;
        }
        for row in &self.rows {
            self.fmt_line(f, &row.label, &row.values)?;
        }
        Ok(())
    }
}

fn team_row(team: &Team) -> TableRow {
    let s = &team.stats;
    TableRow {
        label: team.name.clone(),
        values: [s.played, s.wins, s.draws, s.losses, s.points]
            .iter()
            .map(|v| v.to_string())
            .collect(),
    }
}
