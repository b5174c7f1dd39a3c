//! Output rendering for the CLI

use std::str::FromStr;

use tallylib::{Standings, StandingsTable};

/// How standings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON of the ranked teams
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Render standings to a string in the requested mode.
pub fn render_standings(
    standings: &Standings,
    mode: OutputMode,
) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Table => Ok(StandingsTable::from_standings(standings).to_string()),
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(standings)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallylib::{League, Outcome};

    fn sample() -> Standings {
        let mut league = League::new();
        league.apply("Home", "Away", Outcome::Win);
        tallylib::rank(&league)
    }

    #[test]
    fn test_parse_output_mode() {
        assert_eq!("table".parse::<OutputMode>().unwrap(), OutputMode::Table);
        assert_eq!("JSON".parse::<OutputMode>().unwrap(), OutputMode::Json);
        assert!("csv".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_render_table() {
        let out = render_standings(&sample(), OutputMode::Table).unwrap();
        assert!(out.starts_with("Team "));
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_render_json() {
        let out = render_standings(&sample(), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["teams"][0]["name"], "Home");
        assert_eq!(parsed["teams"][0]["points"], 3);
        assert_eq!(parsed["teams"][1]["losses"], 1);
    }
}
