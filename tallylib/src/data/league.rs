//! The league model: teams keyed by name, in first-seen order.

use std::collections::HashMap;

use tracing::trace;

use crate::source::MatchRecord;
use crate::Result;

use super::outcome::Outcome;
use super::stats::Team;

/// All teams seen during one tally run.
///
/// Teams keep the order in which they were first mentioned; the name index
/// makes find-or-create a map lookup.
#[derive(Debug, Clone, Default)]
pub struct League {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl League {
    /// Create an empty league.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a team. Ignored if a team with the same name already exists.
    pub fn add_team(&mut self, team: Team) {
        if self.index.contains_key(&team.name) {
            return;
        }
        self.index.insert(team.name.clone(), self.teams.len());
        self.teams.push(team);
    }

    /// Return the team with this exact name, creating it if needed.
    pub fn find_or_create_team(&mut self, name: &str) -> &mut Team {
        let idx = match self.index.get(name).copied() {
            Some(idx) => idx,
            None => {
                self.add_team(Team::new(name));
                self.teams.len() - 1
            }
        };
        &mut self.teams[idx]
    }

    /// Record a match with a typed outcome for `home`.
    pub fn apply(&mut self, home: &str, away: &str, outcome: Outcome) {
        let (home_delta, away_delta) = outcome.deltas();
        self.find_or_create_team(home).stats += home_delta;
        self.find_or_create_team(away).stats += away_delta;
    }

    /// Record a match whose outcome is still a raw token.
    ///
    /// The outcome is validated before either team is created, so an invalid
    /// token leaves the league unchanged.
    pub fn apply_outcome(&mut self, home: &str, away: &str, outcome: &str) -> Result<()> {
        let outcome: Outcome = outcome.parse()?;
        self.apply(home, away, outcome);
        Ok(())
    }

    /// Apply one parsed record, tagging errors with its line number.
    pub fn ingest(&mut self, record: &MatchRecord) -> Result<()> {
        trace!(
            line = record.line,
            home = %record.home,
            away = %record.away,
            outcome = %record.outcome,
            "ingesting record"
        );
        self.apply_outcome(&record.home, &record.away, &record.outcome)
            .map_err(|e| e.at_line(record.line))
    }

    /// Teams in first-seen order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&idx| &self.teams[idx])
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
