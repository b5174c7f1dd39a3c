//! Ranking: order a league's teams into standings.
//!
//! Teams are ordered by points, highest first. Where two adjacent teams are
//! level on points, the tie-break puts the lexicographically greater name
//! first. The tie-break is a single left-to-right pass over adjacent pairs,
//! re-running the points sort before each comparison, so a run of three or
//! more level teams is not necessarily fully name-sorted:
//!
//! ```text
//! level on points, first-seen order:  Alpha Beta Gamma
//! after the pass:                     Beta Gamma Alpha
//! ```

use serde::{Deserialize, Serialize};

use crate::data::{League, Team};

/// Teams in final table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub teams: Vec<Team>,
}

impl Standings {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }

    /// 1-based table position of a team.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.name == name).map(|p| p + 1)
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

/// Rank a league's teams.
pub fn rank(league: &League) -> Standings {
    rank_teams(league.teams().to_vec())
}

/// Rank an arbitrary list of teams; equal points keep their given order
/// until the tie-break pass.
pub fn rank_teams(mut teams: Vec<Team>) -> Standings {
    sort_by_points(&mut teams);
    break_ties(&mut teams);
    Standings { teams }
}

/// Stable sort, highest points first.
fn sort_by_points(teams: &mut [Team]) {
    teams.sort_by(|a, b| b.points().cmp(&a.points()));
}

fn break_ties(teams: &mut [Team]) {
    for i in 0..teams.len().saturating_sub(1) {
        sort_by_points(teams);
        let (left, right) = (&teams[i], &teams[i + 1]);
        if left.points() == right.points() && left.name < right.name {
            teams.swap(i, i + 1);
        }
    }
}
