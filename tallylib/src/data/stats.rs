//! Core data structures for team statistics.
//!
//! A team's record in the league is a flat set of counters:
//!
//! - **played**: matches played
//! - **wins**, **draws**, **losses**: results from the team's perspective
//! - **points**: 3 per win, 1 per draw
//!
//! Scoring produces `TeamStats` deltas, which are folded into a team's running
//! totals with `+=`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Points awarded for a win
pub const POINTS_PER_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_PER_DRAW: u32 = 1;

/// Match record counters for a single team.
///
/// Used both as a running total and as the delta produced by one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Matches played (MP)
    pub played: u32,
    /// Matches won (W)
    pub wins: u32,
    /// Matches drawn (D)
    pub draws: u32,
    /// Matches lost (L)
    pub losses: u32,
    /// Points (P)
    pub points: u32,
}

impl TeamStats {
    /// Create a new TeamStats with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that played and points agree with the win/draw/loss counts.
    pub fn is_consistent(&self) -> bool {
        self.played == self.wins + self.draws + self.losses
            && self.points == POINTS_PER_WIN * self.wins + POINTS_PER_DRAW * self.draws
    }
}

impl Add for TeamStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            played: self.played + other.played,
            wins: self.wins + other.wins,
            draws: self.draws + other.draws,
            losses: self.losses + other.losses,
            points: self.points + other.points,
        }
    }
}

impl AddAssign for TeamStats {
    fn add_assign(&mut self, other: Self) {
        self.played += other.played;
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
        self.points += other.points;
    }
}

/// A team and its accumulated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team name, unique within a league
    pub name: String,
    /// Accumulated statistics
    #[serde(flatten)]
    pub stats: TeamStats,
}

impl Team {
    /// Create a team with no matches played
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: TeamStats::new(),
        }
    }

    pub fn points(&self) -> u32 {
        self.stats.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(played: u32, wins: u32, draws: u32, losses: u32, points: u32) -> TeamStats {
        TeamStats {
            played,
            wins,
            draws,
            losses,
            points,
        }
    }

    #[test]
    fn test_new_is_zeroed() {
        let team = Team::new("Blithering Badgers");
        assert_eq!(team.name, "Blithering Badgers");
        assert_eq!(team.stats, TeamStats::default());
        assert!(team.stats.is_consistent());
    }

    #[test]
    fn test_add_assign() {
        let mut total = stats(1, 1, 0, 0, 3);
        total += stats(1, 0, 1, 0, 1);
        assert_eq!(total, stats(2, 1, 1, 0, 4));
        assert!(total.is_consistent());
    }

    #[test]
    fn test_add() {
        let sum = stats(1, 0, 0, 1, 0) + stats(1, 1, 0, 0, 3);
        assert_eq!(sum, stats(2, 1, 0, 1, 3));
    }

    #[test]
    fn test_inconsistent_stats() {
        assert!(!stats(2, 1, 0, 0, 3).is_consistent());
        assert!(!stats(1, 1, 0, 0, 1).is_consistent());
    }

    #[test]
    fn test_team_serializes_flat() {
        let mut team = Team::new("A");
        team.stats = stats(1, 1, 0, 0, 3);
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["played"], 1);
        assert_eq!(json["points"], 3);
    }
}
