//! Match outcomes and the scoring rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;

use super::stats::{TeamStats, POINTS_PER_DRAW, POINTS_PER_WIN};

/// Result of a match from the first-named team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// The same match seen from the other team's side.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }

    /// Record delta for a single team that had this outcome.
    fn delta(self) -> TeamStats {
        match self {
            Outcome::Win => TeamStats {
                played: 1,
                wins: 1,
                points: POINTS_PER_WIN,
                ..TeamStats::default()
            },
            Outcome::Draw => TeamStats {
                played: 1,
                draws: 1,
                points: POINTS_PER_DRAW,
                ..TeamStats::default()
            },
            Outcome::Loss => TeamStats {
                played: 1,
                losses: 1,
                ..TeamStats::default()
            },
        }
    }

    /// Deltas for both participants, `(first team, second team)`.
    pub fn deltas(self) -> (TeamStats, TeamStats) {
        (self.delta(), self.reversed().delta())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        }
    }
}

impl FromStr for Outcome {
    type Err = TallyError;

    /// Tokens are matched exactly; `Win` or ` win` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "draw" => Ok(Outcome::Draw),
            "loss" => Ok(Outcome::Loss),
            _ => Err(TallyError::InvalidOutcome {
                line: None,
                outcome: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
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
    fn test_win_deltas() {
        let (a, b) = Outcome::Win.deltas();
        assert_eq!(a, stats(1, 1, 0, 0, 3));
        assert_eq!(b, stats(1, 0, 0, 1, 0));
    }

    #[test]
    fn test_draw_deltas() {
        let (a, b) = Outcome::Draw.deltas();
        assert_eq!(a, stats(1, 0, 1, 0, 1));
        assert_eq!(b, stats(1, 0, 1, 0, 1));
    }

    #[test]
    fn test_loss_deltas() {
        let (a, b) = Outcome::Loss.deltas();
        assert_eq!(a, stats(1, 0, 0, 1, 0));
        assert_eq!(b, stats(1, 1, 0, 0, 3));
    }

    #[test]
    fn test_deltas_are_symmetric() {
        for outcome in [Outcome::Win, Outcome::Draw, Outcome::Loss] {
            let (a, b) = outcome.deltas();
            let (rb, ra) = outcome.reversed().deltas();
            assert_eq!(a, ra);
            assert_eq!(b, rb);
            assert!(a.is_consistent() && b.is_consistent());
        }
    }

    #[test]
    fn test_parse_outcomes() {
        assert_eq!("win".parse::<Outcome>().unwrap(), Outcome::Win);
        assert_eq!("draw".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert_eq!("loss".parse::<Outcome>().unwrap(), Outcome::Loss);
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["tie", "Win", " win", "", "lose"] {
            let err = token.parse::<Outcome>().unwrap_err();
            match err {
                TallyError::InvalidOutcome { line, outcome } => {
                    assert_eq!(line, None);
                    assert_eq!(outcome, token);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Outcome::Loss.to_string(), "loss");
        assert_eq!(Outcome::Draw.to_string().parse::<Outcome>().unwrap(), Outcome::Draw);
    }
}
