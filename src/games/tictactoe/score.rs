//! Match scoring with early termination.

use super::types::{GameOutcome, Player};
use serde::{Deserialize, Serialize};

/// Cumulative score across the games of a match.
///
/// Points are stored doubled so a tie's half point stays an integer: a
/// win is worth 2 units, a tie 1 unit to each player. The clinch test
/// `units > games_per_match` is the original `score > N / 2` with both
/// sides doubled, so no floating point is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    first: u32,
    second: u32,
}

impl MatchScore {
    /// Fresh 0-0 score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Player::First) => self.first += 2,
            GameOutcome::Won(Player::Second) => self.second += 2,
            GameOutcome::Tie => {
                self.first += 1;
                self.second += 1;
            }
        }
    }

    /// Doubled points held by a player.
    pub fn units(&self, player: Player) -> u32 {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Returns the player who has mathematically secured the match.
    ///
    /// Secured means strictly more than half the match's points, at which
    /// point the remaining games cannot change the winner.
    pub fn clinched(&self, games_per_match: u32) -> Option<Player> {
        if self.first > games_per_match {
            Some(Player::First)
        } else if self.second > games_per_match {
            Some(Player::Second)
        } else {
            None
        }
    }

    fn fmt_units(units: u32) -> String {
        if units % 2 == 0 {
            format!("{}", units / 2)
        } else {
            format!("{}.5", units / 2)
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            Self::fmt_units(self.first),
            Self::fmt_units(self.second)
        )
    }
}
