//! Player symbol configuration.
//!
//! The symbol pair is an explicit value handed to the engine and threaded
//! through display calls, not ambient global state. It is mutable between
//! matches and borrowed immutably while a match runs.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// The pair of display symbols, one per player.
///
/// Invariant: the symbols differ case-insensitively. [`PlayerSymbols::set`]
/// is the only mutation path and enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSymbols {
    first: char,
    second: char,
}

impl PlayerSymbols {
    /// Creates a validated symbol pair.
    ///
    /// Both slots are checked together, so swapped defaults like `O`/`X`
    /// are fine as long as the pair is distinct.
    pub fn new(first: &str, second: &str) -> Result<Self, SymbolError> {
        let first = Self::parse_one(first)?;
        let second = Self::parse_one(second)?;
        if first.eq_ignore_ascii_case(&second) {
            return Err(SymbolError::DuplicatesOpponent(second));
        }
        Ok(Self { first, second })
    }

    /// Returns the symbol for a player.
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Replaces one player's symbol.
    ///
    /// The candidate must be exactly one character and must not collide,
    /// case-insensitively, with the other player's current symbol.
    pub fn set(&mut self, player: Player, candidate: &str) -> Result<(), SymbolError> {
        let symbol = Self::parse_one(candidate)?;
        let other = self.symbol(player.opponent());
        if symbol.eq_ignore_ascii_case(&other) {
            return Err(SymbolError::DuplicatesOpponent(other));
        }
        match player {
            Player::First => self.first = symbol,
            Player::Second => self.second = symbol,
        }
        Ok(())
    }

    fn parse_one(candidate: &str) -> Result<char, SymbolError> {
        let mut chars = candidate.chars();
        let symbol = chars.next().ok_or(SymbolError::TooLong)?;
        if chars.next().is_some() {
            return Err(SymbolError::TooLong);
        }
        Ok(symbol)
    }
}

impl Default for PlayerSymbols {
    fn default() -> Self {
        Self {
            first: 'X',
            second: 'O',
        }
    }
}

/// Why a symbol change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// The candidate is not exactly one character.
    #[display("symbols must be exactly one character")]
    TooLong,

    /// The candidate collides with the opponent's symbol.
    #[display("symbol '{}' already belongs to the other player", _0)]
    DuplicatesOpponent(char),
}

impl std::error::Error for SymbolError {}
