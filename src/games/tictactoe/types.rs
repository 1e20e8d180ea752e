//! Core domain types for tic-tac-toe.

use super::moves::{Coord, MoveError};
use super::symbols::PlayerSymbols;
use serde::{Deserialize, Serialize};

/// Player in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Opens every game (X by default).
    First,
    /// Moves second (O by default).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed cell.
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Exactly the cells claimed through [`Board::place`] are occupied;
/// everything else is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Sets every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns the cell at the given coordinate.
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    /// Checks whether the cell at the given coordinate is taken.
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.cell(at) != Cell::Empty
    }

    /// Checks whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Claims the cell at the given coordinate for a player.
    ///
    /// The engine validates occupancy before placing so it can re-prompt;
    /// the board still refuses to overwrite a claim.
    pub fn place(&mut self, at: Coord, player: Player) -> Result<(), MoveError> {
        if self.is_occupied(at) {
            return Err(MoveError::CellOccupied(at));
        }
        self.cells[at.index()] = Cell::Occupied(player);
        Ok(())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board with row and column labels for display.
    pub fn render(&self, symbols: &PlayerSymbols) -> String {
        let glyph = |cell: Cell| match cell {
            Cell::Empty => ' ',
            Cell::Occupied(player) => symbols.symbol(player),
        };
        let mut lines = vec!["    1   2   3".to_string()];
        for row in 0..3 {
            if row > 0 {
                lines.push("   ---+---+---".to_string());
            }
            lines.push(format!(
                "{}:  {} | {} | {}",
                row + 1,
                glyph(self.cells[row * 3]),
                glyph(self.cells[row * 3 + 1]),
                glyph(self.cells[row * 3 + 2]),
            ));
        }
        lines.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal outcome of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player completed a line of three.
    Won(Player),
    /// The board filled with no line of three.
    Tie,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(*player),
            GameOutcome::Tie => None,
        }
    }
}

/// Terminal outcome of a best-of-N match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A player secured more than half the points.
    Won(Player),
    /// All games played without either player pulling ahead.
    Tie,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchOutcome::Won(player) => Some(*player),
            MatchOutcome::Tie => None,
        }
    }
}
