//! Raw move codes and their decoding.
//!
//! Players enter moves as a two-digit integer: the tens digit is the row
//! and the units digit is the column, both 1-indexed. Decoding validates
//! the format; occupancy is checked against the board by the engine.

use serde::{Deserialize, Serialize};

/// A zero-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, 0-2 top to bottom.
    pub row: usize,
    /// Column, 0-2 left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Both axes must be 0-2.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 3 && col < 3);
        Self { row, col }
    }

    /// Row-major index into the board's cells.
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Re-encodes the coordinate as the two-digit code addressing it.
    pub fn code(self) -> i32 {
        ((self.row + 1) * 10 + self.col + 1) as i32
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

/// A move exactly as the player entered it, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMove(i32);

impl RawMove {
    /// Wraps a raw two-digit code.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Decodes the code into a board coordinate.
    ///
    /// Checks run in order: the code must lie in 11-33, then the units
    /// digit must name a column.
    pub fn decode(self) -> Result<Coord, MoveError> {
        let RawMove(code) = self;
        if !(11..=33).contains(&code) {
            return Err(MoveError::OutOfRange(code));
        }
        let col_digit = code % 10;
        if !(1..=3).contains(&col_digit) {
            return Err(MoveError::InvalidColumnDigit(code));
        }
        Ok(Coord::new((code / 10 - 1) as usize, (col_digit - 1) as usize))
    }
}

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The code does not address the 3x3 grid.
    #[display("move {} must be in 11 through 33 format", _0)]
    OutOfRange(i32),

    /// The units digit is not a column.
    #[display("column values must be 1, 2, or 3 (got {})", _0)]
    InvalidColumnDigit(i32),

    /// The addressed cell is already taken.
    #[display("{} is already taken", _0)]
    CellOccupied(Coord),
}

impl std::error::Error for MoveError {}
