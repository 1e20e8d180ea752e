//! Tic-tac-toe: board, rules, scoring, and the match engine.

mod engine;
mod io;
mod moves;
mod rules;
mod score;
mod symbols;
mod types;

pub use engine::GameEngine;
pub use io::{MoveSource, ResultSink};
pub use moves::{Coord, MoveError, RawMove};
pub use rules::winner;
pub use score::MatchScore;
pub use symbols::{PlayerSymbols, SymbolError};
pub use types::{Board, Cell, GameOutcome, MatchOutcome, Player};
