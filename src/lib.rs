//! Best-of-N tic-tac-toe: game rules, match scoring, and a console shell.
//!
//! # Architecture
//!
//! - **Engine**: board state, move validation, win/tie detection, and
//!   match scoring with early termination ([`GameEngine`]).
//! - **Collaborators**: the engine pulls input through [`MoveSource`] and
//!   pushes display events through [`ResultSink`]. The console shell
//!   implements both; tests substitute scripted collaborators.
//!
//! # Example
//!
//! ```no_run
//! use match_tictactoe::{ConsoleSink, ConsoleSource, GameEngine, PlayerSymbols};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = GameEngine::new(PlayerSymbols::default(), 3);
//! let outcome = engine.play_match(&mut ConsoleSource::new(), &mut ConsoleSink::new())?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod menu;

// Crate-level exports - console shell
pub use console::{ConsoleSink, ConsoleSource};

// Crate-level exports - menu
pub use menu::{MenuChoice, MenuError};

// Crate-level exports - game types
pub use games::tictactoe::{
    Board, Cell, Coord, GameEngine, GameOutcome, MatchOutcome, MatchScore, MoveError, MoveSource,
    Player, PlayerSymbols, RawMove, ResultSink, SymbolError, winner,
};
