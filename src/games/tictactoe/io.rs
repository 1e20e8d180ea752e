//! Collaborator traits at the engine boundary.
//!
//! The engine consumes input through a [`MoveSource`] and reports display
//! events through a [`ResultSink`]. The console shell implements both;
//! tests drive the engine with scripted implementations.

use super::score::MatchScore;
use super::symbols::PlayerSymbols;
use super::types::{Board, GameOutcome, MatchOutcome};
use anyhow::Result;

/// Supplies raw player input.
///
/// Every request blocks until input arrives; there is no timeout or
/// cancellation. An error means the underlying stream failed, not that
/// the input was invalid — invalid values are the engine's problem and
/// trigger a re-request.
pub trait MoveSource {
    /// Requests a raw two-digit move code.
    fn request_move(&mut self, prompt: &str) -> Result<i32>;

    /// Requests a replacement player symbol.
    fn request_symbol(&mut self, prompt: &str) -> Result<String>;

    /// Requests a yes/no confirmation.
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool>;

    /// Requests a numbered menu selection.
    fn request_menu_choice(&mut self, prompt: &str) -> Result<i32>;
}

/// Receives display events from the engine and the application loop.
pub trait ResultSink {
    /// Announces the rules at startup.
    fn show_welcome(&mut self, games_per_match: u32);

    /// Announces the start of a numbered game.
    fn show_game_start(&mut self, number: u32);

    /// Shows the current board.
    fn show_board(&mut self, board: &Board, symbols: &PlayerSymbols);

    /// Shows the running match score.
    fn show_score(&mut self, score: &MatchScore);

    /// Announces a finished game.
    fn show_game_result(&mut self, outcome: GameOutcome, symbols: &PlayerSymbols);

    /// Announces a finished match.
    fn show_match_result(&mut self, outcome: MatchOutcome, symbols: &PlayerSymbols);

    /// Reports a recoverable input problem.
    fn show_error(&mut self, message: &str);

    /// Says goodbye when the player quits.
    fn show_goodbye(&mut self);
}
