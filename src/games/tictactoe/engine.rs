//! The game and match engine.

use super::io::{MoveSource, ResultSink};
use super::moves::{Coord, MoveError, RawMove};
use super::rules;
use super::score::MatchScore;
use super::symbols::PlayerSymbols;
use super::types::{Board, GameOutcome, MatchOutcome, Player};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Drives games and best-of-N matches against a pair of collaborators.
///
/// The engine owns no I/O: it pulls input through the [`MoveSource`],
/// pushes display events through the [`ResultSink`], and blocks until
/// valid input arrives. Symbols are fixed for the duration of a match.
#[derive(Debug, Clone)]
pub struct GameEngine {
    symbols: PlayerSymbols,
    games_per_match: u32,
}

impl GameEngine {
    /// Creates an engine for best-of-`games_per_match` play.
    pub fn new(symbols: PlayerSymbols, games_per_match: u32) -> Self {
        Self {
            symbols,
            games_per_match,
        }
    }

    /// Returns the symbol configuration.
    pub fn symbols(&self) -> &PlayerSymbols {
        &self.symbols
    }

    /// Mutable access to the symbols, for reconfiguration between matches.
    pub fn symbols_mut(&mut self) -> &mut PlayerSymbols {
        &mut self.symbols
    }

    /// Returns the number of games in a match.
    pub fn games_per_match(&self) -> u32 {
        self.games_per_match
    }

    /// Plays a full match and reports the result through the sink.
    ///
    /// Games run sequentially from 1. A player whose score strictly
    /// exceeds half the games ends the match immediately; if all games
    /// complete without that, the match is a tie.
    #[instrument(skip_all, fields(games = self.games_per_match))]
    pub fn play_match(
        &self,
        source: &mut dyn MoveSource,
        sink: &mut dyn ResultSink,
    ) -> Result<MatchOutcome> {
        let mut board = Board::new();
        let mut score = MatchScore::new();

        for number in 1..=self.games_per_match {
            sink.show_game_start(number);
            let outcome = self.play_game(&mut board, source, sink)?;
            info!(game = number, ?outcome, "game finished");

            sink.show_game_result(outcome, &self.symbols);
            score.record(outcome);
            sink.show_score(&score);

            if let Some(winner) = score.clinched(self.games_per_match) {
                info!(?winner, %score, "match clinched early");
                let outcome = MatchOutcome::Won(winner);
                sink.show_match_result(outcome, &self.symbols);
                return Ok(outcome);
            }
        }

        info!(%score, "match complete with no winner");
        sink.show_match_result(MatchOutcome::Tie, &self.symbols);
        Ok(MatchOutcome::Tie)
    }

    /// Plays one game on the given board to a terminal outcome.
    ///
    /// The board is reset first and holds its terminal state on return,
    /// after being shown once through the sink.
    #[instrument(skip_all)]
    pub fn play_game(
        &self,
        board: &mut Board,
        source: &mut dyn MoveSource,
        sink: &mut dyn ResultSink,
    ) -> Result<GameOutcome> {
        board.reset();
        let mut to_move = Player::First;

        loop {
            sink.show_board(board, &self.symbols);
            let at = self.request_valid_move(board, to_move, source, sink)?;
            board.place(at, to_move)?;
            debug!(player = ?to_move, %at, "placed");

            if let Some(winner) = rules::winner(board) {
                sink.show_board(board, &self.symbols);
                return Ok(GameOutcome::Won(winner));
            }
            if board.is_full() {
                sink.show_board(board, &self.symbols);
                return Ok(GameOutcome::Tie);
            }
            to_move = to_move.opponent();
        }
    }

    /// Prompts until the source supplies a legal move for the player.
    ///
    /// Re-prompts without limit: invalid input never aborts the game,
    /// each failure is reported through the sink with its own message.
    #[instrument(skip_all, fields(player = ?player))]
    fn request_valid_move(
        &self,
        board: &Board,
        player: Player,
        source: &mut dyn MoveSource,
        sink: &mut dyn ResultSink,
    ) -> Result<Coord> {
        let prompt = format!("What is your move, {}?", self.symbols.symbol(player));
        loop {
            let code = source.request_move(&prompt)?;
            let at = match RawMove::new(code).decode() {
                Ok(at) => at,
                Err(err) => {
                    debug!(code, %err, "rejected move");
                    sink.show_error(&err.to_string());
                    continue;
                }
            };
            if board.is_occupied(at) {
                let err = MoveError::CellOccupied(at);
                debug!(code, %err, "rejected move");
                sink.show_error(&err.to_string());
                continue;
            }
            return Ok(at);
        }
    }
}
