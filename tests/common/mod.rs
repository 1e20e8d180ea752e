//! Scripted collaborators for driving the engine in tests.

#![allow(dead_code)]

use anyhow::{Result, bail};
use match_tictactoe::{
    Board, GameOutcome, MatchOutcome, MatchScore, MoveSource, PlayerSymbols, ResultSink,
};
use std::collections::VecDeque;

/// A move source that replays canned input and fails once it runs dry.
///
/// Running dry is the test's assertion that the engine asked for more
/// input than the scenario allows.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    moves: VecDeque<i32>,
    symbols: VecDeque<String>,
    yes_no: VecDeque<bool>,
    menu: VecDeque<i32>,
}

impl ScriptedSource {
    pub fn with_moves(moves: &[i32]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn push_symbol(&mut self, symbol: &str) {
        self.symbols.push_back(symbol.to_string());
    }

    pub fn push_yes_no(&mut self, answer: bool) {
        self.yes_no.push_back(answer);
    }

    pub fn push_menu(&mut self, choice: i32) {
        self.menu.push_back(choice);
    }
}

impl MoveSource for ScriptedSource {
    fn request_move(&mut self, _prompt: &str) -> Result<i32> {
        match self.moves.pop_front() {
            Some(code) => Ok(code),
            None => bail!("move script exhausted"),
        }
    }

    fn request_symbol(&mut self, _prompt: &str) -> Result<String> {
        match self.symbols.pop_front() {
            Some(symbol) => Ok(symbol),
            None => bail!("symbol script exhausted"),
        }
    }

    fn request_yes_no(&mut self, _prompt: &str) -> Result<bool> {
        match self.yes_no.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("yes/no script exhausted"),
        }
    }

    fn request_menu_choice(&mut self, _prompt: &str) -> Result<i32> {
        match self.menu.pop_front() {
            Some(choice) => Ok(choice),
            None => bail!("menu script exhausted"),
        }
    }
}

/// A sink that records every event it is shown.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub games_started: Vec<u32>,
    pub boards_shown: usize,
    pub scores: Vec<String>,
    pub errors: Vec<String>,
    pub game_results: Vec<GameOutcome>,
    pub match_result: Option<MatchOutcome>,
}

impl ResultSink for RecordingSink {
    fn show_welcome(&mut self, _games_per_match: u32) {}

    fn show_game_start(&mut self, number: u32) {
        self.games_started.push(number);
    }

    fn show_board(&mut self, _board: &Board, _symbols: &PlayerSymbols) {
        self.boards_shown += 1;
    }

    fn show_score(&mut self, score: &MatchScore) {
        self.scores.push(score.to_string());
    }

    fn show_game_result(&mut self, outcome: GameOutcome, _symbols: &PlayerSymbols) {
        self.game_results.push(outcome);
    }

    fn show_match_result(&mut self, outcome: MatchOutcome, _symbols: &PlayerSymbols) {
        self.match_result = Some(outcome);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_goodbye(&mut self) {}
}
