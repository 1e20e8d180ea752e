//! Console implementations of the collaborator traits.
//!
//! Line-based stdin/stdout. Prompts re-ask until a line parses, so the
//! engine only ever sees well-formed values; a closed or failed stream
//! surfaces as an error and unwinds to the caller.

use crate::games::tictactoe::{
    Board, GameOutcome, MatchOutcome, MatchScore, MoveSource, PlayerSymbols, ResultSink,
};
use anyhow::{Context, Result, bail};
use std::io::BufRead;

/// Reads player input from stdin.
#[derive(Debug, Default)]
pub struct ConsoleSource;

impl ConsoleSource {
    /// Creates a stdin-backed source.
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}");
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading player input")?;
        if read == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    fn read_integer(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Please enter a number."),
            }
        }
    }
}

impl MoveSource for ConsoleSource {
    fn request_move(&mut self, prompt: &str) -> Result<i32> {
        self.read_integer(prompt)
    }

    fn request_symbol(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    fn request_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            }
        }
    }

    fn request_menu_choice(&mut self, prompt: &str) -> Result<i32> {
        self.read_integer(prompt)
    }
}

/// Writes game events to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a stdout-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for ConsoleSink {
    fn show_welcome(&mut self, games_per_match: u32) {
        println!("*************************************************************");
        println!("Welcome to Best-of-{games_per_match} Tic-Tac-Toe!");
        println!();
        println!("Each player takes turns putting a mark on the board.");
        println!("Enter moves as row then column, like 12 or 23.");
        println!("Three marks in a row wins the game; a full board is a tie.");
        println!("The best of {games_per_match} games wins the match. Good luck!");
        println!("*************************************************************");
    }

    fn show_game_start(&mut self, number: u32) {
        println!("----- Game number {number} -----");
    }

    fn show_board(&mut self, board: &Board, symbols: &PlayerSymbols) {
        println!("{}", board.render(symbols));
    }

    fn show_score(&mut self, score: &MatchScore) {
        println!("The score is: {score}");
    }

    fn show_game_result(&mut self, outcome: GameOutcome, symbols: &PlayerSymbols) {
        match outcome.winner() {
            Some(winner) => println!("{} won this game", symbols.symbol(winner)),
            None => println!("Nobody won this game. Tie!"),
        }
    }

    fn show_match_result(&mut self, outcome: MatchOutcome, symbols: &PlayerSymbols) {
        match outcome.winner() {
            Some(winner) => println!("{} won the match", symbols.symbol(winner)),
            None => println!("The match is a tie!"),
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("{message}");
    }

    fn show_goodbye(&mut self) {
        println!("------Thanks for playing!------");
    }
}
