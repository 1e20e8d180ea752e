//! Command-line interface for match_tictactoe.

use clap::Parser;

/// Best-of-N tic-tac-toe for two players at one console
#[derive(Parser, Debug)]
#[command(name = "match_tictactoe")]
#[command(about = "Best-of-N tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Games per match (the N in best-of-N)
    #[arg(short = 'n', long, default_value_t = 3)]
    pub games: u32,

    /// Starting symbol for the first player
    #[arg(long, default_value = "X")]
    pub first: String,

    /// Starting symbol for the second player
    #[arg(long, default_value = "O")]
    pub second: String,
}
