//! Best-of-N tic-tac-toe at the console.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use match_tictactoe::{
    ConsoleSink, ConsoleSource, GameEngine, MenuChoice, MoveSource, Player, PlayerSymbols,
    ResultSink,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet by default and on stderr, so logs never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let symbols =
        PlayerSymbols::new(&cli.first, &cli.second).context("invalid player symbols")?;

    let mut engine = GameEngine::new(symbols, cli.games);
    let mut source = ConsoleSource::new();
    let mut sink = ConsoleSink::new();

    run(&mut engine, &mut source, &mut sink)
}

/// Menu-driven application loop.
fn run(engine: &mut GameEngine, source: &mut ConsoleSource, sink: &mut ConsoleSink) -> Result<()> {
    sink.show_welcome(engine.games_per_match());

    loop {
        match request_menu_choice(source, sink)? {
            MenuChoice::PlayMatch => loop {
                engine.play_match(source, sink)?;
                if !source.request_yes_no("Play again? y/n")? {
                    break;
                }
            },
            MenuChoice::ChangeSymbols => change_symbols(engine, source, sink)?,
            MenuChoice::Quit => break,
        }
    }

    sink.show_goodbye();
    Ok(())
}

/// Prompts until the player picks a listed menu entry.
fn request_menu_choice(source: &mut ConsoleSource, sink: &mut ConsoleSink) -> Result<MenuChoice> {
    let prompt = MenuChoice::menu_text();
    loop {
        let choice = source.request_menu_choice(&prompt)?;
        match MenuChoice::parse(choice) {
            Ok(choice) => return Ok(choice),
            Err(err) => sink.show_error(&err.to_string()),
        }
    }
}

/// Walks both player slots, re-prompting until each candidate passes
/// validation. An empty line keeps the current symbol.
fn change_symbols(
    engine: &mut GameEngine,
    source: &mut ConsoleSource,
    sink: &mut ConsoleSink,
) -> Result<()> {
    for player in [Player::First, Player::Second] {
        loop {
            let current = engine.symbols().symbol(player);
            let prompt = format!("New symbol for {current} (enter to keep):");
            let candidate = source.request_symbol(&prompt)?;
            if candidate.is_empty() {
                break;
            }
            match engine.symbols_mut().set(player, &candidate) {
                Ok(()) => {
                    info!(?player, symbol = %candidate, "symbol changed");
                    break;
                }
                Err(err) => sink.show_error(&err.to_string()),
            }
        }
    }
    Ok(())
}
