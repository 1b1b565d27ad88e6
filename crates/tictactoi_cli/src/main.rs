//! tictactoi - tic-tac-toe in the terminal.
//!
//! Play against a friend or the computer. A full board without a line is
//! not a draw: each player's oldest mark disappears and the round goes on.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod score_file;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use score_file::FileScoreStore;
use session::Session;
use tictactoi::{GameMachine, Mark, ScoreStore, Scoreboard};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { mode, difficulty } => play(config.with_overrides(mode, difficulty)).await,
        Command::Scores => show_scores(&config),
        Command::ResetScores => reset_scores(&config),
    }
}

#[instrument(skip(config))]
async fn play(config: AppConfig) -> Result<()> {
    let store = FileScoreStore::open(config.score_file())?;
    info!(mode = %config.game_mode(), path = %store.path().display(), "Starting session");

    let session = Session::new(
        GameMachine::new(store),
        config.game_mode(),
        config.settle_delay(),
        config.sound(),
    );
    session::run(session).await
}

fn show_scores(config: &AppConfig) -> Result<()> {
    let store = FileScoreStore::open(config.score_file())?;
    let scores = Scoreboard::new(store.load_score(Mark::First), store.load_score(Mark::Second));
    println!("{}", render::scores(scores));
    Ok(())
}

fn reset_scores(config: &AppConfig) -> Result<()> {
    let mut store = FileScoreStore::open(config.score_file())?;
    store.reset()?;
    println!("Scores reset.");
    Ok(())
}
