//! Command-line interface for tictactoi.

use crate::config::ModeChoice;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoi::Difficulty;

/// Tic-tac-toe where a drawn board reopens instead of ending the round
#[derive(Parser, Debug)]
#[command(name = "tictactoi")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoi.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Opponent, overrides the config file
        #[arg(long, value_enum)]
        mode: Option<ModeChoice>,

        /// Computer strength (easy, medium, hard), overrides the config file
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Show the persisted scores
    Scores,

    /// Set the persisted scores back to zero
    ResetScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from(["tictactoi", "play", "--mode", "friend", "--difficulty", "hard"]).unwrap();
        match cli.command {
            Command::Play { mode, difficulty } => {
                assert_eq!(mode, Some(ModeChoice::Friend));
                assert_eq!(difficulty, Some(Difficulty::Hard));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("tictactoi.toml"));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["tictactoi", "reset-scores", "--config", "other.toml"]).unwrap();
        assert!(matches!(cli.command, Command::ResetScores));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoi", "play", "--difficulty", "godlike"]).is_err());
    }
}
