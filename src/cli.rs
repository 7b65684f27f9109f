//! Command-line interface for tictac.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac::{GameMode, Player};

/// Tictac - terminal tic-tac-toe with a casual computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with persistent scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode, overriding the saved setting
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Keep scores and settings in memory only
        #[arg(long)]
        ephemeral: bool,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Computer thinking delay in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Print the saved scoreboard
    Scores,

    /// Zero the saved scoreboard
    ResetScores,

    /// Print the heuristic move for a board
    Hint {
        /// Nine cells, row-major: X, O, and '.', '-' or '_' for empty
        board: String,

        /// Player to move
        #[arg(long, value_enum, default_value = "x")]
        player: PlayerArg,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Game mode flag values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::Pvp,
            ModeArg::Pvc => GameMode::PvcEasy,
        }
    }
}

/// Player flag values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// X
    X,
    /// O
    O,
}

impl From<PlayerArg> for Player {
    fn from(player: PlayerArg) -> Self {
        match player {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}
