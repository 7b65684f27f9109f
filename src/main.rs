//! Tictac - terminal tic-tac-toe
//!
//! Plays in a terminal UI by default; the other subcommands inspect the
//! saved scoreboard or ask the heuristic opponent for a move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ModeArg};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use tictac::{
    AppConfig, FileStore, GameController, GameMode, MemoryStore, Persistence, Player, Scoreboard,
    evaluate_board, explain_heuristic_move, format_board, parse_board,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        mode: None,
        ephemeral: false,
        seed: None,
        ai_delay_ms: None,
    });

    if !matches!(command, Command::Play { .. }) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = load_config(cli.config.as_deref())?;

    match command {
        Command::Play {
            mode,
            ephemeral,
            seed,
            ai_delay_ms,
        } => {
            let config = config.with_seed(seed);
            let config = match ai_delay_ms {
                Some(ms) => config.with_ai_delay_ms(ms),
                None => config,
            };
            run_play(config, mode, ephemeral).await
        }
        Command::Scores => run_scores(&config),
        Command::ResetScores => run_reset_scores(&config),
        Command::Hint {
            board,
            player,
            seed,
        } => run_hint(&board, player.into(), seed.or(*config.seed())),
    }
}

/// Loads the config file named on the command line, else `tictac.toml` if
/// present, else defaults; then applies environment overrides.
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            AppConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => AppConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Installs a file logger so tracing output does not corrupt the TUI.
fn init_file_tracing(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let log_path = dir.join("tictac.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(log_path)
}

/// Run the terminal game
async fn run_play(config: AppConfig, mode: Option<ModeArg>, ephemeral: bool) -> Result<()> {
    let log_dir = if ephemeral {
        std::env::temp_dir()
    } else {
        config.data_dir().clone()
    };
    let log_path = init_file_tracing(&log_dir)?;
    info!(log = %log_path.display(), ?config, ephemeral, "Starting tictac");

    let persistence = if ephemeral {
        Persistence::new(MemoryStore::new())
    } else {
        Persistence::new(FileStore::new(config.data_dir()))
    };

    let (mut controller, events) = GameController::new(persistence, config.ai_delay(), *config.seed());
    if let Some(mode) = mode.map(GameMode::from)
        && controller.settings().mode != mode
    {
        controller.set_mode(mode);
    }

    tictac::run_tui(controller, events).await
}

/// Print the saved scoreboard
#[instrument(skip(config))]
fn run_scores(config: &AppConfig) -> Result<()> {
    let persistence = Persistence::new(FileStore::new(config.data_dir()));
    let scores = persistence.load_scores();
    debug!(?scores, "Loaded scores");
    println!("{}", scores);
    Ok(())
}

/// Zero the saved scoreboard
#[instrument(skip(config))]
fn run_reset_scores(config: &AppConfig) -> Result<()> {
    let persistence = Persistence::new(FileStore::new(config.data_dir()));
    persistence.save_scores(&Scoreboard::new())?;
    info!("Scores reset");
    println!("Scores reset.");
    Ok(())
}

/// Print the heuristic move for a board
#[instrument]
fn run_hint(board: &str, player: Player, seed: Option<u64>) -> Result<()> {
    let board = parse_board(board)?;
    let eval = evaluate_board(&board);
    if eval.is_terminal() {
        println!("{}: {}", format_board(&board), eval);
        return Ok(());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
    match explain_heuristic_move(&board, player, &mut rng) {
        Some((pos, reason)) => println!(
            "{} plays {} (square {}, {})",
            player,
            pos,
            pos.to_index() + 1,
            reason
        ),
        None => println!("No move available"),
    }
    Ok(())
}
