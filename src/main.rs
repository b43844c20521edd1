//! Tic-tac-toe GUI
//!
//! Play N-in-a-row against the engine in a native window.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe::config::AppConfig;
use tictactoe::ui::TicTacToeApp;
use tictactoe::Difficulty;

/// Play tic-tac-toe and its larger N-in-a-row variants against the engine.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Play N-in-a-row against the engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Override the difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(size) = cli.size {
        config.game.board_size = size;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    config.validate().context("invalid command line override")?;

    init_tracing(&config.log.level);

    let state = TicTacToeApp::initial_state(&config).context("creating game")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 620.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("running window: {e}"))
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
