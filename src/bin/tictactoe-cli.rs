//! Terminal game loop: the human plays X and types moves as "row col".

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe::config::AppConfig;
use tictactoe::rules::{outcome, GameOutcome};
use tictactoe::{AIEngine, Board, Difficulty, Marker, Pos};

/// Play N-in-a-row against the engine in the terminal.
#[derive(Parser)]
#[command(name = "tictactoe-cli", about = "Play N-in-a-row against the engine in the terminal")]
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

    /// Override the search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Disable alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Print a config file with default values and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(size) = cli.size {
        config.game.board_size = size;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    if cli.depth.is_some() {
        config.search.depth = cli.depth;
    }
    if cli.no_pruning {
        config.search.pruning = false;
    }
    config.validate().context("invalid command line override")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let size = config.game.board_size;
    let mut board = Board::new(size).context("creating board")?;
    let mut engine = AIEngine::with_config(size, config.search_depth(), config.search.pruning);

    println!("You are X. Enter moves as \"row col\" (0-based), \"q\" to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let result = loop {
        println!("\n{board}");

        let pos = loop {
            print!("Your move: ");
            io::stdout().flush().context("flushing stdout")?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.context("reading stdin")?;
            let line = line.trim();
            if line == "q" {
                return Ok(());
            }

            match parse_move(line, &board) {
                Ok(pos) => break pos,
                Err(err) => println!("{err}"),
            }
        };

        board.set(pos, Marker::Player);
        if let Some(result) = outcome(&board) {
            break result;
        }

        let reply = engine
            .choose_move_with_stats(&mut board)
            .context("engine failed to move")?;
        println!(
            "Engine plays {} ({:?}, {} nodes, {}ms)",
            reply.best_move, reply.search_type, reply.nodes, reply.time_ms
        );
        board.set(reply.best_move, Marker::Engine);
        if let Some(result) = outcome(&board) {
            break result;
        }
    };

    println!("\n{board}");
    match result {
        GameOutcome::PlayerWin => println!("You win!"),
        GameOutcome::EngineWin => println!("Engine wins."),
        GameOutcome::Draw => println!("Draw."),
    }
    Ok(())
}

/// Parse "row col" into an empty cell of `board`
fn parse_move(line: &str, board: &Board) -> Result<Pos> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two numbers: row col");
    };
    let row: i32 = row.parse().with_context(|| format!("bad row '{row}'"))?;
    let col: i32 = col.parse().with_context(|| format!("bad column '{col}'"))?;

    if !board.contains(row, col) {
        bail!("({row}, {col}) is off the {0}x{0} board", board.size());
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        bail!("{pos} is already taken");
    }
    Ok(pos)
}
