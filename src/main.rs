use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Difficulty, MoveSelector};
use connect_four::config::AppConfig;
use connect_four::game::{Board, Game, GameOutcome, GameRecord, Piece, COLS};

/// Play Connect Four against the computer in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Difficulty: easy, medium or hard (asked at startup if not set here or in the config)
    #[arg(long)]
    difficulty: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI move first
    #[arg(long)]
    ai_first: bool,

    /// Write a JSON record of the game to this file when it ends
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    if cli.ai_first {
        config.game.ai_first = true;
    }
    if let Some(path) = cli.export {
        config.game.export_path = Some(path);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let difficulty = match cli.difficulty.as_deref() {
        Some(name) => Difficulty::parse_lenient(name),
        None => match config.ai.difficulty() {
            Some(difficulty) => difficulty,
            None => prompt_difficulty(&mut input, &mut out)?,
        },
    };

    let mut selector = MoveSelector::from_config(&config.ai);
    let first = if config.game.ai_first {
        Piece::Ai
    } else {
        Piece::Human
    };
    let mut game = Game::new(first);
    info!(%difficulty, first = first.name(), "game started");
    writeln!(
        out,
        "Connect Four ({difficulty}). You are {}, the AI is {}.",
        Piece::Human.symbol(),
        Piece::Ai.symbol()
    )?;

    while !game.is_over() {
        match game.current_piece() {
            Piece::Human => {
                write!(out, "\n{}", game.board())?;
                let Some(col) = prompt_column(&mut input, &mut out, game.board())? else {
                    writeln!(out, "Quitting.")?;
                    break;
                };
                game.play(col)?;
            }
            Piece::Ai => {
                let col = selector.pick_best_move(game.board(), Piece::Ai, difficulty)?;
                game.play(col)?;
                writeln!(out, "AI plays column {}", col + 1)?;
            }
        }
    }

    write!(out, "\n{}", game.board())?;
    match game.outcome() {
        Some(GameOutcome::Winner(Piece::Human)) => writeln!(out, "You win!")?,
        Some(GameOutcome::Winner(Piece::Ai)) => writeln!(out, "The AI wins.")?,
        Some(GameOutcome::Draw) => writeln!(out, "It's a draw.")?,
        None => {}
    }
    info!(outcome = ?game.outcome(), moves = game.moves().len(), "game finished");

    if let Some(path) = &config.game.export_path {
        GameRecord::from_game(&game)
            .write_to(path)
            .with_context(|| format!("exporting game to {}", path.display()))?;
        writeln!(out, "Game saved to {}", path.display())?;
    }

    Ok(())
}

/// Ask for a difficulty; an empty or unknown answer plays medium.
fn prompt_difficulty(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Difficulty> {
    write!(out, "Choose difficulty (easy/medium/hard) [medium]: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(Difficulty::parse_lenient(&line))
}

/// Read 1-based columns until a playable one is entered. `None` means the
/// player quit or input ended.
fn prompt_column(
    input: &mut impl BufRead,
    out: &mut impl Write,
    board: &Board,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "Your move (1-{COLS}, q to quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => {
                if board.is_valid_column(n - 1).unwrap_or(false) {
                    return Ok(Some(n - 1));
                }
                writeln!(out, "Column {n} is full.")?;
            }
            _ => writeln!(out, "Enter a number from 1 to {COLS}.")?,
        }
    }
}
