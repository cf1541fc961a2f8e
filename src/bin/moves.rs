use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use draughts_engine::core::board::Board;
use draughts_engine::core::coord::Coord;
use draughts_engine::draughts::config::GameConfig;
use draughts_engine::draughts::movegen::Move;
use draughts_engine::draughts::piece::Color;
use draughts_engine::error::EngineError;
use draughts_engine::game::Game;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

/// List legal draughts moves for one piece or for the side to move.
#[derive(Debug, Parser)]
#[command(name = "moves")]
struct Args {
    /// JSON game configuration; defaults apply to omitted fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board diagram to start from instead of the opening position.
    #[arg(long)]
    diagram: Option<PathBuf>,

    /// Side to move; defaults to the configured first mover.
    #[arg(long, value_enum)]
    turn: Option<Side>,

    /// Only list moves of the piece on this square, as `x,y`.
    #[arg(long)]
    at: Option<Coord>,

    /// Print the move list as JSON.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_game(args: &Args) -> Result<Game, EngineError> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let turn = args.turn.map_or(config.first_to_move, Color::from);

    match &args.diagram {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let board = Board::from_diagram(&text)?;
            Ok(Game::from_board(board, config.rules, turn))
        }
        None => {
            let mut game = Game::new(&config)?;
            if game.turn() != turn {
                game.advance_turn();
            }
            Ok(game)
        }
    }
}

fn list_moves(game: &Game, at: Option<Coord>) -> Result<Vec<(Coord, Move)>, EngineError> {
    match at {
        Some(at) => Ok(game
            .legal_moves(at)?
            .into_iter()
            .map(|mv| (at, mv))
            .collect()),
        None => Ok(game.side_moves()),
    }
}

fn main() {
    let args = Args::parse();
    init_logging();

    let game = match load_game(&args) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to set up the position: {e}");
            std::process::exit(2);
        }
    };

    let moves = match list_moves(&game, args.at) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&moves) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to encode moves: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", game.board());
    println!("{} to move, {} legal moves", game.turn(), moves.len());
    for (from, mv) in &moves {
        println!("  {from}: {mv}");
    }
}
