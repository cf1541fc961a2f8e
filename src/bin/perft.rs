use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use draughts_engine::draughts::config::GameConfig;
use draughts_engine::game::Game;
use draughts_engine::search::perft::{divide, perft};
use tracing_subscriber::EnvFilter;

/// Count move paths from the opening position.
#[derive(Debug, Parser)]
#[command(name = "perft")]
struct Args {
    /// JSON game configuration; defaults apply to omitted fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of plies to enumerate.
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Break the deepest count down by root move.
    #[arg(long)]
    divide: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    let game = match Game::new(&config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!(
        "{n}x{n}, {} rows per side, {:?}",
        config.rows_per_side,
        config.rules,
        n = config.dimension
    );

    for depth in 1..=args.depth {
        let start = Instant::now();
        let nodes = perft(&game, depth);
        println!(
            "  depth {depth}: {nodes} ({:.3}s)",
            start.elapsed().as_secs_f64()
        );
    }

    if args.divide {
        for (from, mv, nodes) in divide(&game, args.depth) {
            println!("  {from} {mv}: {nodes}");
        }
    }
}
