//! Knight Trail: place numbered markers by cardinal and intercardinal jumps
//! until the trail gets stuck.
//!
//! ## Usage
//!
//! - `knight-trail` - Show a demo
//! - `knight-trail play` - Start the text protocol on stdin/stdout
//! - `knight-trail demo --seed 7` - Run the demo with a given seed

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use knight_trail::board::check_size;
use knight_trail::constants::{DEFAULT_SEED, HEIGHT, N_PLAYOUTS, WIDTH};
use knight_trail::engine::GameEngine;
use knight_trail::playout::{playout_stats, warnsdorff_move};
use knight_trail::position::parse_point;
use knight_trail::protocol::TrailProtocol;

/// Knight Trail: a single-player jumping puzzle
#[derive(Parser)]
#[command(name = "knight-trail")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Board width (rows)
    #[arg(long, default_value_t = WIDTH, global = true)]
    width: usize,

    /// Board height (columns)
    #[arg(long, default_value_t = HEIGHT, global = true)]
    height: usize,

    /// Seed for random playouts
    #[arg(long, default_value_t = DEFAULT_SEED, global = true)]
    seed: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use with a front end
    Play,
    /// Run a simple demo of the engine
    Demo {
        /// Opening cell as x,y
        #[arg(long, default_value = "0,0")]
        start: String,
        /// Number of random playouts to summarise
        #[arg(long, default_value_t = N_PLAYOUTS)]
        playouts: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).parse_default_env().init();

    check_size(cli.width, cli.height).context("invalid board size")?;

    match cli.command {
        Some(Commands::Play) => {
            info!("protocol session on {}x{} board", cli.width, cli.height);
            TrailProtocol::with_seed(cli.width, cli.height, cli.seed).run()
        }
        Some(Commands::Demo { start, playouts }) => {
            run_demo(cli.width, cli.height, &start, playouts, cli.seed)
        }
        None => run_demo(cli.width, cli.height, "0,0", N_PLAYOUTS, cli.seed),
    }
}

fn run_demo(width: usize, height: usize, start: &str, playouts: usize, seed: u64) -> Result<()> {
    println!("Knight Trail: jump 3 straight or 2 diagonally\n");

    let (x, y) = parse_point(start)
        .with_context(|| format!("invalid opening cell {start:?}, expected x,y"))?;

    // Demo 1: Warnsdorff trail
    println!("=== Warnsdorff Trail ===");
    let mut engine = GameEngine::try_with_size(width, height)?;
    engine.place_marker(x, y)?;
    while let Some((hx, hy)) = warnsdorff_move(engine.state()) {
        engine.place_marker(hx, hy)?;
    }
    println!("{}", engine.state().board);
    println!("Trail length: {} of {}\n", engine.state().move_count, width * height);

    // Demo 2: random playouts
    println!("=== Random Playouts ===");
    engine.reset();
    let stats = playout_stats(engine.state(), playouts, seed);
    println!("Playouts: {}", stats.playouts);
    println!("Mean length: {:.1}", stats.mean);
    println!("Best: {}  Worst: {}", stats.best, stats.worst);
    Ok(())
}
