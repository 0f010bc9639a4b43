//! Benson-Go: dead-stone and territory analysis for Go positions.
//!
//! ## Usage
//!
//! - `benson-go analyze [FILE]` - Analyze a board diagram (stdin if no file)
//! - `benson-go demo` - Analyze a random position
//! - `benson-go gtp` - Start a GTP server for GUI integration
//!
//! Set `RUST_LOG=debug` to trace each Benson round.

use std::cmp::Ordering;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use benson_go::benson::{BensonConfig, Mark, resolve};
use benson_go::board::{Board, Color};
use benson_go::constants::{DEFAULT_SIZE, DEMO_DENSITY, DILATIONS, EROSIONS};
use benson_go::gtp::GtpEngine;
use benson_go::influence::{InfluenceConfig, estimate};

/// Benson-Go: life/death and territory resolution for Go positions
#[derive(Parser)]
#[command(name = "benson-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a board diagram (X black, O white, . empty)
    Analyze {
        /// Diagram file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Generate a random position and analyze it
    Demo {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEMO_DENSITY)]
        density: f64,
        /// Seed for position generation; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Start the GTP (Go Text Protocol) server
    Gtp,
}

#[derive(Args)]
struct EngineArgs {
    /// Dilation passes of the territory estimator
    #[arg(long, global = true, default_value_t = DILATIONS)]
    dilations: usize,
    /// Erosion passes of the territory estimator
    #[arg(long, global = true, default_value_t = EROSIONS)]
    erosions: usize,
    /// Let regions touching the board edge count as eyes
    #[arg(long, global = true)]
    keep_edge_regions: bool,
}

impl EngineArgs {
    fn benson(&self) -> BensonConfig {
        BensonConfig {
            reject_edge_regions: !self.keep_edge_regions,
        }
    }

    fn influence(&self) -> InfluenceConfig {
        InfluenceConfig {
            dilations: self.dilations,
            erosions: self.erosions,
            ..InfluenceConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { file }) => {
            let text = match &file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading board from stdin")?;
                    buf
                }
            };
            let board: Board = text.parse().context("parsing board diagram")?;
            analyze(&board, &cli.engine);
        }
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::with_config(cli.engine.benson(), cli.engine.influence());
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Demo {
            size,
            density,
            seed,
        }) => run_demo(size, density, seed, &cli.engine)?,
        None => run_demo(DEFAULT_SIZE, DEMO_DENSITY, None, &cli.engine)?,
    }
    Ok(())
}

fn run_demo(size: usize, density: f64, seed: Option<u64>, args: &EngineArgs) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!("demo position: size {size}, density {density}, seed {seed}");
    let mut rng = fastrand::Rng::with_seed(seed);
    let board = Board::random(size, density, &mut rng).context("building demo position")?;
    println!("Seed: {seed}\n");
    analyze(&board, args);
    Ok(())
}

fn analyze(board: &Board, args: &EngineArgs) {
    println!("=== Position ===");
    println!("{board}");

    let outcome = resolve(board, &args.benson());
    info!(
        "benson: {} stones removed in {} rounds",
        outcome.removed, outcome.rounds
    );
    println!("=== Dead stones (x) ===");
    for (row, marks) in board.grid().rows().zip(outcome.marks.rows()) {
        let line: Vec<String> = row
            .iter()
            .zip(marks)
            .map(|(cell, mark)| match mark {
                Mark::Remove => "x".to_string(),
                Mark::Unchanged => cell.to_char().to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!(
        "removed {} stones in {} rounds\n",
        outcome.removed, outcome.rounds
    );

    println!("=== Territory estimate ===");
    let est = estimate(&outcome.board, &args.influence());
    println!("{est}");
    let (black, white) = (est.count(Color::Black), est.count(Color::White));
    match black.cmp(&white) {
        Ordering::Greater => println!("black ahead by {}", black - white),
        Ordering::Less => println!("white ahead by {}", white - black),
        Ordering::Equal => println!("even"),
    }
}
