mod game;
mod selfplay;
mod ui;

use std::time::Instant;

use clap::{Parser, Subcommand};
use num_format::{Locale, ToFormattedString};

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// Search depth in plies
    #[arg(short, long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..=16))]
    depth: u32,
}

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play an engine-vs-engine game and print the record
    Selfplay {
        /// Search depth for Black
        #[arg(long, default_value = "6")]
        black_depth: u32,

        /// Search depth for White
        #[arg(long, default_value = "6")]
        white_depth: u32,
    },
    /// Count move-generator leaf nodes from the initial position
    Perft {
        #[arg(default_value = "8")]
        depth: u32,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Selfplay {
            black_depth,
            white_depth,
        }) => selfplay::run(black_depth, white_depth),
        Some(SubCommands::Perft { depth }) => run_perft(depth),
        None => {
            if let Err(err) = ui::ui_loop(args.engine_params.depth) {
                eprintln!("Failed to run UI: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn run_perft(depth: u32) {
    let start = Instant::now();
    let nodes = othello_core::perft::perft_root(depth);
    let elapsed = start.elapsed();
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON)) as u64;

    println!(
        "perft({depth}) = {} nodes in {:.3}s ({} nodes/s)",
        nodes.to_formatted_string(&Locale::en),
        elapsed.as_secs_f64(),
        nps.to_formatted_string(&Locale::en),
    );
}
