use clap::Parser;
use std::path::PathBuf;

use particle_bench::app::{self, RunOptions};
use particle_bench::config::{SimParams, DEFAULT_PARTICLE_COUNT};

/// Benchmark short-range particle interactions with cell-list
/// neighbor search.
#[derive(Parser, Debug)]
struct Args {
    /// Number of particles
    #[arg(short = 'n', long = "particles", default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,

    /// Write particle position snapshots to this file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Append a "<n> <seconds>" line to this summary file
    #[arg(short = 's', long = "summary")]
    summary: Option<PathBuf>,

    /// Export per-step distance statistics as CSV
    #[arg(long = "stats-csv")]
    stats_csv: Option<PathBuf>,

    /// Turn off all correctness checks and particle output
    #[arg(long = "no-stats")]
    no_stats: bool,

    /// Load simulation parameters from a TOML file
    #[arg(long = "params")]
    params: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let params = match &args.params {
        Some(path) => match SimParams::load_from_file(path) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("failed to load parameters from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SimParams::default(),
    };

    let opts = RunOptions {
        n: args.particles,
        output: args.output,
        summary: args.summary,
        stats_csv: args.stats_csv,
        no_stats: args.no_stats,
        params,
    };

    if let Err(e) = app::run(opts) {
        eprintln!("run failed: {}", e);
        std::process::exit(1);
    }
}
