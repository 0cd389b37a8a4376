use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use medbench::driver;
use medbench::measure::Mode;
use medbench::report;
use medbench::types::SweepConfig;

#[derive(Parser)]
#[command(
    name = "medbench",
    version,
    about = "Benchmark quickselect against brute-force median search"
)]
struct Cli {
    /// Smallest input size to sweep (inclusive)
    start: usize,

    /// Largest input size to sweep (inclusive)
    stop: usize,

    /// Number of sizes to sweep between start and stop
    increments: usize,

    /// Trials to run and average per size
    #[arg(default_value_t = 1)]
    trials: usize,

    /// What each invocation is measured in
    #[arg(long, value_enum, default_value_t = Mode::Time)]
    mode: Mode,

    /// Seed for the sample generator (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = SweepConfig {
        start: cli.start,
        stop: cli.stop,
        increments: cli.increments,
        trials: cli.trials,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut progress = stdout.lock();

    let rows = driver::run(&config, cli.mode, &mut rng, &mut progress)?;

    let filename = cli.mode.output_filename();
    fs::write(filename, report::format_csv(&rows, cli.mode))
        .with_context(|| format!("Failed to write {}", filename))?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
