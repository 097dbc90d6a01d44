//! Estimates the one-handed solitaire clear rate by repeated play.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::info;
use onehand::{GameOptions, STANDARD_FACES, STANDARD_SUITS, TrialOptions, TrialRunner};

/// Monte Carlo estimate of how often one-handed solitaire clears the deck
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Ranks per suit
    #[arg(long, default_value_t = STANDARD_FACES)]
    faces: u32,

    /// Number of suits
    #[arg(long, default_value_t = STANDARD_SUITS)]
    suits: u32,

    /// Seed for the shuffling generator (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let _ = env_logger::try_init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("using seed {seed}");

    let options = TrialOptions::default()
        .with_iterations(args.iterations)
        .with_seed(seed)
        .with_game(
            GameOptions::default()
                .with_faces(args.faces)
                .with_suits(args.suits),
        );

    let mut runner = match TrialRunner::new(options) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", runner.run_configured());
    ExitCode::SUCCESS
}
