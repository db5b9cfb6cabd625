use std::path::PathBuf;

use clap::Parser;

use corndog_kitchen_rs::config::GameConfig;
use corndog_kitchen_rs::sim::{SimConfig, print_summary, run_batch, write_csv, write_summary_json};

#[derive(Parser, Debug)]
#[command(name = "balance")]
#[command(about = "Batch-simulate cooks to sanity-check the scoring balance")]
struct Args {
    /// Number of simulated preparation cycles
    #[arg(long, default_value = "500")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Chance any individual cook decision goes wrong
    #[arg(long, default_value = "0.15")]
    fumble: f64,

    /// Fry-time spread in seconds around the perfect window
    #[arg(long, default_value = "40.0")]
    jitter: f64,

    /// Path to the kitchen configuration asset
    #[arg(short, long, default_value = "kitchen_config.json")]
    config: PathBuf,

    /// Output CSV file for per-trial results
    #[arg(long, default_value = "balance_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "balance_summary.json")]
    json: PathBuf,
}

fn main() {
    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.fumble) {
        eprintln!("Error: --fumble must be within 0..=1");
        std::process::exit(1);
    }

    let config = if args.config.exists() {
        match GameConfig::load(&args.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {:?}: {}", args.config, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No config at {:?}; using shipped defaults.", args.config);
        GameConfig::default()
    };

    let sim = SimConfig {
        trials: args.trials,
        seed: args.seed,
        fumble_rate: args.fumble,
        fry_jitter: args.jitter,
    };

    println!(
        "Simulating {} cycles (seed {}, fumble {:.0}%)...",
        sim.trials,
        sim.seed,
        sim.fumble_rate * 100.0
    );

    let (results, summary) = run_batch(&sim, &config);
    print_summary(&summary);

    if let Err(e) = write_csv(&results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote per-trial results to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&summary, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
