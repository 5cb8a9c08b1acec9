//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario

use anyhow::{Context, Result};
use clap::Parser;
use compound_growth::scenario::{load_scenarios, run_scenarios, write_outcomes};
use compound_growth::{AppConfig, ProjectionEngine};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project many scenarios in parallel")]
struct Args {
    /// Scenario CSV
    input: PathBuf,

    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let scenarios = load_scenarios(file, &config.bounds)?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let engine = ProjectionEngine::new(config.projection.clone());
    let outcomes = run_scenarios(&engine, &scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let out = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_outcomes(out, &outcomes)?;
    println!("Output written to {}", args.output.display());

    let total_final: f64 = outcomes.iter().map(|o| o.final_value).sum();
    let total_deposited: f64 = outcomes.iter().map(|o| o.total_deposited).sum();
    println!("\nBatch Summary:");
    println!("  Scenarios:       {}", outcomes.len());
    println!("  Total deposited: {:.2}", total_deposited);
    println!("  Total value:     {:.2}", total_final);
    println!("  Total interest:  {:.2}", total_final - total_deposited);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
