//! Project a single scenario and print the year-by-year growth
//!
//! Optionally writes the paginated report and a CSV of snapshots, and
//! simulates emailing the report.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use compound_growth::notify::{send_results_by_email, SimulatedMailer};
use compound_growth::projection::StepPolicy;
use compound_growth::report::{
    csv_export, format_currency, format_indian_large_number, format_percentage, ReportDocument,
};
use compound_growth::{AppConfig, ProjectionEngine, RawInputs};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "project", about = "Compound interest projection")]
struct Args {
    /// Initial investment
    #[arg(long, default_value = "100000")]
    principal: String,

    /// Nominal yearly contribution
    #[arg(long, default_value = "60000")]
    contribution: String,

    /// annually | semi-annually | quarterly | monthly
    #[arg(long, default_value = "monthly")]
    contribution_frequency: String,

    /// Annual interest rate in percent
    #[arg(long, default_value = "8")]
    rate: String,

    /// annually | semi-annually | quarterly | monthly | daily
    #[arg(long, default_value = "quarterly")]
    compounding_frequency: String,

    #[arg(long, default_value = "10")]
    years: String,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compound fractionally when deposits outnumber compounding periods
    #[arg(long)]
    fractional: bool,

    /// Write the paginated report here
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the snapshots as CSV here
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Simulate emailing the report to this address
    #[arg(long)]
    email: Option<String>,

    /// Simulated delivery time in milliseconds
    #[arg(long, default_value_t = 2000)]
    mail_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if args.fractional {
        config.projection.step_policy = StepPolicy::Fractional;
    }

    let raw = RawInputs {
        principal: args.principal.clone(),
        annual_contribution: args.contribution.clone(),
        contribution_frequency: args.contribution_frequency.clone(),
        interest_rate: args.rate.clone(),
        compounding_frequency: args.compounding_frequency.clone(),
        years: args.years.clone(),
    };
    let params = config.bounds.sanitize(&raw);

    let engine = ProjectionEngine::new(config.projection.clone());
    let result = engine.project(&params);
    let summary = result.summary();

    println!(
        "Investing {} + {} per year ({}) at {}% compounded {} for {} years",
        format_currency(params.principal),
        format_currency(params.annual_contribution),
        params.contribution_frequency,
        params.interest_rate,
        params.compounding_frequency,
        params.years
    );
    println!();
    println!("  Final value:     {}", format_currency(summary.final_value));
    println!("  Total invested:  {}", format_currency(summary.total_deposited));
    println!(
        "  Interest earned: {} ({} of final value)",
        format_currency(summary.total_interest),
        format_percentage(summary.interest_share() * 100.0)
    );
    println!();
    println!("{:>4} | {:>12} | {:>12} | {:>12}", "Year", "Invested", "Interest", "Value");
    for s in &result.snapshots {
        println!(
            "{:>4} | {:>12} | {:>12} | {:>12}",
            s.year,
            format_indian_large_number(s.total_deposited),
            format_indian_large_number(s.interest_earned),
            format_indian_large_number(s.investment_value)
        );
    }

    let today = Local::now().date_naive();

    if let Some(path) = &args.report {
        ReportDocument::build(&result, &config.report, today)
            .write_to(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        csv_export::write_snapshots_to_path(path, &result.snapshots)
            .with_context(|| format!("Failed to write CSV {}", path.display()))?;
        println!("Snapshots written to {}", path.display());
    }

    if let Some(address) = &args.email {
        let mailer = SimulatedMailer::new(Duration::from_millis(args.mail_delay_ms));
        println!("\nPreparing email...");
        match send_results_by_email(&mailer, address, &result, &config.report, today).await {
            Ok(receipt) => println!(
                "Results sent to {}. Check your inbox for your compound interest calculation results.",
                receipt.recipient
            ),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
