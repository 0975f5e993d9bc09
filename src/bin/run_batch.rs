//! Run every scenario in a CSV file and write one summary line per scenario
//!
//! Scenarios that fail validation or do not converge are logged and skipped.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use loan_projection::report::{schedule_file_name, write_schedule_csv, write_summary_csv};
use loan_projection::terms::load_scenarios;
use loan_projection::ScenarioRunner;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV, one scenario per row
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Also write each scenario's monthly schedule into this directory
    #[arg(long)]
    schedules_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let results = ScenarioRunner::new().run_batch(&scenarios);

    let mut indexed = Vec::with_capacity(results.len());
    for (index, (scenario, result)) in scenarios.iter().zip(&results).enumerate() {
        match result {
            Ok(report) => {
                info!("scenario '{}' starting payment {:.2}", scenario.name, report.solve.starting_payment);
                indexed.push((index, report));
            }
            Err(e) => error!("scenario '{}' skipped: {}", scenario.name, e),
        }
    }

    let reports: Vec<_> = indexed.iter().map(|(_, report)| *report).collect();

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    write_summary_csv(BufWriter::new(file), &reports)?;

    if let Some(dir) = &args.schedules_dir {
        fs::create_dir_all(dir).with_context(|| format!("unable to create {}", dir.display()))?;
        for (index, report) in &indexed {
            let path = dir.join(schedule_file_name(*index, &report.name));
            let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
            write_schedule_csv(BufWriter::new(file), report)?;
        }
    }

    println!(
        "Projected {} of {} scenarios, summary written to {}",
        reports.len(),
        scenarios.len(),
        args.output.display()
    );
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
