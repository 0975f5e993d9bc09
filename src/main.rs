//! Loan Projection CLI
//!
//! Solves the starting payment for one scenario and prints the schedule

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use loan_projection::projection::{AnnualRow, ProjectionConfig, ProjectionPoint, ProjectionSummary, SolverConfig};
use loan_projection::report::write_schedule_csv;
use loan_projection::terms::load_scenario;
use loan_projection::{Scenario, ScenarioRunner};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "loan_projection", version, about = "Project an inflation-escalating loan alongside a fixed mortgage")]
struct Args {
    /// JSON scenario file; fields left out take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Loan principal
    #[arg(long)]
    principal: Option<f64>,

    /// Loan annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    years: Option<u32>,

    /// Mortgage principal
    #[arg(long)]
    mortgage_principal: Option<f64>,

    /// Mortgage annual interest rate in percent
    #[arg(long)]
    mortgage_rate: Option<f64>,

    /// Mortgage term in years
    #[arg(long)]
    mortgage_years: Option<u32>,

    /// Annual payment inflation in percent
    #[arg(long)]
    inflation: Option<f64>,

    /// Grow loan plus mortgage payment together at the inflation rate
    #[arg(long)]
    coupled: Option<bool>,

    /// Number of people splitting the household costs
    #[arg(long)]
    people: Option<u32>,

    /// Monthly utilities in the first year
    #[arg(long)]
    utilities: Option<f64>,

    /// Annual utilities inflation in percent
    #[arg(long)]
    utility_inflation: Option<f64>,

    /// Calendar date of the first payment (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Largest final balance accepted as paid off
    #[arg(long, default_value_t = loan_projection::projection::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Solver iteration budget
    #[arg(long, default_value_t = loan_projection::projection::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Months to print to the console
    #[arg(long, default_value_t = 24)]
    months: usize,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => load_scenario(path)
                .with_context(|| format!("failed to load scenario from {}", path.display()))?,
            None => Scenario::default(),
        };

        if let Some(v) = self.principal { scenario.loan.principal = v; }
        if let Some(v) = self.rate { scenario.loan.annual_interest_rate_percent = v; }
        if let Some(v) = self.years { scenario.loan.term_years = v; }
        if let Some(v) = self.mortgage_principal { scenario.mortgage.principal = v; }
        if let Some(v) = self.mortgage_rate { scenario.mortgage.annual_interest_rate_percent = v; }
        if let Some(v) = self.mortgage_years { scenario.mortgage.term_years = v; }
        if let Some(v) = self.inflation { scenario.policy.annual_inflation_rate_percent = v; }
        if let Some(v) = self.coupled { scenario.policy.couple_to_mortgage_payment = v; }
        if let Some(v) = self.people { scenario.household.num_people = v; }
        if let Some(v) = self.utilities { scenario.household.monthly_utilities = v; }
        if let Some(v) = self.utility_inflation { scenario.household.utility_inflation_rate_percent = v; }
        if self.start_date.is_some() { scenario.start_date = self.start_date; }

        Ok(scenario)
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    name: &'a str,
    solver_iterations: usize,
    summary: ProjectionSummary,
    annual: Vec<AnnualRow>,
    series: &'a [ProjectionPoint],
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario = args.scenario()?;

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        solver: SolverConfig {
            tolerance: args.tolerance,
            max_iterations: args.max_iterations,
        },
    });
    let report = runner
        .run(&scenario)
        .with_context(|| format!("scenario '{}' failed", scenario.name))?;
    let summary = report.result.summary();

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        write_schedule_csv(BufWriter::new(file), &report)?;
    }

    if args.json {
        let output = JsonOutput {
            name: &report.name,
            solver_iterations: report.solve.iterations.len(),
            summary,
            annual: report.result.annual_rows(),
            series: &report.result.series,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Loan Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Scenario: {}", report.name);
    println!("  Loan: ${:.2} at {:.3}% over {} years", scenario.loan.principal, scenario.loan.annual_interest_rate_percent, scenario.loan.term_years);
    println!("  Mortgage: ${:.2} at {:.3}% over {} years", scenario.mortgage.principal, scenario.mortgage.annual_interest_rate_percent, scenario.mortgage.term_years);
    println!("  Inflation: {:.2}% ({})", scenario.policy.annual_inflation_rate_percent,
        if scenario.policy.couple_to_mortgage_payment { "coupled to mortgage" } else { "loan payment only" });
    println!("  Household: {} people, utilities ${:.2}/month growing {:.2}%",
        scenario.household.num_people, scenario.household.monthly_utilities, scenario.household.utility_inflation_rate_percent);
    println!();

    println!("Mortgage payment: ${:.2}", report.mortgage_payment);
    println!("Starting loan payment: ${:.2} ({} iterations)", report.solve.starting_payment, report.solve.iterations.len());
    println!();

    println!("{:>5} {:>14} {:>12} {:>14}", "Month", "Balance", "Payment", "PerPerson");
    println!("{}", "-".repeat(48));
    for point in report.result.series.iter().take(args.months) {
        println!("{:>5} {:>14.2} {:>12.2} {:>14.2}", point.month, point.balance, point.monthly_payment, point.per_person_share);
    }
    if report.result.series.len() > args.months {
        println!("... ({} more months)", report.result.series.len() - args.months);
    }

    if let Some(path) = &args.csv {
        println!("\nFull schedule written to: {}", path.display());
    }

    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Loan Payments: ${:.2}", summary.total_payment);
    println!("  Final Loan Payment: ${:.2}", summary.final_payment);
    println!("  Total Household Cost: ${:.2}", summary.total_household_cost);
    println!("  Peak Per-Person Share: ${:.2}", summary.peak_per_person_share);
    println!("  Final Balance: ${:.4}", summary.final_balance);

    Ok(())
}
