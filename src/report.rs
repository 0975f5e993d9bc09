//! CSV export of projected schedules and batch summaries

use crate::error::Result;
use crate::scenario::ScenarioReport;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::io::Write;

/// Exported schedule row
#[derive(Debug, Serialize)]
struct ScheduleRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Date")]
    date: Option<NaiveDate>,
    #[serde(rename = "Balance")]
    balance: String,
    #[serde(rename = "LoanPayment")]
    loan_payment: String,
    #[serde(rename = "MortgagePayment")]
    mortgage_payment: String,
    #[serde(rename = "PerPersonShare")]
    per_person_share: String,
}

/// Exported batch summary row
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "MortgagePayment")]
    mortgage_payment: String,
    #[serde(rename = "StartingPayment")]
    starting_payment: String,
    #[serde(rename = "FinalPayment")]
    final_payment: String,
    #[serde(rename = "Iterations")]
    iterations: usize,
    #[serde(rename = "TotalPayment")]
    total_payment: String,
    #[serde(rename = "TotalHouseholdCost")]
    total_household_cost: String,
    #[serde(rename = "PeakPerPersonShare")]
    peak_per_person_share: String,
    #[serde(rename = "FinalBalance")]
    final_balance: String,
}

fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Calendar date of a zero-based month, counted from `start`
pub fn month_date(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(month))
}

/// File name for a scenario's schedule: the row index keeps names unique,
/// anything outside `[A-Za-z0-9_-]` in the scenario name becomes `_`
pub fn schedule_file_name(index: usize, name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{:03}_{}.csv", index, cleaned)
}

/// Write the monthly schedule of one report
pub fn write_schedule_csv<W: Write>(writer: W, report: &ScenarioReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in &report.result.series {
        csv_writer.serialize(ScheduleRow {
            month: point.month,
            date: report.start_date.and_then(|start| month_date(start, point.month)),
            balance: money(point.balance),
            loan_payment: money(point.monthly_payment),
            mortgage_payment: money(report.mortgage_payment),
            per_person_share: money(point.per_person_share),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one summary line per report
pub fn write_summary_csv<W: Write>(writer: W, reports: &[&ScenarioReport]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for report in reports {
        let summary = report.result.summary();
        csv_writer.serialize(SummaryRow {
            name: &report.name,
            mortgage_payment: money(summary.mortgage_payment),
            starting_payment: money(summary.starting_payment),
            final_payment: money(summary.final_payment),
            iterations: report.solve.iterations.len(),
            total_payment: money(summary.total_payment),
            total_household_cost: money(summary.total_household_cost),
            peak_per_person_share: money(summary.peak_per_person_share),
            final_balance: money(summary.final_balance),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioRunner;
    use crate::terms::Scenario;

    #[test]
    fn test_month_date_clamps_to_month_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(month_date(start, 0), Some(start));
        assert_eq!(month_date(start, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(month_date(start, 12), NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn test_schedule_file_name() {
        assert_eq!(schedule_file_name(0, "reference"), "000_reference.csv");
        assert_eq!(schedule_file_name(7, "short-term_2"), "007_short-term_2.csv");
        assert_eq!(schedule_file_name(12, "../a b/c"), "012____a_b_c.csv");

        // Duplicate names from different rows stay distinct
        assert_ne!(schedule_file_name(1, "dup"), schedule_file_name(2, "dup"));
    }

    #[test]
    fn test_schedule_csv_has_row_per_month() {
        let scenario = Scenario {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Default::default()
        };
        let report = ScenarioRunner::new().run(&scenario).unwrap();

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 361);
        assert_eq!(lines[0], "Month,Date,Balance,LoanPayment,MortgagePayment,PerPersonShare");
        assert!(lines[1].starts_with("0,2025-01-01,"));
        assert!(lines[13].starts_with("12,2026-01-01,"));
    }

    #[test]
    fn test_schedule_csv_without_start_date() {
        let report = ScenarioRunner::new().run(&Scenario::default()).unwrap();

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.lines().nth(1).unwrap().starts_with("0,,"));
    }

    #[test]
    fn test_summary_csv() {
        let report = ScenarioRunner::new().run(&Scenario::default()).unwrap();

        let mut buffer = Vec::new();
        write_summary_csv(&mut buffer, &[&report]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("default,4628.92,992.65,"));
    }
}
