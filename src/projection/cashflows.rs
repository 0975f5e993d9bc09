//! Output structures for a loan projection

use serde::{Deserialize, Serialize};

/// One month of the projected schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Zero-based month index
    pub month: u32,

    /// Balance after this month's payment
    pub balance: f64,

    /// Loan payment made this month
    pub monthly_payment: f64,

    /// Household cost per person this month
    pub per_person_share: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Starting monthly payment the schedule was run from
    pub starting_payment: f64,

    /// Mortgage payment the schedule was coupled to
    pub mortgage_payment: f64,

    /// Number of people the per-person share was split across
    pub num_people: u32,

    /// Monthly points in chronological order
    pub series: Vec<ProjectionPoint>,

    /// Sum of loan payments over the series
    pub total_payment: f64,
}

impl ProjectionResult {
    pub fn new(starting_payment: f64, mortgage_payment: f64, num_people: u32, months: u32) -> Self {
        Self {
            starting_payment,
            mortgage_payment,
            num_people,
            series: Vec::with_capacity(months as usize),
            total_payment: 0.0,
        }
    }

    /// Append the next month and accumulate its payment
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.total_payment += point.monthly_payment;
        self.series.push(point);
    }

    /// Balance remaining after the last month
    pub fn final_balance(&self) -> f64 {
        self.series.last().map(|p| p.balance).unwrap_or(0.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_household_cost: f64 = self
            .series
            .iter()
            .map(|p| p.per_person_share * self.num_people as f64)
            .sum();
        let peak_per_person_share = self
            .series
            .iter()
            .map(|p| p.per_person_share)
            .fold(0.0, f64::max);

        ProjectionSummary {
            total_months: self.series.len() as u32,
            starting_payment: self.starting_payment,
            final_payment: self.series.last().map(|p| p.monthly_payment).unwrap_or(0.0),
            mortgage_payment: self.mortgage_payment,
            total_payment: self.total_payment,
            total_household_cost,
            peak_per_person_share,
            final_balance: self.final_balance(),
        }
    }

    /// Roll the monthly series up into one row per year
    pub fn annual_rows(&self) -> Vec<AnnualRow> {
        self.series
            .chunks(12)
            .enumerate()
            .map(|(year, months)| AnnualRow {
                year: year as u32,
                loan_payments: months.iter().map(|p| p.monthly_payment).sum(),
                mortgage_payments: self.mortgage_payment * months.len() as f64,
                per_person_cost: months.iter().map(|p| p.per_person_share).sum(),
                end_balance: months.last().map(|p| p.balance).unwrap_or(0.0),
            })
            .collect()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub starting_payment: f64,
    pub final_payment: f64,
    pub mortgage_payment: f64,
    pub total_payment: f64,
    pub total_household_cost: f64,
    pub peak_per_person_share: f64,
    pub final_balance: f64,
}

/// Totals for one year of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRow {
    /// Zero-based year index
    pub year: u32,
    pub loan_payments: f64,
    pub mortgage_payments: f64,
    pub per_person_cost: f64,
    pub end_balance: f64,
}
