//! Loan, inflation and household parameter records

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Longest loan term accepted, in years
pub const MAX_TERM_YEARS: u32 = 100;

/// Terms of a fixed-rate amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent (5.0 means 5%)
    pub annual_interest_rate_percent: f64,

    /// Term of the loan in whole years
    pub term_years: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_interest_rate_percent: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_interest_rate_percent,
            term_years,
        }
    }

    /// Number of monthly payments over the full term
    pub fn total_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    /// Monthly interest rate as a decimal; zero for non-positive annual rates
    pub fn monthly_rate(&self) -> f64 {
        if self.annual_interest_rate_percent <= 0.0 {
            0.0
        } else {
            self.annual_interest_rate_percent / 100.0 / 12.0
        }
    }

    /// Reject terms the engine cannot amortize
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(ProjectionError::invalid(
                "principal",
                format!("must be a positive amount, got {}", self.principal),
            ));
        }
        if !self.annual_interest_rate_percent.is_finite() {
            return Err(ProjectionError::invalid(
                "annual_interest_rate_percent",
                "must be finite",
            ));
        }
        if self.term_years == 0 {
            return Err(ProjectionError::invalid("term_years", "must be at least 1"));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(ProjectionError::invalid(
                "term_years",
                format!("must be at most {}, got {}", MAX_TERM_YEARS, self.term_years),
            ));
        }
        Ok(())
    }
}

/// How a loan's own payment escalates at each year boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationPolicy {
    /// Annual payment growth in percent
    pub annual_inflation_rate_percent: f64,

    /// Grow the loan payment plus mortgage payment together, so that their
    /// sum (rather than the loan payment alone) tracks the inflation rate
    pub couple_to_mortgage_payment: bool,
}

impl InflationPolicy {
    pub fn new(annual_inflation_rate_percent: f64, couple_to_mortgage_payment: bool) -> Self {
        Self {
            annual_inflation_rate_percent,
            couple_to_mortgage_payment,
        }
    }

    /// Yearly growth factor applied at each escalation
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.annual_inflation_rate_percent / 100.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.annual_inflation_rate_percent.is_finite() {
            return Err(ProjectionError::invalid(
                "annual_inflation_rate_percent",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Household sharing the combined monthly costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseholdTerms {
    /// Number of people splitting the costs
    pub num_people: u32,

    /// Utilities cost per month in the first year
    pub monthly_utilities: f64,

    /// Annual utilities growth in percent
    pub utility_inflation_rate_percent: f64,
}

impl HouseholdTerms {
    pub fn new(num_people: u32, monthly_utilities: f64, utility_inflation_rate_percent: f64) -> Self {
        Self {
            num_people,
            monthly_utilities,
            utility_inflation_rate_percent,
        }
    }

    /// Monthly utilities for the year containing `month`, compounded from the base
    pub fn utilities_for_month(&self, month: u32) -> f64 {
        let year = month / 12;
        self.monthly_utilities * (1.0 + self.utility_inflation_rate_percent / 100.0).powi(year as i32)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_people == 0 {
            return Err(ProjectionError::invalid("num_people", "must be at least 1"));
        }
        if !self.monthly_utilities.is_finite() || self.monthly_utilities < 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_utilities",
                format!("must be a non-negative amount, got {}", self.monthly_utilities),
            ));
        }
        if !self.utility_inflation_rate_percent.is_finite() {
            return Err(ProjectionError::invalid(
                "utility_inflation_rate_percent",
                "must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate() {
        assert_relative_eq!(LoanTerms::new(1000.0, 6.0, 1).monthly_rate(), 0.005);
        assert_eq!(LoanTerms::new(1000.0, 0.0, 1).monthly_rate(), 0.0);
        assert_eq!(LoanTerms::new(1000.0, -2.0, 1).monthly_rate(), 0.0);
    }

    #[test]
    fn test_loan_validation() {
        assert!(LoanTerms::new(1000.0, 5.0, 30).validate().is_ok());
        assert!(matches!(
            LoanTerms::new(1000.0, 5.0, 0).validate(),
            Err(ProjectionError::InvalidParameter { field: "term_years", .. })
        ));
        assert!(matches!(
            LoanTerms::new(-1.0, 5.0, 30).validate(),
            Err(ProjectionError::InvalidParameter { field: "principal", .. })
        ));
        assert!(LoanTerms::new(f64::NAN, 5.0, 30).validate().is_err());
        assert!(LoanTerms::new(1000.0, f64::INFINITY, 30).validate().is_err());
    }

    #[test]
    fn test_oversized_term_rejected() {
        assert!(LoanTerms::new(1000.0, 5.0, MAX_TERM_YEARS).validate().is_ok());
        assert!(matches!(
            LoanTerms::new(1000.0, 5.0, MAX_TERM_YEARS + 1).validate(),
            Err(ProjectionError::InvalidParameter { field: "term_years", .. })
        ));

        // Would overflow the month count if it got past validation
        let huge = LoanTerms::new(1000.0, 5.0, 400_000_000);
        assert!(matches!(
            huge.validate(),
            Err(ProjectionError::InvalidParameter { field: "term_years", .. })
        ));
        assert_eq!(huge.total_months(), u32::MAX);
    }

    #[test]
    fn test_household_validation() {
        assert!(HouseholdTerms::new(4, 800.0, 2.0).validate().is_ok());
        assert!(HouseholdTerms::new(1, 0.0, 0.0).validate().is_ok());
        assert!(matches!(
            HouseholdTerms::new(0, 800.0, 2.0).validate(),
            Err(ProjectionError::InvalidParameter { field: "num_people", .. })
        ));
        assert!(HouseholdTerms::new(2, -5.0, 2.0).validate().is_err());
    }

    #[test]
    fn test_utilities_step_once_per_year() {
        let household = HouseholdTerms::new(4, 800.0, 10.0);
        assert_relative_eq!(household.utilities_for_month(0), 800.0);
        assert_relative_eq!(household.utilities_for_month(11), 800.0);
        assert_relative_eq!(household.utilities_for_month(12), 880.0, epsilon = 1e-9);
        assert_relative_eq!(household.utilities_for_month(35), 968.0, epsilon = 1e-9);
    }
}
