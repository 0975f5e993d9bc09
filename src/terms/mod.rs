//! Scenario parameters: the loan being solved, the mortgage it is coupled to,
//! the inflation policy and the household splitting the costs

mod data;
pub mod loader;

pub use data::{HouseholdTerms, InflationPolicy, LoanTerms, MAX_TERM_YEARS};
pub use loader::{load_scenario, load_scenarios, load_scenarios_from_reader};

use crate::annuity::fixed_annuity_payment;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything needed for one run of the projection pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label carried into reports
    #[serde(default = "default_name")]
    pub name: String,

    /// The inflation-escalating loan whose starting payment is solved for
    #[serde(default = "default_loan")]
    pub loan: LoanTerms,

    /// The fixed-payment mortgage
    #[serde(default = "default_mortgage")]
    pub mortgage: LoanTerms,

    #[serde(default = "default_policy")]
    pub policy: InflationPolicy,

    #[serde(default = "default_household")]
    pub household: HouseholdTerms,

    /// Calendar date of month 0, used only to label exported rows
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_name() -> String { "default".to_string() }
fn default_loan() -> LoanTerms { LoanTerms::new(454_741.93, 5.0, 30) }
fn default_mortgage() -> LoanTerms { LoanTerms::new(1_015_000.0, 3.625, 30) }
fn default_policy() -> InflationPolicy { InflationPolicy::new(2.0, true) }
fn default_household() -> HouseholdTerms { HouseholdTerms::new(4, 800.0, 2.0) }

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: default_name(),
            loan: default_loan(),
            mortgage: default_mortgage(),
            policy: default_policy(),
            household: default_household(),
            start_date: None,
        }
    }
}

impl Scenario {
    /// Validate every parameter record before the engine sees it
    pub fn validate(&self) -> Result<()> {
        self.loan.validate()?;
        self.mortgage.validate()?;
        self.policy.validate()?;
        self.household.validate()?;
        Ok(())
    }

    /// Fixed monthly payment on the mortgage
    pub fn mortgage_payment(&self) -> Result<f64> {
        self.mortgage.validate()?;
        Ok(fixed_annuity_payment(
            self.mortgage.principal,
            self.mortgage.annual_interest_rate_percent,
            self.mortgage.term_years,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_default_scenario_is_valid() {
        let scenario = Scenario::default();
        assert!(scenario.validate().is_ok());
        assert!(scenario.policy.couple_to_mortgage_payment);
        assert_eq!(scenario.loan.total_months(), 360);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "name": "two people", "household": { "num_people": 2, "monthly_utilities": 300.0, "utility_inflation_rate_percent": 3.0 } }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();

        assert_eq!(scenario.name, "two people");
        assert_eq!(scenario.household.num_people, 2);
        assert_eq!(scenario.loan, default_loan());
        assert_eq!(scenario.mortgage, default_mortgage());
        assert_eq!(scenario.start_date, None);
    }

    #[test]
    fn test_invalid_mortgage_rejected() {
        let scenario = Scenario {
            mortgage: LoanTerms::new(1_015_000.0, 3.625, 0),
            ..Default::default()
        };
        assert!(matches!(
            scenario.mortgage_payment(),
            Err(ProjectionError::InvalidParameter { field: "term_years", .. })
        ));
    }
}
