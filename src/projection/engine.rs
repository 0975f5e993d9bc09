//! Chronological projection of the escalating loan from its solved starting payment

use super::cashflows::{ProjectionPoint, ProjectionResult};
use super::household::individual_share;
use super::solver::{SolverConfig, StartingPaymentSolver};
use super::state::{MonthlyRecurrence, RecurrenceState};
use crate::error::{ProjectionError, Result};
use crate::terms::{HouseholdTerms, InflationPolicy, LoanTerms};
use log::debug;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionConfig {
    /// Search settings for the starting payment
    pub solver: SolverConfig,
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Solve for the starting payment, then project the full term from it
    pub fn project(
        &self,
        loan: &LoanTerms,
        policy: &InflationPolicy,
        mortgage_payment: f64,
        household: &HouseholdTerms,
    ) -> Result<ProjectionResult> {
        let outcome = StartingPaymentSolver::new(self.config.solver).solve(loan, policy, mortgage_payment)?;
        self.project_from(loan, policy, mortgage_payment, household, outcome.starting_payment)
    }

    /// Project the full term from a known starting payment
    pub fn project_from(
        &self,
        loan: &LoanTerms,
        policy: &InflationPolicy,
        mortgage_payment: f64,
        household: &HouseholdTerms,
        starting_payment: f64,
    ) -> Result<ProjectionResult> {
        loan.validate()?;
        policy.validate()?;
        household.validate()?;
        if !starting_payment.is_finite() {
            return Err(ProjectionError::invalid("starting_payment", "must be finite"));
        }

        let months = loan.total_months();
        let recurrence = MonthlyRecurrence::new(loan, policy, mortgage_payment);
        let mut result = ProjectionResult::new(starting_payment, mortgage_payment, household.num_people, months);
        let mut state = RecurrenceState::new(loan.principal, starting_payment);

        for month in 0..months {
            state = recurrence.advance(state, month);

            result.add_point(ProjectionPoint {
                month,
                balance: state.balance,
                monthly_payment: state.monthly_payment,
                per_person_share: individual_share(state.monthly_payment, month, household, mortgage_payment),
            });
        }

        debug!(
            "projected {} months from starting payment {:.4}, final balance {:.6}",
            months,
            starting_payment,
            result.final_balance()
        );

        Ok(result)
    }
}

/// Solve and project with the default solver settings
pub fn project_schedule(
    loan: &LoanTerms,
    policy: &InflationPolicy,
    mortgage_payment: f64,
    household: &HouseholdTerms,
) -> Result<ProjectionResult> {
    ProjectionEngine::default().project(loan, policy, mortgage_payment, household)
}
