//! Bisection search for the starting payment that fully amortizes an
//! inflation-escalating loan over its term

use super::state::{MonthlyRecurrence, RecurrenceState};
use crate::annuity::fixed_annuity_payment;
use crate::error::{ProjectionError, Result};
use crate::terms::{InflationPolicy, LoanTerms};
use log::{info, trace, warn};

/// Default residual balance accepted as fully amortized
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Default bisection iteration budget
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the starting payment search
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Largest absolute final balance accepted as converged
    pub tolerance: f64,

    /// Number of full-term simulations before giving up
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// One step of the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveIteration {
    pub iteration: u32,
    pub lower_bound: f64,
    /// `None` until a candidate has over-paid the loan
    pub upper_bound: Option<f64>,
    pub candidate_payment: f64,
    pub final_balance: f64,
}

/// A converged search
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Starting monthly payment that drives the balance to ~0
    pub starting_payment: f64,

    /// Balance left after the full term at `starting_payment`
    pub final_balance: f64,

    /// Every candidate tried, in order
    pub iterations: Vec<SolveIteration>,
}

/// Finds the starting payment of an escalating loan by bisection.
///
/// Relies on the final balance being strictly decreasing in the starting
/// payment. The upper bound starts unset and the candidate doubles until a
/// candidate over-pays.
#[derive(Debug, Clone, Default)]
pub struct StartingPaymentSolver {
    config: SolverConfig,
}

impl StartingPaymentSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Balance left after simulating the full term from `starting_payment`
    pub fn final_balance(
        loan: &LoanTerms,
        policy: &InflationPolicy,
        mortgage_payment: f64,
        starting_payment: f64,
    ) -> f64 {
        let recurrence = MonthlyRecurrence::new(loan, policy, mortgage_payment);
        let start = RecurrenceState::new(loan.principal, starting_payment);
        recurrence.run(start, loan.total_months()).balance
    }

    pub fn solve(
        &self,
        loan: &LoanTerms,
        policy: &InflationPolicy,
        mortgage_payment: f64,
    ) -> Result<SolveOutcome> {
        loan.validate()?;
        policy.validate()?;
        if !mortgage_payment.is_finite() {
            return Err(ProjectionError::invalid("mortgage_payment", "must be finite"));
        }

        let mut mid = fixed_annuity_payment(
            loan.principal,
            loan.annual_interest_rate_percent,
            loan.term_years,
        );
        let mut low = 0.0;
        let mut high: Option<f64> = None;
        let mut iterations = Vec::with_capacity(self.config.max_iterations as usize);
        let mut last_balance = f64::NAN;

        for it in 1..=self.config.max_iterations {
            let balance = Self::final_balance(loan, policy, mortgage_payment, mid);
            last_balance = balance;

            iterations.push(SolveIteration {
                iteration: it,
                lower_bound: low,
                upper_bound: high,
                candidate_payment: mid,
                final_balance: balance,
            });
            trace!(
                "iteration {}, candidate {:.6}, final balance {:.6}",
                it,
                mid,
                balance
            );

            if balance.abs() < self.config.tolerance {
                info!(
                    "starting payment {:.4} converged after {} iterations",
                    mid, it
                );
                return Ok(SolveOutcome {
                    starting_payment: mid,
                    final_balance: balance,
                    iterations,
                });
            }

            if balance > 0.0 {
                // Under-paid
                low = mid;
                mid = match high {
                    Some(high) => (mid + high) / 2.0,
                    None => mid * 2.0,
                };
            } else {
                high = Some(mid);
                mid = (mid + low) / 2.0;
            }
        }

        warn!(
            "starting payment search exhausted {} iterations, last balance {:.4}",
            self.config.max_iterations, last_balance
        );
        Err(ProjectionError::NotConverged {
            iterations: self.config.max_iterations,
            last_balance,
        })
    }
}

/// Starting monthly payment for `loan` under `policy`, using the default
/// tolerance and iteration budget
pub fn solve_starting_payment(
    loan: &LoanTerms,
    policy: &InflationPolicy,
    mortgage_payment: f64,
) -> Result<f64> {
    StartingPaymentSolver::default()
        .solve(loan, policy, mortgage_payment)
        .map(|outcome| outcome.starting_payment)
}
