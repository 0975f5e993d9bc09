//! Month-to-month recurrence for an inflation-escalating loan

use crate::terms::{InflationPolicy, LoanTerms};

/// Balance and payment carried from one simulated month to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecurrenceState {
    /// Outstanding balance after the month's payment
    pub balance: f64,

    /// Payment made this month
    pub monthly_payment: f64,
}

impl RecurrenceState {
    pub fn new(balance: f64, monthly_payment: f64) -> Self {
        Self {
            balance,
            monthly_payment,
        }
    }
}

/// Update rule for one loan, with its rate, inflation policy and the mortgage
/// payment fixed for the whole computation
#[derive(Debug, Clone, Copy)]
pub struct MonthlyRecurrence {
    monthly_rate: f64,
    policy: InflationPolicy,
    mortgage_payment: f64,
}

impl MonthlyRecurrence {
    pub fn new(loan: &LoanTerms, policy: &InflationPolicy, mortgage_payment: f64) -> Self {
        Self {
            monthly_rate: loan.monthly_rate(),
            policy: *policy,
            mortgage_payment,
        }
    }

    /// Whether the payment escalates in this (zero-based) month
    pub fn is_escalation_month(month: u32) -> bool {
        month > 0 && month % 12 == 0
    }

    /// Advance the state by one month: accrue interest, escalate at year
    /// boundaries, then pay
    pub fn advance(&self, state: RecurrenceState, month: u32) -> RecurrenceState {
        let mut balance = state.balance * (1.0 + self.monthly_rate);
        let mut payment = state.monthly_payment;

        if Self::is_escalation_month(month) {
            // Coupled: the loan payment plus the mortgage payment grows at the
            // inflation rate, the loan payment absorbs the difference
            if self.policy.couple_to_mortgage_payment {
                payment += self.mortgage_payment;
            }
            payment *= self.policy.growth_factor();
            if self.policy.couple_to_mortgage_payment {
                payment -= self.mortgage_payment;
            }
        }

        balance -= payment;

        RecurrenceState::new(balance, payment)
    }

    /// Run `months` steps from the given start and return the final state
    pub fn run(&self, start: RecurrenceState, months: u32) -> RecurrenceState {
        (0..months).fold(start, |state, month| self.advance(state, month))
    }
}
