//! Per-person split of the household's monthly costs

use crate::terms::HouseholdTerms;

/// Cost per person in `month`: loan payment, utilities inflated to that
/// month's year, and the mortgage payment, split evenly
pub fn individual_share(
    loan_monthly_payment: f64,
    month: u32,
    household: &HouseholdTerms,
    mortgage_payment: f64,
) -> f64 {
    let total = loan_monthly_payment + household.utilities_for_month(month) + mortgage_payment;
    total / household.num_people as f64
}
