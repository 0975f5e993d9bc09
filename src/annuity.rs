//! Closed-form payment for a fixed-rate amortizing loan

/// Fixed monthly payment that fully amortizes `principal` over `term_years`.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `annual_rate_percent` - Annual interest rate in percent (e.g., 6.0 for 6%)
/// * `term_years` - Term in years; callers validate it is non-zero
///
/// Non-positive rates fall back to straight-line repayment with no interest.
pub fn fixed_annuity_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let n = term_years as f64 * 12.0;

    if annual_rate_percent <= 0.0 {
        return principal / n;
    }

    let i = annual_rate_percent / 100.0 / 12.0;
    principal * i / (1.0 - (1.0 + i).powf(-n))
}
