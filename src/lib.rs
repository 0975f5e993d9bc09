//! Loan Projection - Projection engine for inflation-escalating loans
//!
//! This library provides:
//! - Fixed annuity payments for standard amortizing loans
//! - A starting payment solver for loans whose payment escalates yearly,
//!   optionally coupled to a fixed mortgage payment
//! - Month-by-month schedules with a per-person household cost split
//! - Scenario loading and CSV export

pub mod error;
pub mod annuity;
pub mod terms;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use annuity::fixed_annuity_payment;
pub use terms::{HouseholdTerms, InflationPolicy, LoanTerms, Scenario};
pub use projection::{
    individual_share, project_schedule, solve_starting_payment, ProjectionPoint, ProjectionResult,
};
pub use scenario::{ScenarioReport, ScenarioRunner};
