//! Recurrence, solver and projection engine for the escalating loan

mod state;
mod solver;
mod engine;
mod household;
mod cashflows;

pub use state::{MonthlyRecurrence, RecurrenceState};
pub use solver::{
    solve_starting_payment, SolveIteration, SolveOutcome, SolverConfig, StartingPaymentSolver,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
pub use engine::{project_schedule, ProjectionConfig, ProjectionEngine};
pub use household::individual_share;
pub use cashflows::{AnnualRow, ProjectionPoint, ProjectionResult, ProjectionSummary};
