//! Scenario runner: the full pipeline from parameter records to a projected schedule
//!
//! Callers hold an immutable [`Scenario`] and invoke [`ScenarioRunner::run`]
//! whenever they want fresh numbers. Nothing is cached between runs.

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, SolveOutcome, StartingPaymentSolver};
use crate::terms::Scenario;
use chrono::NaiveDate;
use log::debug;

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: String,

    /// Fixed monthly mortgage payment
    pub mortgage_payment: f64,

    /// Starting payment search, including its iteration trace
    pub solve: SolveOutcome,

    /// Month-by-month schedule
    pub result: ProjectionResult,

    /// Calendar date of month 0, if the scenario carries one
    pub start_date: Option<NaiveDate>,
}

/// Runs scenarios through annuity, solver and projector
///
/// # Example
/// ```
/// use loan_projection::{Scenario, ScenarioRunner};
///
/// let report = ScenarioRunner::new().run(&Scenario::default()).unwrap();
/// assert_eq!(report.result.series.len(), 360);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        scenario.validate()?;

        let mortgage_payment = scenario.mortgage_payment()?;
        debug!("scenario '{}': mortgage payment {:.4}", scenario.name, mortgage_payment);

        let solve = StartingPaymentSolver::new(self.config.solver).solve(
            &scenario.loan,
            &scenario.policy,
            mortgage_payment,
        )?;

        let result = ProjectionEngine::new(self.config).project_from(
            &scenario.loan,
            &scenario.policy,
            mortgage_payment,
            &scenario.household,
            solve.starting_payment,
        )?;

        Ok(ScenarioReport {
            name: scenario.name.clone(),
            mortgage_payment,
            solve,
            result,
            start_date: scenario.start_date,
        })
    }

    /// Run every scenario; one failing scenario does not stop the rest
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ScenarioReport>> {
        scenarios.iter().map(|s| self.run(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::terms::{HouseholdTerms, InflationPolicy, LoanTerms};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_scenario_report() {
        let report = ScenarioRunner::new().run(&Scenario::default()).unwrap();

        assert_eq!(report.name, "default");
        assert_abs_diff_eq!(report.mortgage_payment, 4628.92, epsilon = 0.01);
        assert_eq!(report.result.starting_payment, report.solve.starting_payment);
        assert!(report.result.final_balance().abs() < 0.01);
        assert_eq!(report.result.series.len(), 360);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let runner = ScenarioRunner::new();
        let scenario = Scenario::default();

        let first = runner.run(&scenario).unwrap();
        let second = runner.run(&scenario).unwrap();
        assert_eq!(first.result, second.result);
        assert_eq!(first.solve.iterations, second.solve.iterations);
    }

    #[test]
    fn test_batch_keeps_going_after_failure() {
        let scenarios = vec![
            Scenario::default(),
            Scenario {
                name: "nobody home".to_string(),
                household: HouseholdTerms::new(0, 800.0, 2.0),
                ..Default::default()
            },
            Scenario {
                name: "small loan".to_string(),
                loan: LoanTerms::new(1000.0, 5.0, 30),
                policy: InflationPolicy::new(5.0, true),
                ..Default::default()
            },
            Scenario {
                name: "short".to_string(),
                loan: LoanTerms::new(30_000.0, 7.5, 5),
                policy: InflationPolicy::new(3.0, false),
                ..Default::default()
            },
        ];

        let results = ScenarioRunner::new().run_batch(&scenarios);
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ProjectionError::InvalidParameter { field: "num_people", .. })));
        assert!(matches!(results[2], Err(ProjectionError::NotConverged { .. })));
        assert_eq!(results[3].as_ref().unwrap().result.series.len(), 60);
    }
}
