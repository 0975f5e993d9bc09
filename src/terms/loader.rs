//! Load scenarios from a JSON file or from a CSV file with one scenario per row

use super::{HouseholdTerms, InflationPolicy, LoanTerms, Scenario};
use crate::error::Result;
use chrono::NaiveDate;
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row for a batch scenario file
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "LoanPrincipal")]
    loan_principal: f64,
    #[serde(rename = "LoanRate")]
    loan_rate: f64,
    #[serde(rename = "LoanYears")]
    loan_years: u32,
    #[serde(rename = "MortgagePrincipal")]
    mortgage_principal: f64,
    #[serde(rename = "MortgageRate")]
    mortgage_rate: f64,
    #[serde(rename = "MortgageYears")]
    mortgage_years: u32,
    #[serde(rename = "Inflation")]
    inflation: f64,
    #[serde(rename = "Coupled")]
    coupled: bool,
    #[serde(rename = "People")]
    people: u32,
    #[serde(rename = "Utilities")]
    utilities: f64,
    #[serde(rename = "UtilityInflation")]
    utility_inflation: f64,
    #[serde(rename = "StartDate", default)]
    start_date: Option<NaiveDate>,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        Scenario {
            name: self.name,
            loan: LoanTerms::new(self.loan_principal, self.loan_rate, self.loan_years),
            mortgage: LoanTerms::new(self.mortgage_principal, self.mortgage_rate, self.mortgage_years),
            policy: InflationPolicy::new(self.inflation, self.coupled),
            household: HouseholdTerms::new(self.people, self.utilities, self.utility_inflation),
            start_date: self.start_date,
        }
    }
}

/// Load a single scenario from a JSON file; missing fields take their defaults
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let file = File::open(path)?;
    let scenario = serde_json::from_reader(BufReader::new(file))?;
    Ok(scenario)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const BATCH: &str = "\
Name,LoanPrincipal,LoanRate,LoanYears,MortgagePrincipal,MortgageRate,MortgageYears,Inflation,Coupled,People,Utilities,UtilityInflation,StartDate
base,454741.93,5,30,1015000,3.625,30,2,true,4,800,2,2025-01-01
flat,100000,0,10,200000,4,15,0,false,2,250,0,
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(BATCH.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let base = &scenarios[0];
        assert_eq!(base.name, "base");
        assert_eq!(base.loan, LoanTerms::new(454_741.93, 5.0, 30));
        assert!(base.policy.couple_to_mortgage_payment);
        assert_eq!(base.start_date, NaiveDate::from_ymd_opt(2025, 1, 1));

        let flat = &scenarios[1];
        assert_eq!(flat.household.num_people, 2);
        assert!(!flat.policy.couple_to_mortgage_payment);
        assert_eq!(flat.start_date, None);
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let bad = "\
Name,LoanPrincipal,LoanRate,LoanYears,MortgagePrincipal,MortgageRate,MortgageYears,Inflation,Coupled,People,Utilities,UtilityInflation,StartDate
base,lots,5,30,1015000,3.625,30,2,true,4,800,2,
";
        assert!(matches!(
            load_scenarios_from_reader(bad.as_bytes()),
            Err(ProjectionError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_json_file_is_io_error() {
        assert!(matches!(
            load_scenario("does/not/exist.json"),
            Err(ProjectionError::Io(_))
        ));
    }
}
