//! Batch projections over many independent scenarios
//!
//! Scenarios are read from CSV, sanitised through [`InputBounds`], and
//! projected in parallel. Years within a scenario are sequential; only
//! whole scenarios run concurrently.

use crate::error::Result;
use crate::params::{InputBounds, ProjectionParameters, RawInputs};
use crate::projection::{ProjectionEngine, ProjectionSummary};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One CSV input row; every column except `name` is free text
#[derive(Debug, Clone, Deserialize)]
struct ScenarioRow {
    name: String,
    #[serde(default)]
    principal: String,
    #[serde(default)]
    annual_contribution: String,
    #[serde(default)]
    contribution_frequency: String,
    #[serde(default)]
    interest_rate: String,
    #[serde(default)]
    compounding_frequency: String,
    #[serde(default)]
    years: String,
}

impl ScenarioRow {
    fn into_raw(self) -> (String, RawInputs) {
        let raw = RawInputs {
            principal: self.principal,
            annual_contribution: self.annual_contribution,
            contribution_frequency: self.contribution_frequency,
            interest_rate: self.interest_rate,
            compounding_frequency: self.compounding_frequency,
            years: self.years,
        };
        (self.name, raw)
    }
}

/// A named, sanitised parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub parameters: ProjectionParameters,
}

/// Result row for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub years: u32,
    pub final_value: f64,
    pub total_deposited: f64,
    pub total_interest: f64,
}

impl ScenarioOutcome {
    fn new(scenario: &Scenario, summary: ProjectionSummary) -> Self {
        Self {
            name: scenario.name.clone(),
            years: scenario.parameters.years,
            final_value: summary.final_value,
            total_deposited: summary.total_deposited,
            total_interest: summary.total_interest,
        }
    }
}

/// Read scenarios from CSV with columns
/// `name,principal,annual_contribution,contribution_frequency,interest_rate,compounding_frequency,years`
pub fn load_scenarios<R: Read>(reader: R, bounds: &InputBounds) -> Result<Vec<Scenario>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for row in csv_reader.deserialize::<ScenarioRow>() {
        let (name, raw) = row?.into_raw();
        scenarios.push(Scenario {
            name,
            parameters: bounds.sanitize(&raw),
        });
    }
    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Project every scenario in parallel, preserving input order
pub fn run_scenarios(engine: &ProjectionEngine, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .par_iter()
        .map(|scenario| {
            let result = engine.project(&scenario.parameters);
            ScenarioOutcome::new(scenario, result.summary())
        })
        .collect()
}

pub fn write_outcomes<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }
    csv_writer.flush()?;
    Ok(())
}
