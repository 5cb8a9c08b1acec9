use super::{CompoundingFrequency, ContributionFrequency};
use serde::{Deserialize, Serialize};

/// Inputs to a single projection
///
/// Values are expected to be sanitised already (see [`super::InputBounds`]);
/// the engine does not validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParameters {
    /// Initial lump sum
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Nominal yearly addition, split evenly across contribution periods
    #[serde(default = "default_annual_contribution")]
    pub annual_contribution: f64,

    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,

    /// Annual rate as a percentage (8.0 = 8%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    #[serde(default)]
    pub compounding_frequency: CompoundingFrequency,

    /// Projection horizon in whole years
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_principal() -> f64 { 100_000.0 }
fn default_annual_contribution() -> f64 { 60_000.0 }
fn default_interest_rate() -> f64 { 8.0 }
fn default_years() -> u32 { 10 }

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            annual_contribution: default_annual_contribution(),
            contribution_frequency: ContributionFrequency::Monthly,
            interest_rate: default_interest_rate(),
            compounding_frequency: CompoundingFrequency::Quarterly,
            years: default_years(),
        }
    }
}

impl ProjectionParameters {
    /// Interest rate as a per-unit fraction (0.08 for 8%)
    pub fn rate_decimal(&self) -> f64 {
        self.interest_rate / 100.0
    }

    /// Amount deposited at each contribution period
    pub fn contribution_per_period(&self) -> f64 {
        self.annual_contribution / self.contribution_frequency.periods_per_year() as f64
    }

    /// Compounding steps between consecutive deposits (may be fractional)
    pub fn periods_per_contribution(&self) -> f64 {
        self.compounding_frequency.periods_per_year() as f64
            / self.contribution_frequency.periods_per_year() as f64
    }
}
