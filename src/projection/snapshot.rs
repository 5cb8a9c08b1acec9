use crate::params::ProjectionParameters;
use serde::{Deserialize, Serialize};

/// One year's end-of-year projection record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySnapshot {
    pub year: u32,
    pub investment_value: f64,
    pub interest_earned: f64,
    pub total_deposited: f64,
    /// Nominal contribution for the year (0 for year 0)
    pub annual_contribution: f64,
}

/// Headline figures derived from the last snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_value: f64,
    pub total_deposited: f64,
    pub total_interest: f64,
}

impl ProjectionSummary {
    /// Fraction of the final value that is interest
    pub fn interest_share(&self) -> f64 {
        if self.final_value > 0.0 {
            self.total_interest / self.final_value
        } else {
            0.0
        }
    }
}

impl From<&YearlySnapshot> for ProjectionSummary {
    fn from(snapshot: &YearlySnapshot) -> Self {
        Self {
            final_value: snapshot.investment_value,
            total_deposited: snapshot.total_deposited,
            total_interest: snapshot.interest_earned,
        }
    }
}

/// Parameters together with the snapshot sequence they produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub parameters: ProjectionParameters,
    pub snapshots: Vec<YearlySnapshot>,
}

impl ProjectionResult {
    /// Year-`years` snapshot (year 0 when the horizon is zero)
    ///
    /// `None` only for a hand-built or deserialised result with no rows;
    /// `project()` always emits year 0.
    pub fn final_snapshot(&self) -> Option<&YearlySnapshot> {
        self.snapshots.last()
    }

    /// Headline figures; all zero when there are no snapshots
    pub fn summary(&self) -> ProjectionSummary {
        self.final_snapshot().map(ProjectionSummary::from).unwrap_or_default()
    }

    /// Snapshots after the opening year
    pub fn growth_years(&self) -> &[YearlySnapshot] {
        self.snapshots.get(1..).unwrap_or(&[])
    }
}
