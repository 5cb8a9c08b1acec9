//! Year-by-year compound growth projection

use super::snapshot::{ProjectionResult, YearlySnapshot};
use super::state::Accumulator;
use crate::params::ProjectionParameters;
use serde::{Deserialize, Serialize};

/// How compounding is applied between two deposits when the number of
/// compounding periods per deposit is not a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPolicy {
    /// Apply the periodic rate `ceil(compounds / contributions)` times after
    /// each deposit. Reproduces the calculator's published figures, e.g.
    /// quarterly compounding with monthly deposits credits a full quarter's
    /// rate every month.
    #[default]
    Ceil,
    /// Apply `(1 + r/n)^(compounds / contributions)` after each deposit so a
    /// year always grows by `(1 + r/n)^n`
    Fractional,
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default)]
    pub step_policy: StepPolicy,
}

/// Growth applied after each deposit, resolved once per projection
#[derive(Debug, Clone, Copy)]
enum PeriodGrowth {
    Steps { factor: f64, steps: u32 },
    Multiplier(f64),
}

impl PeriodGrowth {
    fn resolve(policy: StepPolicy, params: &ProjectionParameters) -> Self {
        let compounds = params.compounding_frequency.periods_per_year() as f64;
        let factor = 1.0 + params.rate_decimal() / compounds;
        let ratio = params.periods_per_contribution();
        match policy {
            StepPolicy::Ceil => PeriodGrowth::Steps {
                factor,
                steps: ratio.ceil() as u32,
            },
            StepPolicy::Fractional => PeriodGrowth::Multiplier(factor.powf(ratio)),
        }
    }

    fn apply(self, acc: Accumulator) -> Accumulator {
        match self {
            PeriodGrowth::Steps { factor, steps } => acc.compound_steps(factor, steps),
            PeriodGrowth::Multiplier(m) => acc.grow(m),
        }
    }
}

/// Runs projections for a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project `params` from year 0 through `params.years`
    ///
    /// Each year deposits `annual_contribution / contributions_per_year` at
    /// every contribution period and compounds after each deposit. Always
    /// returns `years + 1` snapshots.
    pub fn project(&self, params: &ProjectionParameters) -> ProjectionResult {
        let growth = PeriodGrowth::resolve(self.config.step_policy, params);
        let deposits_per_year = params.contribution_frequency.periods_per_year();
        let deposit = params.contribution_per_period();

        let opening = Accumulator::opening(params.principal);
        let mut snapshots = Vec::with_capacity(params.years as usize + 1);
        snapshots.push(YearlySnapshot {
            year: 0,
            investment_value: opening.investment_value,
            interest_earned: 0.0,
            total_deposited: opening.total_deposited,
            annual_contribution: 0.0,
        });

        let closing = (1..=params.years).fold(opening, |acc, year| {
            let acc = (0..deposits_per_year)
                .fold(acc, |acc, _| growth.apply(acc.contribute(deposit)));
            snapshots.push(YearlySnapshot {
                year,
                investment_value: acc.investment_value,
                interest_earned: acc.interest_earned(),
                total_deposited: acc.total_deposited,
                annual_contribution: params.annual_contribution,
            });
            acc
        });

        log::debug!(
            "Projected {} years ({:?}, {} x {}): final value {:.2}",
            params.years,
            self.config.step_policy,
            params.contribution_frequency,
            params.compounding_frequency,
            closing.investment_value
        );

        ProjectionResult {
            parameters: params.clone(),
            snapshots,
        }
    }
}

/// Project with the default configuration
pub fn project(params: &ProjectionParameters) -> ProjectionResult {
    ProjectionEngine::default().project(params)
}
