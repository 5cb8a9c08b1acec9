//! Input boundary: turn raw user entry into projection parameters
//!
//! Mirrors what the calculator form does before every recalculation:
//! non-numeric amounts become zero, the rate and horizon are clamped to
//! the slider ranges, and frequency labels are resolved leniently.

use super::{CompoundingFrequency, ContributionFrequency, ProjectionParameters};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Unparsed form entry, one string per field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    pub principal: String,
    pub annual_contribution: String,
    pub contribution_frequency: String,
    pub interest_rate: String,
    pub compounding_frequency: String,
    pub years: String,
}

/// Allowed ranges for the rate and horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    /// Lowest selectable rate, in percent
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,

    /// Highest selectable rate, in percent
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,

    /// Slider increment in percentage points; must be 1/k for integer k
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,

    #[serde(default = "default_min_years")]
    pub min_years: u32,

    #[serde(default = "default_max_years")]
    pub max_years: u32,
}

fn default_min_rate() -> f64 { 1.0 }
fn default_max_rate() -> f64 { 20.0 }
fn default_rate_step() -> f64 { 0.1 }
fn default_min_years() -> u32 { 1 }
fn default_max_years() -> u32 { 40 }

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            rate_step: default_rate_step(),
            min_years: default_min_years(),
            max_years: default_max_years(),
        }
    }
}

impl InputBounds {
    /// Reject ranges the clamps cannot honour
    ///
    /// A zero `rate_step` disables snapping; otherwise it has to divide one
    /// percentage point evenly (0.1, 0.25, 0.5, 1).
    pub fn validate(&self) -> Result<()> {
        if !self.min_rate.is_finite() || !self.max_rate.is_finite() {
            return Err(invalid(format!(
                "rate bounds must be finite (min_rate {}, max_rate {})",
                self.min_rate, self.max_rate
            )));
        }
        if self.min_rate > self.max_rate {
            return Err(invalid(format!(
                "min_rate {} exceeds max_rate {}",
                self.min_rate, self.max_rate
            )));
        }
        if self.min_years > self.max_years {
            return Err(invalid(format!(
                "min_years {} exceeds max_years {}",
                self.min_years, self.max_years
            )));
        }
        if !self.rate_step.is_finite() || self.rate_step < 0.0 {
            return Err(invalid(format!("rate_step {} is not a valid step", self.rate_step)));
        }
        if self.rate_step > 0.0 {
            let steps_per_point = (1.0 / self.rate_step).round();
            if steps_per_point < 1.0 || (steps_per_point * self.rate_step - 1.0).abs() > 1e-9 {
                return Err(invalid(format!(
                    "rate_step {} does not divide one percentage point evenly",
                    self.rate_step
                )));
            }
        }
        Ok(())
    }

    /// Build parameters from raw form entry; never fails
    pub fn sanitize(&self, raw: &RawInputs) -> ProjectionParameters {
        let interest_rate = parse_number(&raw.interest_rate)
            .map(|r| self.clamp_rate(r))
            .unwrap_or(self.min_rate);
        let years = parse_number(&raw.years)
            .map(|y| self.clamp_years(y))
            .unwrap_or(self.min_years);

        ProjectionParameters {
            principal: parse_amount(&raw.principal),
            annual_contribution: parse_amount(&raw.annual_contribution),
            contribution_frequency: ContributionFrequency::from_label_or_default(
                &raw.contribution_frequency,
            ),
            interest_rate,
            compounding_frequency: CompoundingFrequency::from_label_or_default(
                &raw.compounding_frequency,
            ),
            years,
        }
    }

    /// Apply the same normalisation to already-numeric parameters
    pub fn clamp(&self, params: ProjectionParameters) -> ProjectionParameters {
        ProjectionParameters {
            principal: non_negative(params.principal),
            annual_contribution: non_negative(params.annual_contribution),
            interest_rate: if params.interest_rate.is_finite() {
                self.clamp_rate(params.interest_rate)
            } else {
                self.min_rate
            },
            years: params.years.max(self.min_years).min(self.max_years),
            ..params
        }
    }

    /// Clamp to `[min_rate, max_rate]` and snap to the slider step
    pub fn clamp_rate(&self, rate: f64) -> f64 {
        let clamped = rate.max(self.min_rate).min(self.max_rate);
        if self.rate_step <= 0.0 {
            return clamped;
        }
        // 0.1 snaps via *10/10 so 7.3 stays 7.3 rather than 73 * 0.1
        let steps_per_point = (1.0 / self.rate_step).round();
        let snapped = (clamped * steps_per_point).round() / steps_per_point;
        snapped.max(self.min_rate).min(self.max_rate)
    }

    pub fn clamp_years(&self, years: f64) -> u32 {
        let rounded = years.round().max(self.min_years as f64).min(self.max_years as f64);
        rounded as u32
    }
}

fn invalid(message: String) -> ProjectionError {
    ProjectionError::InvalidConfig { message }
}

/// Parse a number, tolerating surrounding whitespace and digit-group commas
fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Amounts default to zero when missing, malformed or negative
fn parse_amount(s: &str) -> f64 {
    match parse_number(s) {
        Some(v) => non_negative(v),
        None => {
            if !s.trim().is_empty() {
                log::warn!("Ignoring non-numeric amount '{}'", s);
            }
            0.0
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(principal: &str, contribution: &str, rate: &str, years: &str) -> RawInputs {
        RawInputs {
            principal: principal.to_string(),
            annual_contribution: contribution.to_string(),
            contribution_frequency: "monthly".to_string(),
            interest_rate: rate.to_string(),
            compounding_frequency: "quarterly".to_string(),
            years: years.to_string(),
        }
    }

    #[test]
    fn test_well_formed_inputs_pass_through() {
        let params = InputBounds::default().sanitize(&raw("100000", "60000", "8", "10"));
        assert_eq!(params, ProjectionParameters::default());
    }

    #[test]
    fn test_non_numeric_amounts_become_zero() {
        let params = InputBounds::default().sanitize(&raw("abc", "", "8", "10"));
        assert_eq!(params.principal, 0.0);
        assert_eq!(params.annual_contribution, 0.0);
    }

    #[test]
    fn test_negative_amounts_become_zero() {
        let params = InputBounds::default().sanitize(&raw("-500", "-1", "8", "10"));
        assert_eq!(params.principal, 0.0);
        assert_eq!(params.annual_contribution, 0.0);
    }

    #[test]
    fn test_grouped_amounts_parse() {
        let params = InputBounds::default().sanitize(&raw("1,00,000", " 60,000 ", "8", "10"));
        assert_eq!(params.principal, 100_000.0);
        assert_eq!(params.annual_contribution, 60_000.0);
    }

    #[test]
    fn test_rate_clamped_and_snapped() {
        let bounds = InputBounds::default();
        assert_eq!(bounds.clamp_rate(0.2), 1.0);
        assert_eq!(bounds.clamp_rate(35.0), 20.0);
        assert_eq!(bounds.clamp_rate(7.3), 7.3);
        assert_eq!(bounds.clamp_rate(7.34), 7.3);
        assert_eq!(bounds.clamp_rate(7.36), 7.4);
    }

    #[test]
    fn test_years_clamped_and_rounded() {
        let bounds = InputBounds::default();
        assert_eq!(bounds.clamp_years(0.0), 1);
        assert_eq!(bounds.clamp_years(12.6), 13);
        assert_eq!(bounds.clamp_years(99.0), 40);
    }

    #[test]
    fn test_missing_rate_and_years_use_minimums() {
        let params = InputBounds::default().sanitize(&raw("1", "1", "", "x"));
        assert_eq!(params.interest_rate, 1.0);
        assert_eq!(params.years, 1);
    }

    #[test]
    fn test_unknown_frequency_labels_fall_back_to_monthly() {
        let mut inputs = raw("1", "1", "5", "5");
        inputs.contribution_frequency = "fortnightly".to_string();
        inputs.compounding_frequency = "hourly".to_string();
        let params = InputBounds::default().sanitize(&inputs);
        assert_eq!(params.contribution_frequency, ContributionFrequency::Monthly);
        assert_eq!(params.compounding_frequency, CompoundingFrequency::Monthly);
    }

    #[test]
    fn test_clamp_numeric_parameters() {
        let params = ProjectionParameters {
            principal: -10.0,
            annual_contribution: f64::NAN,
            interest_rate: 55.0,
            years: 0,
            ..Default::default()
        };
        let clamped = InputBounds::default().clamp(params);
        assert_eq!(clamped.principal, 0.0);
        assert_eq!(clamped.annual_contribution, 0.0);
        assert_eq!(clamped.interest_rate, 20.0);
        assert_eq!(clamped.years, 1);
    }

    #[test]
    fn test_default_bounds_are_valid() {
        assert!(InputBounds::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_ranges_are_rejected() {
        let years = InputBounds { min_years: 50, ..Default::default() };
        assert!(matches!(years.validate(), Err(ProjectionError::InvalidConfig { .. })));

        let rates = InputBounds { max_rate: 0.5, ..Default::default() };
        assert!(matches!(rates.validate(), Err(ProjectionError::InvalidConfig { .. })));

        let infinite = InputBounds { max_rate: f64::INFINITY, ..Default::default() };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_rate_step_must_divide_a_point() {
        for step in [0.0, 0.1, 0.25, 0.5, 1.0] {
            let bounds = InputBounds { rate_step: step, ..Default::default() };
            assert!(bounds.validate().is_ok(), "step {} should be accepted", step);
        }
        for step in [0.3, 0.4, 2.0, -0.1, f64::NAN] {
            let bounds = InputBounds { rate_step: step, ..Default::default() };
            assert!(bounds.validate().is_err(), "step {} should be rejected", step);
        }
    }

    #[test]
    fn test_clamps_do_not_panic_on_inverted_bounds() {
        let bounds = InputBounds {
            min_rate: 10.0,
            max_rate: 5.0,
            min_years: 50,
            max_years: 40,
            ..Default::default()
        };
        assert_eq!(bounds.clamp_rate(7.0), 5.0);
        assert_eq!(bounds.clamp_years(45.0), 40);
        assert_eq!(bounds.clamp(ProjectionParameters::default()).years, 40);
    }
}
