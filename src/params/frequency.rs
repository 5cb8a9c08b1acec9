//! Compounding and contribution frequencies
//!
//! Closed enumerations replace the string-keyed lookup tables of the
//! calculator UI. Labels are resolved here so the engine never sees raw
//! strings.

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often accrued interest is added to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding steps per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semi-annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }

    /// Lenient parse used at the input boundary: unknown labels compound monthly
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognised compounding frequency '{}', using monthly", label);
            CompoundingFrequency::Monthly
        })
    }
}

impl Default for CompoundingFrequency {
    fn default() -> Self {
        CompoundingFrequency::Quarterly
    }
}

impl FromStr for CompoundingFrequency {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        CompoundingFrequency::ALL
            .into_iter()
            .find(|f| f.label() == normalized)
            .ok_or_else(|| ProjectionError::UnknownFrequency {
                kind: "compounding",
                label: s.to_string(),
            })
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How often the nominal annual contribution is deposited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributionFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl ContributionFrequency {
    pub const ALL: [ContributionFrequency; 4] = [
        ContributionFrequency::Annually,
        ContributionFrequency::SemiAnnually,
        ContributionFrequency::Quarterly,
        ContributionFrequency::Monthly,
    ];

    /// Number of deposits per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionFrequency::Annually => 1,
            ContributionFrequency::SemiAnnually => 2,
            ContributionFrequency::Quarterly => 4,
            ContributionFrequency::Monthly => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContributionFrequency::Annually => "annually",
            ContributionFrequency::SemiAnnually => "semi-annually",
            ContributionFrequency::Quarterly => "quarterly",
            ContributionFrequency::Monthly => "monthly",
        }
    }

    /// Lenient parse used at the input boundary: unknown labels contribute monthly
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognised contribution frequency '{}', using monthly", label);
            ContributionFrequency::Monthly
        })
    }
}

impl Default for ContributionFrequency {
    fn default() -> Self {
        ContributionFrequency::Monthly
    }
}

impl FromStr for ContributionFrequency {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ContributionFrequency::ALL
            .into_iter()
            .find(|f| f.label() == normalized)
            .ok_or_else(|| ProjectionError::UnknownFrequency {
                kind: "contribution",
                label: s.to_string(),
            })
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_periods() {
        assert_eq!(CompoundingFrequency::Annually.periods_per_year(), 1);
        assert_eq!(CompoundingFrequency::SemiAnnually.periods_per_year(), 2);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_contribution_periods() {
        assert_eq!(ContributionFrequency::Annually.periods_per_year(), 1);
        assert_eq!(ContributionFrequency::SemiAnnually.periods_per_year(), 2);
        assert_eq!(ContributionFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(ContributionFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_labels_parse_back() {
        for f in CompoundingFrequency::ALL {
            assert_eq!(f.label().parse::<CompoundingFrequency>().unwrap(), f);
        }
        for f in ContributionFrequency::ALL {
            assert_eq!(f.label().parse::<ContributionFrequency>().unwrap(), f);
        }
        assert_eq!(
            " Semi-Annually ".parse::<ContributionFrequency>().unwrap(),
            ContributionFrequency::SemiAnnually
        );
    }

    #[test]
    fn test_unknown_contribution_falls_back_to_monthly() {
        assert!("weekly".parse::<ContributionFrequency>().is_err());
        assert_eq!(
            ContributionFrequency::from_label_or_default("weekly"),
            ContributionFrequency::Monthly
        );
        assert_eq!(ContributionFrequency::from_label_or_default("").periods_per_year(), 12);
    }

    #[test]
    fn test_daily_is_not_a_contribution_frequency() {
        let err = "daily".parse::<ContributionFrequency>().unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownFrequency { kind: "contribution", .. }));
    }

    #[test]
    fn test_serde_uses_kebab_case_labels() {
        let json = serde_json::to_string(&CompoundingFrequency::SemiAnnually).unwrap();
        assert_eq!(json, "\"semi-annually\"");
        let parsed: ContributionFrequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(parsed, ContributionFrequency::Quarterly);
    }
}
