//! Compound growth projections
//!
//! The core is [`projection::project`], a pure function from
//! [`ProjectionParameters`] to a year-by-year series of
//! [`YearlySnapshot`]s. Around it sit the input boundary, report
//! formatting and export, simulated delivery, and batch scenarios.

pub mod config;
pub mod error;
pub mod notify;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

pub use config::AppConfig;
pub use error::{ProjectionError, Result};
pub use params::{CompoundingFrequency, ContributionFrequency, InputBounds, ProjectionParameters, RawInputs};
pub use projection::{project, ProjectionEngine, ProjectionResult, ProjectionSummary, YearlySnapshot};
