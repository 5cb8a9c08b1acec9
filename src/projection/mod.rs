//! Projection engine for compound growth of a principal plus contributions

mod state;
mod engine;
mod snapshot;

pub use state::Accumulator;
pub use engine::{project, ProjectionEngine, ProjectionConfig, StepPolicy};
pub use snapshot::{ProjectionResult, ProjectionSummary, YearlySnapshot};
