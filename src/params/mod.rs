//! Projection inputs: parameters, frequencies and the sanitising boundary

mod frequency;
mod parameters;
pub mod input;

pub use frequency::{CompoundingFrequency, ContributionFrequency};
pub use parameters::ProjectionParameters;
pub use input::{InputBounds, RawInputs};
