//! Crate-wide error type
//!
//! The projection engine itself is total; these errors come from the
//! boundaries around it (label parsing, config validation, CSV/JSON I/O, delivery).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Unknown {kind} frequency: '{label}'")]
    UnknownFrequency { kind: &'static str, label: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Delivery failed: {0}")]
    Notify(#[from] crate::notify::NotifyError),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
