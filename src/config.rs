//! Application configuration loaded from JSON
//!
//! Every section is optional; anything omitted keeps its default. Input
//! bounds are checked on load so a bad range fails here rather than at
//! the first clamp.

use crate::error::Result;
use crate::params::InputBounds;
use crate::projection::ProjectionConfig;
use crate::report::ReportLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub projection: ProjectionConfig,

    #[serde(default)]
    pub bounds: InputBounds,

    #[serde(default)]
    pub report: ReportLayout,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.bounds.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }
}
