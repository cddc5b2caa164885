use crate::domain::point::{Shape, reference_shape};
use crate::error::{Result, TransformError};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Startup configuration. Read once and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub reference_shape: Shape,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            reference_shape: reference_shape(),
        }
    }
}

impl AppConfig {
    /// Loads a JSON config file; keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)
            .map_err(|e| TransformError::Config(e.to_string()))?;
        if config.reference_shape.is_empty() {
            return Err(TransformError::Config(
                "reference_shape must contain at least one point".to_string(),
            ));
        }
        Ok(config)
    }

    /// Falls back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
