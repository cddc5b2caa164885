use crate::domain::ports::ParameterSource;
use crate::error::{Result, TransformError};
use serde_json::{Map, Value};

/// The `params` object of a transform request body.
impl ParameterSource for Map<String, Value> {
    fn number(&self, key: &str) -> Result<f64> {
        let value = self
            .get(key)
            .ok_or_else(|| TransformError::MissingParameter(key.to_string()))?;
        value.as_f64().ok_or_else(|| TransformError::InvalidParameter {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
