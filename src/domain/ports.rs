use crate::error::{Result, TransformError};
use std::collections::HashMap;

/// Supplies named numeric parameters to the transform resolver.
///
/// The HTTP layer backs this with the request's JSON `params` object and the
/// CLI with its `key=value` arguments.
pub trait ParameterSource {
    fn number(&self, key: &str) -> Result<f64>;
}

impl ParameterSource for HashMap<String, f64> {
    fn number(&self, key: &str) -> Result<f64> {
        self.get(key)
            .copied()
            .ok_or_else(|| TransformError::MissingParameter(key.to_string()))
    }
}
