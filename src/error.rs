use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Unknown op")]
    UnknownOperation(String),
    #[error("Missing parameter: {0}")]
    MissingParameter(String),
    #[error("Invalid value for parameter {key}: {value}")]
    InvalidParameter { key: String, value: String },
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Transform produced a non-finite coordinate")]
    NonFiniteResult,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TransformError {
    /// Only an unrecognized operation tag is reported back as a client error.
    /// Everything else surfaces as a generic server failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TransformError::UnknownOperation(_))
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_message_is_fixed() {
        let err = TransformError::UnknownOperation("skew".to_string());
        assert_eq!(err.to_string(), "Unknown op");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_parameter_errors_are_not_client_errors() {
        assert!(!TransformError::MissingParameter("dx".to_string()).is_client_error());
        assert!(!TransformError::NonFiniteResult.is_client_error());
        assert!(
            !TransformError::InvalidParameter {
                key: "dx".to_string(),
                value: "\"a\"".to_string(),
            }
            .is_client_error()
        );
    }
}
