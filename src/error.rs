use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Generation failed: {0}")]
    GenerationFailure(String),
    #[error("Download error: {0}")]
    Download(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_converts() {
        let err = IconError::from(ValidationError::TooShort);
        assert!(matches!(err, IconError::Validation(ValidationError::TooShort)));
        assert_eq!(
            err.to_string(),
            "Validation error: Prompt must be at least 3 characters"
        );
    }
}
