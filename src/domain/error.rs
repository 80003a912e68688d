use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Schema mismatch: {message}")]
    SchemaMismatch { message: String },

    #[error("Scaler shape mismatch: expected {expected} features, got {actual}")]
    ScalerShapeMismatch { expected: usize, actual: usize },

    #[error("Categorical column '{column}' not found in reference dataset")]
    CategoricalColumnNotFound { column: String },

    #[error("Malformed dataset: {message}")]
    MalformedDataset { message: String },

    #[error("Invalid artifact '{artifact}': {message}")]
    InvalidArtifact { artifact: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl DomainError {
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }

    pub fn scaler_shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ScalerShapeMismatch { expected, actual }
    }

    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::CategoricalColumnNotFound {
            column: column.into(),
        }
    }

    pub fn malformed_dataset(message: impl Into<String>) -> Self {
        Self::MalformedDataset {
            message: message.into(),
        }
    }

    pub fn invalid_artifact(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// loaded artifacts or dataset
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_error() {
        let error = DomainError::schema_mismatch("missing Company_Acer");
        assert_eq!(error.to_string(), "Schema mismatch: missing Company_Acer");
    }

    #[test]
    fn test_scaler_shape_mismatch_error() {
        let error = DomainError::scaler_shape_mismatch(12, 11);
        assert_eq!(
            error.to_string(),
            "Scaler shape mismatch: expected 12 features, got 11"
        );
    }

    #[test]
    fn test_column_not_found_error() {
        let error = DomainError::column_not_found("TypeName");
        assert_eq!(
            error.to_string(),
            "Categorical column 'TypeName' not found in reference dataset"
        );
    }

    #[test]
    fn test_invalid_artifact_error() {
        let error = DomainError::invalid_artifact("scaler", "scale contains zero");
        assert_eq!(
            error.to_string(),
            "Invalid artifact 'scaler': scale contains zero"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::validation("bad").is_client_error());
        assert!(!DomainError::schema_mismatch("bad").is_client_error());
        assert!(!DomainError::scaler_shape_mismatch(1, 2).is_client_error());
        assert!(!DomainError::malformed_dataset("bad").is_client_error());
    }
}
