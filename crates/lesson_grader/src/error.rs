//! Grading error taxonomy

use lesson_core::CoreError;
use thiserror::Error;

/// Failure talking to the model.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("timed out after {0}s")]
    Timeout(u64),

    #[error(transparent)]
    Request(#[from] lesson_llms::Error),
}

/// An adapted value that cannot be coerced to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' expected {expected}, found {found}")]
pub struct SchemaValidationError {
    pub field: &'static str,
    pub expected: &'static str,
    pub found: String,
}

#[derive(Debug, Error)]
pub enum GradeError {
    /// Blank explanation; no LLM call was made
    #[error("Explanation cannot be empty.")]
    EmptyInput,

    /// Blank completion, or the call timed out
    #[error("Empty response from LLM.")]
    UpstreamEmptyResponse,

    #[error("LLM request failed: {0}")]
    Gateway(#[source] GatewayError),

    /// The model's output has a field of the wrong type
    #[error("Error parsing response: {source}")]
    SchemaValidation {
        #[source]
        source: SchemaValidationError,
        raw_response: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GradeError {
    /// Model text behind a schema failure, for debugging output.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            GradeError::SchemaValidation { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

impl From<CoreError> for GradeError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyInput => GradeError::EmptyInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(GradeError::EmptyInput.to_string(), "Explanation cannot be empty.");
        assert_eq!(
            GradeError::UpstreamEmptyResponse.to_string(),
            "Empty response from LLM."
        );
        assert_eq!(
            GradeError::Gateway(GatewayError::Timeout(60)).to_string(),
            "LLM request failed: timed out after 60s"
        );
    }

    #[test]
    fn test_schema_error_keeps_raw_response() {
        let err = GradeError::SchemaValidation {
            source: SchemaValidationError {
                field: "numerical_grade",
                expected: "integer",
                found: "string \"high\"".to_string(),
            },
            raw_response: "{\"numerical_grade\": \"high\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error parsing response: field 'numerical_grade' expected integer, found string \"high\""
        );
        assert_eq!(err.raw_response(), Some("{\"numerical_grade\": \"high\"}"));
        assert!(GradeError::EmptyInput.raw_response().is_none());
    }

    #[test]
    fn test_from_core_error() {
        assert!(matches!(
            GradeError::from(CoreError::EmptyInput),
            GradeError::EmptyInput
        ));
    }
}
