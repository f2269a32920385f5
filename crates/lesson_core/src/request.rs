//! Input for one evaluation.

use crate::error::{CoreError, Result};

/// Topic plus the user's explanation. The explanation is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRequest {
    topic: String,
    explanation: String,
}

impl GradeRequest {
    /// Fails with [`CoreError::EmptyInput`] when the explanation is empty or whitespace.
    /// The topic is taken as given, including an empty one.
    pub fn new(topic: impl Into<String>, explanation: impl Into<String>) -> Result<Self> {
        let explanation = explanation.into();
        if explanation.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }
        Ok(Self {
            topic: topic.into(),
            explanation,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_explanation() {
        assert_eq!(GradeRequest::new("Cells", ""), Err(CoreError::EmptyInput));
        assert_eq!(GradeRequest::new("Cells", " \n\t "), Err(CoreError::EmptyInput));
    }

    #[test]
    fn test_accepts_empty_topic() {
        let req = GradeRequest::new("", "Mitochondria make ATP.").unwrap();
        assert_eq!(req.topic(), "");
        assert_eq!(req.explanation(), "Mitochondria make ATP.");
    }

    #[test]
    fn test_keeps_explanation_verbatim() {
        let req = GradeRequest::new("Cells", "  line one\nline two  ").unwrap();
        assert_eq!(req.explanation(), "  line one\nline two  ");
    }
}
