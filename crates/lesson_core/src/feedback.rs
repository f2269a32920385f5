//! The graded-result schema.

use serde::{Deserialize, Serialize};

/// Topic label used when the model output names no topic.
pub const UNKNOWN_TOPIC: &str = "Unknown Topic";
/// Letter grade used when the model output has none.
pub const LETTER_GRADE_UNAVAILABLE: &str = "N/A";

/// Canonical field names, in schema order.
pub mod fields {
    pub const TOPIC: &str = "topic";
    pub const NUMERICAL_GRADE: &str = "numerical_grade";
    pub const LETTER_GRADE: &str = "letter_grade";
    pub const SCORE_CONTENT: &str = "score_content";
    pub const SCORE_ORGANIZATION: &str = "score_organization";
    pub const SCORE_MECHANICS: &str = "score_mechanics";
    pub const CALCULATION: &str = "calculation";
    pub const STRENGTHS: &str = "strengths";
    pub const WEAKNESSES: &str = "weaknesses";
    pub const IMPROVEMENT_SUGGESTIONS: &str = "improvement_suggestions";
    pub const MECHANICS_ISSUES: &str = "mechanics_issues";

    pub const ALL: [&str; 11] = [
        TOPIC,
        NUMERICAL_GRADE,
        LETTER_GRADE,
        SCORE_CONTENT,
        SCORE_ORGANIZATION,
        SCORE_MECHANICS,
        CALCULATION,
        STRENGTHS,
        WEAKNESSES,
        IMPROVEMENT_SUGGESTIONS,
        MECHANICS_ISSUES,
    ];
}

/// Structured feedback for one lesson explanation.
///
/// Built once per evaluation and never mutated afterwards. Score ranges and
/// list lengths are what the rubric asks for, not something this type checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedFeedback {
    pub topic: String,
    pub numerical_grade: i64,
    pub letter_grade: String,
    pub score_content: i64,
    pub score_organization: i64,
    pub score_mechanics: i64,
    /// Weighted-sum trace, e.g. `0.8*86 + 0.15*78 + 0.05*92 = 85`
    pub calculation: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub mechanics_issues: Vec<String>,
}

impl GradedFeedback {
    /// Feedback with every field at its fallback value.
    pub fn fallback() -> Self {
        Self {
            topic: UNKNOWN_TOPIC.to_string(),
            numerical_grade: 0,
            letter_grade: LETTER_GRADE_UNAVAILABLE.to_string(),
            score_content: 0,
            score_organization: 0,
            score_mechanics: 0,
            calculation: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            improvement_suggestions: Vec::new(),
            mechanics_issues: Vec::new(),
        }
    }
}
