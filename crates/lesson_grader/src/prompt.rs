//! Grading prompt construction.

use lesson_core::{fields, GradeRequest, Rubric};

/// The two halves of one grading request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingPrompt {
    /// Fixed rubric instruction
    pub system: String,
    /// Topic and explanation
    pub user: String,
}

impl GradingPrompt {
    /// System instruction followed by the user query, as one string.
    pub fn to_request_string(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

/// Build the prompt for one request. Pure and deterministic.
pub fn build_prompt(request: &GradeRequest) -> GradingPrompt {
    GradingPrompt {
        system: rubric_instruction(),
        user: user_query(request.topic(), request.explanation()),
    }
}

fn user_query(topic: &str, explanation: &str) -> String {
    format!(
        "Topic: {topic}\n\nUser's explanation:\n{explanation}\n\nPlease evaluate according to the rubric."
    )
}

fn rubric_instruction() -> String {
    let content = Rubric::CONTENT;
    let organization = Rubric::ORGANIZATION;
    let mechanics = Rubric::MECHANICS;
    let swing = Rubric::MECHANICS_MAX_SWING;
    let scale = Rubric::SCALE_MAX;
    let min_suggestions = Rubric::MIN_SUGGESTIONS;
    let max_issues = Rubric::MAX_MECHANICS_ISSUES;
    let field_list = fields::ALL.join(", ");

    format!(
        "You are an expert educator and evaluator. The user will provide a lesson explanation on a topic.

Evaluate using this component rubric (all component scores are on a 0-{scale} scale before weighting):
- Content (weight {content:.2}): accuracy, depth of understanding, meaningful examples, correct use of concepts.
- Organization (weight {organization:.2}): logical flow, structure, clear progression, signposting.
- Mechanics (weight {mechanics:.2}): spelling, grammar, punctuation. Mechanics should only slightly influence the final grade.
  - Mechanics can change the final numerical grade by at most +/- {swing} points total.
  - If mechanics seriously interfere with comprehension, say so explicitly; that may justify a larger deduction, but explain why.

Requirements for your response:
1. Respond with a single JSON object and nothing else: no prose, no markdown fences.
2. Use exactly these keys: {field_list}.
3. numerical_grade = round({content:.2}*score_content + {organization:.2}*score_organization + {mechanics:.2}*score_mechanics).
4. calculation is a short string showing the three component scores and the weighted computation (example: \"0.8*86 + 0.15*78 + 0.05*92 = 85\").
5. mechanics_issues lists up to {max_issues} specific spelling or grammar issues with short excerpts or corrections; use an empty list if there are none.
6. Emphasize content: when two explanations differ only by minor spelling mistakes, the grade should reflect the content, and the calculation must show the small mechanics effect.
7. strengths and weaknesses are lists of strings; improvement_suggestions holds at least {min_suggestions} concrete suggestions on conceptual clarity and organization, not only grammar.
8. topic and letter_grade are strings; all score fields are integers."
    )
}
