//! Typed construction of [`GradedFeedback`] from an adapted mapping.

use lesson_core::{fields, GradedFeedback};
use serde_json::{Map, Value};

use crate::error::SchemaValidationError;

/// Build the feedback record, coercing each value to its schema type.
///
/// Keys missing from `mapping` take their fallback values, so the empty
/// mapping always succeeds.
pub fn assemble(mapping: &Map<String, Value>) -> Result<GradedFeedback, SchemaValidationError> {
    let fallback = GradedFeedback::fallback();
    Ok(GradedFeedback {
        topic: text(mapping, fields::TOPIC, fallback.topic)?,
        numerical_grade: integer(mapping, fields::NUMERICAL_GRADE, fallback.numerical_grade)?,
        letter_grade: text(mapping, fields::LETTER_GRADE, fallback.letter_grade)?,
        score_content: integer(mapping, fields::SCORE_CONTENT, fallback.score_content)?,
        score_organization: integer(
            mapping,
            fields::SCORE_ORGANIZATION,
            fallback.score_organization,
        )?,
        score_mechanics: integer(mapping, fields::SCORE_MECHANICS, fallback.score_mechanics)?,
        calculation: text(mapping, fields::CALCULATION, fallback.calculation)?,
        strengths: string_list(mapping, fields::STRENGTHS, fallback.strengths)?,
        weaknesses: string_list(mapping, fields::WEAKNESSES, fallback.weaknesses)?,
        improvement_suggestions: string_list(
            mapping,
            fields::IMPROVEMENT_SUGGESTIONS,
            fallback.improvement_suggestions,
        )?,
        mechanics_issues: string_list(mapping, fields::MECHANICS_ISSUES, fallback.mechanics_issues)?,
    })
}

fn mismatch(field: &'static str, expected: &'static str, value: &Value) -> SchemaValidationError {
    SchemaValidationError {
        field,
        expected,
        found: describe(value),
    }
}

fn integer(
    mapping: &Map<String, Value>,
    field: &'static str,
    fallback: i64,
) -> Result<i64, SchemaValidationError> {
    let Some(value) = mapping.get(field) else {
        return Ok(fallback);
    };
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    coerced.ok_or_else(|| mismatch(field, "integer", value))
}

fn text(
    mapping: &Map<String, Value>,
    field: &'static str,
    fallback: String,
) -> Result<String, SchemaValidationError> {
    match mapping.get(field) {
        None => Ok(fallback),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(field, "string", other)),
    }
}

fn string_list(
    mapping: &Map<String, Value>,
    field: &'static str,
    fallback: Vec<String>,
) -> Result<Vec<String>, SchemaValidationError> {
    let Some(value) = mapping.get(field) else {
        return Ok(fallback);
    };
    let Value::Array(items) = value else {
        return Err(mismatch(field, "list of strings", value));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(field, "list of strings", other)),
        })
        .collect()
}

/// Short description of an offending value for error messages.
fn describe(value: &Value) -> String {
    const MAX_SHOWN: usize = 40;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => {
            let shown: String = s.chars().take(MAX_SHOWN).collect();
            if shown.len() < s.len() {
                format!("string \"{shown}...\"")
            } else {
                format!("string \"{shown}\"")
            }
        }
        Value::Array(a) => format!("array of {} item(s)", a.len()),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_empty_mapping_is_fallback() {
        let feedback = assemble(&Map::new()).unwrap();
        assert_eq!(feedback, GradedFeedback::fallback());
        assert_eq!(feedback.numerical_grade, 0);
        assert_eq!(feedback.topic, "Unknown Topic");
        assert!(feedback.strengths.is_empty());
    }

    #[test]
    fn test_full_mapping() {
        let feedback = assemble(&map(json!({
            "topic": "Photosynthesis",
            "numerical_grade": 85,
            "letter_grade": "B",
            "score_content": 86,
            "score_organization": 78,
            "score_mechanics": 92,
            "calculation": "0.8*86 + 0.15*78 + 0.05*92 = 85",
            "strengths": ["clear"],
            "weaknesses": ["short"],
            "improvement_suggestions": ["a", "b", "c"],
            "mechanics_issues": []
        })))
        .unwrap();
        assert_eq!(feedback.topic, "Photosynthesis");
        assert_eq!(feedback.numerical_grade, 85);
        assert_eq!(feedback.score_mechanics, 92);
        assert_eq!(feedback.improvement_suggestions.len(), 3);
        assert!(feedback.mechanics_issues.is_empty());
    }

    #[test]
    fn test_integer_coercions() {
        let feedback = assemble(&map(json!({
            "numerical_grade": 85.0,
            "score_content": " 90 ",
            "score_organization": -3
        })))
        .unwrap();
        assert_eq!(feedback.numerical_grade, 85);
        assert_eq!(feedback.score_content, 90);
        assert_eq!(feedback.score_organization, -3);
    }

    #[test]
    fn test_integer_rejections() {
        for bad in [json!(85.5), json!("high"), json!(true), Value::Null, json!([85])] {
            let err = assemble(&map(json!({ "numerical_grade": bad }))).unwrap_err();
            assert_eq!(err.field, "numerical_grade");
            assert_eq!(err.expected, "integer");
        }
    }

    #[test]
    fn test_string_field_rejects_number() {
        let err = assemble(&map(json!({"letter_grade": 4}))).unwrap_err();
        assert_eq!(err.field, "letter_grade");
        assert_eq!(err.expected, "string");
        assert_eq!(err.found, "number 4");
    }

    #[test]
    fn test_list_field_rejections() {
        let err = assemble(&map(json!({"strengths": "good"}))).unwrap_err();
        assert_eq!(err.field, "strengths");
        assert_eq!(err.expected, "list of strings");

        let err = assemble(&map(json!({"weaknesses": ["ok", 3]}))).unwrap_err();
        assert_eq!(err.field, "weaknesses");
        assert_eq!(err.found, "number 3");
    }

    #[test]
    fn test_describe_truncates_long_strings() {
        let long = "x".repeat(100);
        let described = describe(&Value::String(long));
        assert!(described.ends_with("...\""));
        assert!(described.len() < 60);
    }
}
