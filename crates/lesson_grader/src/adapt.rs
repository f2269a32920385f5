//! Map loosely named model output onto the canonical field set.

use std::str::FromStr;

use lesson_core::{fields, LETTER_GRADE_UNAVAILABLE, UNKNOWN_TOPIC};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping keyed by exactly the canonical field names.
pub type AdaptedMapping = Map<String, Value>;

/// How a key counts as "resolved" when looking up a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasPolicy {
    /// Present and not `null`. An explicit `0` is kept.
    #[default]
    Presence,
    /// Aliased fields skip falsy canonical values (`0`, `""`, `[]`, ...).
    Truthy,
}

impl AliasPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasPolicy::Presence => "presence",
            AliasPolicy::Truthy => "truthy",
        }
    }
}

impl FromStr for AliasPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "presence" => Ok(AliasPolicy::Presence),
            "truthy" | "legacy" => Ok(AliasPolicy::Truthy),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AliasPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct FieldRule {
    name: &'static str,
    alias: Option<&'static str>,
    default: fn() -> Value,
}

fn unknown_topic() -> Value {
    Value::from(UNKNOWN_TOPIC)
}

fn letter_unavailable() -> Value {
    Value::from(LETTER_GRADE_UNAVAILABLE)
}

fn empty_text() -> Value {
    Value::from("")
}

fn zero() -> Value {
    Value::from(0)
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

const RULES: [FieldRule; 11] = [
    FieldRule { name: fields::TOPIC, alias: None, default: unknown_topic },
    FieldRule { name: fields::NUMERICAL_GRADE, alias: Some("overall_score"), default: zero },
    FieldRule { name: fields::LETTER_GRADE, alias: None, default: letter_unavailable },
    FieldRule { name: fields::SCORE_CONTENT, alias: Some("content_score"), default: zero },
    FieldRule { name: fields::SCORE_ORGANIZATION, alias: Some("organization_score"), default: zero },
    FieldRule { name: fields::SCORE_MECHANICS, alias: Some("mechanics_score"), default: zero },
    FieldRule { name: fields::CALCULATION, alias: Some("score_breakdown"), default: empty_text },
    FieldRule { name: fields::STRENGTHS, alias: None, default: empty_list },
    FieldRule { name: fields::WEAKNESSES, alias: None, default: empty_list },
    FieldRule { name: fields::IMPROVEMENT_SUGGESTIONS, alias: None, default: empty_list },
    FieldRule { name: fields::MECHANICS_ISSUES, alias: None, default: empty_list },
];

/// Resolve every canonical field: exact key, then alias, then default.
///
/// Unknown keys are dropped. Values are copied as-is; typing is the
/// assembler's job.
pub fn adapt(raw: &Map<String, Value>, policy: AliasPolicy) -> AdaptedMapping {
    RULES
        .iter()
        .map(|rule| (rule.name.to_string(), resolve(raw, rule, policy)))
        .collect()
}

fn resolve(raw: &Map<String, Value>, rule: &FieldRule, policy: AliasPolicy) -> Value {
    let found = match policy {
        AliasPolicy::Presence => present(raw, rule.name)
            .or_else(|| rule.alias.and_then(|alias| present(raw, alias))),
        AliasPolicy::Truthy => match rule.alias {
            Some(alias) => raw
                .get(rule.name)
                .filter(|v| is_truthy(v))
                .or_else(|| raw.get(alias)),
            None => raw.get(rule.name),
        },
    };
    found.cloned().unwrap_or_else(rule.default)
}

fn present<'a>(raw: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|v| !v.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
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
    fn test_empty_mapping_gets_defaults() {
        let adapted = adapt(&Map::new(), AliasPolicy::Presence);
        assert_eq!(adapted.len(), fields::ALL.len());
        assert_eq!(adapted[fields::TOPIC], json!("Unknown Topic"));
        assert_eq!(adapted[fields::LETTER_GRADE], json!("N/A"));
        assert_eq!(adapted[fields::NUMERICAL_GRADE], json!(0));
        assert_eq!(adapted[fields::CALCULATION], json!(""));
        assert_eq!(adapted[fields::STRENGTHS], json!([]));
    }

    #[test]
    fn test_alias_used_when_canonical_missing() {
        for policy in [AliasPolicy::Presence, AliasPolicy::Truthy] {
            let adapted = adapt(&map(json!({"overall_score": 77})), policy);
            assert_eq!(adapted[fields::NUMERICAL_GRADE], json!(77));
        }
        let adapted = adapt(
            &map(json!({
                "content_score": 90,
                "organization_score": 80,
                "mechanics_score": 70,
                "score_breakdown": "0.8*90 + 0.15*80 + 0.05*70 = 88"
            })),
            AliasPolicy::Presence,
        );
        assert_eq!(adapted[fields::SCORE_CONTENT], json!(90));
        assert_eq!(adapted[fields::SCORE_ORGANIZATION], json!(80));
        assert_eq!(adapted[fields::SCORE_MECHANICS], json!(70));
        assert_eq!(adapted[fields::CALCULATION], json!("0.8*90 + 0.15*80 + 0.05*70 = 88"));
    }

    #[test]
    fn test_canonical_wins_over_alias() {
        let adapted = adapt(
            &map(json!({"numerical_grade": 85, "overall_score": 40})),
            AliasPolicy::Presence,
        );
        assert_eq!(adapted[fields::NUMERICAL_GRADE], json!(85));
    }

    #[test]
    fn test_explicit_zero_under_presence() {
        let raw = map(json!({"numerical_grade": 0, "overall_score": 55}));
        assert_eq!(adapt(&raw, AliasPolicy::Presence)[fields::NUMERICAL_GRADE], json!(0));
        assert_eq!(adapt(&raw, AliasPolicy::Truthy)[fields::NUMERICAL_GRADE], json!(55));

        let zero_only = map(json!({"numerical_grade": 0}));
        assert_eq!(adapt(&zero_only, AliasPolicy::Presence)[fields::NUMERICAL_GRADE], json!(0));
        assert_eq!(adapt(&zero_only, AliasPolicy::Truthy)[fields::NUMERICAL_GRADE], json!(0));
    }

    #[test]
    fn test_null_handling() {
        let raw = map(json!({"numerical_grade": null, "overall_score": 61, "topic": null}));
        let presence = adapt(&raw, AliasPolicy::Presence);
        assert_eq!(presence[fields::NUMERICAL_GRADE], json!(61));
        assert_eq!(presence[fields::TOPIC], json!("Unknown Topic"));

        // Legacy lookups keep a present null on non-aliased fields
        let truthy = adapt(&raw, AliasPolicy::Truthy);
        assert_eq!(truthy[fields::NUMERICAL_GRADE], json!(61));
        assert_eq!(truthy[fields::TOPIC], Value::Null);
    }

    #[test]
    fn test_truthy_takes_present_alias_even_if_falsy() {
        let raw = map(json!({"calculation": "", "score_breakdown": null}));
        assert_eq!(adapt(&raw, AliasPolicy::Truthy)[fields::CALCULATION], Value::Null);
        assert_eq!(adapt(&raw, AliasPolicy::Presence)[fields::CALCULATION], json!(""));
    }

    #[test]
    fn test_unknown_keys_dropped_and_values_untyped() {
        let raw = map(json!({"extra": true, "strengths": "not a list"}));
        let adapted = adapt(&raw, AliasPolicy::Presence);
        assert!(!adapted.contains_key("extra"));
        assert_eq!(adapted[fields::STRENGTHS], json!("not a list"));
    }

    #[test]
    fn test_alias_policy_from_str() {
        assert_eq!("presence".parse(), Ok(AliasPolicy::Presence));
        assert_eq!("TRUTHY".parse(), Ok(AliasPolicy::Truthy));
        assert_eq!("legacy".parse(), Ok(AliasPolicy::Truthy));
        assert!("strict".parse::<AliasPolicy>().is_err());
        assert_eq!(AliasPolicy::Truthy.to_string(), "truthy");
    }
}
