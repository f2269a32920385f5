//! Pull a JSON object out of free-form model output.
//!
//! Models wrap JSON in prose or markdown fences despite instructions. The
//! extractor never fails: it returns the best candidate span, or `{}`.

use serde_json::{Map, Value};

const EMPTY_OBJECT: &str = "{}";
/// Opening braces tried before falling back to the greedy span.
const MAX_CANDIDATES: usize = 64;

/// Best JSON-object candidate in `raw`.
///
/// Tries the first [`MAX_CANDIDATES`] `{` in order and returns the first
/// balanced span that decodes as an object. Otherwise falls back to first
/// `{` through last `}`.
pub fn extract_json_object(raw: &str) -> &str {
    let text = raw.trim();
    let Some(first) = text.find('{') else {
        return EMPTY_OBJECT;
    };

    for (start, _) in text.match_indices('{').take(MAX_CANDIDATES) {
        if let Some(end) = balanced_end(text, start) {
            let candidate = &text[start..=end];
            if serde_json::from_str::<Map<String, Value>>(candidate).is_ok() {
                return candidate;
            }
        }
    }

    match text.rfind('}') {
        Some(last) if last > first => &text[first..=last],
        _ => EMPTY_OBJECT,
    }
}

/// Decode a candidate span. Anything that is not a JSON object is an error.
pub fn decode_object(candidate: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(candidate)
}

/// Byte index of the `}` closing the `{` at `start`. Braces inside string
/// literals are ignored. All delimiters are ASCII, so byte scanning is safe.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_inside_prose() {
        assert_eq!(extract_json_object("blah {\"a\":1} blah"), "{\"a\":1}");
    }

    #[test]
    fn test_no_brace_yields_empty_object() {
        assert_eq!(extract_json_object("no json here"), "{}");
        assert_eq!(extract_json_object(""), "{}");
        assert_eq!(extract_json_object("   \n "), "{}");
    }

    #[test]
    fn test_open_brace_without_close() {
        assert_eq!(extract_json_object("start { never closed"), "{}");
        assert_eq!(extract_json_object("} before {"), "{}");
    }

    #[test]
    fn test_markdown_fence() {
        let raw = "```json\n{\"topic\": \"Photosynthesis\", \"numerical_grade\": 85}\n```";
        assert_eq!(
            extract_json_object(raw),
            "{\"topic\": \"Photosynthesis\", \"numerical_grade\": 85}"
        );
    }

    #[test]
    fn test_nested_objects() {
        let raw = "Result: {\"a\": {\"b\": 2}, \"c\": 3} done";
        assert_eq!(extract_json_object(raw), "{\"a\": {\"b\": 2}, \"c\": 3}");
    }

    #[test]
    fn test_braces_inside_strings() {
        let raw = r#"{"calculation": "use {x} and \"}\" here", "n": 1} trailing }"#;
        assert_eq!(
            extract_json_object(raw),
            r#"{"calculation": "use {x} and \"}\" here", "n": 1}"#
        );
    }

    #[test]
    fn test_skips_non_json_braces() {
        let raw = "Note {not json} then {\"a\": 1}";
        assert_eq!(extract_json_object(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_two_objects_takes_first() {
        let raw = "{\"a\": 1} and {\"b\": 2}";
        assert_eq!(extract_json_object(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_greedy_fallback() {
        let raw = "x {broken: 1} y {also broken} z";
        assert_eq!(extract_json_object(raw), "{broken: 1} y {also broken}");
    }

    #[test]
    fn test_unicode_around_object() {
        let raw = "Évaluation ✓ {\"topic\": \"Énergie\"} ✓";
        assert_eq!(extract_json_object(raw), "{\"topic\": \"Énergie\"}");
    }

    #[test]
    fn test_long_unclosed_brace_run() {
        let raw = "{".repeat(200_000);
        assert_eq!(extract_json_object(&raw), "{}");
    }

    #[test]
    fn test_object_after_many_open_braces_uses_greedy_span() {
        let raw = format!("{}{{\"a\": 1}}", "{".repeat(MAX_CANDIDATES));
        assert_eq!(extract_json_object(&raw), raw.as_str());
        assert!(decode_object(extract_json_object(&raw)).is_err());
    }

    #[test]
    fn test_decode_object() {
        let map = decode_object("{\"a\": 1}").unwrap();
        assert_eq!(map.get("a"), Some(&Value::from(1)));
        assert!(decode_object("{broken}").is_err());
        assert!(decode_object("[1, 2]").is_err());
        assert!(decode_object("{}").unwrap().is_empty());
    }
}
