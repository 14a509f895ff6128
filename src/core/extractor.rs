//! Recovering a structured artifact from raw model output.
//!
//! Model replies nominally contain JSON but are routinely wrapped in
//! markdown fences, prefixed with prose, or truncated. Extraction is a
//! two-pass search over the fence-stripped text: first an anchored pass
//! for the object literal closing at the end of the reply (skips leading
//! prose), then a scan for the first balanced object anywhere. The brace
//! scanner tracks string and escape state, so braces inside string
//! literals never unbalance a candidate.

use thiserror::Error;

use crate::domain::Unvalidated;

/// Extraction failure, carrying the offending text for diagnostics
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model reply")]
    NoObject { text: String },

    #[error("candidate JSON span failed to parse: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        text: String,
    },
}

impl ExtractError {
    /// The reply text that could not be interpreted
    pub fn offending_text(&self) -> &str {
        match self {
            ExtractError::NoObject { text } | ExtractError::Parse { text, .. } => text,
        }
    }
}

/// Remove markdown code fences, language-tagged and untagged
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Byte spans of every top-level balanced `{...}` in the text.
///
/// String-aware: `"` toggles string state, `\` escapes inside strings,
/// and braces inside strings do not affect nesting depth.
fn balanced_object_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = idx;
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        spans.push((start, idx + ch.len_utf8()));
                    }
                }
            }
            _ => {}
        }
    }

    spans
}

/// Recover a structured value from a raw model reply.
///
/// Returns the parsed object as [`Unvalidated`]; shape checking is the
/// validator's job, not the extractor's.
pub fn extract(raw: &str) -> Result<Unvalidated, ExtractError> {
    let clean = strip_fences(raw);
    let spans = balanced_object_spans(&clean);

    if spans.is_empty() {
        return Err(ExtractError::NoObject {
            text: raw.to_string(),
        });
    }

    // Anchored pass: the last object whose closing brace is followed only
    // by whitespace. Fallback pass: the first balanced object anywhere.
    let &(start, end) = spans
        .iter()
        .rev()
        .find(|(_, end)| clean[*end..].trim().is_empty())
        .unwrap_or(&spans[0]);

    let candidate = &clean[start..end];

    match serde_json::from_str(candidate) {
        Ok(value) => Ok(Unvalidated(value)),
        Err(source) => Err(ExtractError::Parse {
            source,
            text: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract_value(raw: &str) -> serde_json::Value {
        extract(raw).unwrap().0
    }

    #[test]
    fn test_bare_json() {
        let value = extract_value(r#"{"name":"Card","description":"d","source":"<div/>","style":""}"#);
        assert_eq!(value["name"], "Card");
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"name\":\"PricingCard\",\"description\":\"3-tier pricing\",\"source\":\"<div>..\",\"style\":\"\"}\n```";
        let value = extract_value(raw);
        assert_eq!(
            value,
            json!({
                "name": "PricingCard",
                "description": "3-tier pricing",
                "source": "<div>..",
                "style": "",
            })
        );
    }

    #[test]
    fn test_leading_prose_skipped() {
        let raw = "Sure! Here is your component:\n\n{\"name\":\"Nav\",\"description\":\"navbar\",\"source\":\"<nav/>\",\"style\":\"\"}";
        assert_eq!(extract_value(raw)["name"], "Nav");
    }

    #[test]
    fn test_untagged_fence_with_prose() {
        let raw = "Here you go:\n```\n{\"name\":\"Hero\",\"description\":\"\",\"source\":\"<section/>\",\"style\":\"\"}\n```\n";
        assert_eq!(extract_value(raw)["name"], "Hero");
    }

    #[test]
    fn test_nested_object() {
        let raw = r#"{"name":"Modal","description":"d","source":"<div/>","style":"","meta":{"a":1}}"#;
        assert_eq!(extract_value(raw)["meta"]["a"], 1);
    }

    #[test]
    fn test_braces_inside_strings() {
        let raw = r#"{"name":"Badge","description":"shows {count}","source":"<span>{ }</span>","style":".a { color: red; }"}"#;
        let value = extract_value(raw);
        assert_eq!(value["style"], ".a { color: red; }");
    }

    #[test]
    fn test_trailing_prose_uses_first_object() {
        let raw = "{\"name\":\"A\",\"description\":\"\",\"source\":\"x\",\"style\":\"\"}\nHope this helps!";
        assert_eq!(extract_value(raw)["name"], "A");
    }

    #[test]
    fn test_anchored_pass_prefers_final_object() {
        let raw = "Example input: {\"q\": 1}\n\n{\"name\":\"B\",\"description\":\"\",\"source\":\"y\",\"style\":\"\"}";
        assert_eq!(extract_value(raw)["name"], "B");
    }

    #[test]
    fn test_no_object_is_error() {
        let err = extract("I could not generate a component for that request.").unwrap_err();
        assert!(matches!(err, ExtractError::NoObject { .. }));
        assert!(err.offending_text().contains("could not generate"));
    }

    #[test]
    fn test_truncated_object_is_error() {
        // Closing brace never arrives, so no balanced span exists
        let err = extract("{\"name\":\"Card\",\"description\":\"cut off").unwrap_err();
        assert!(matches!(err, ExtractError::NoObject { .. }));
    }

    #[test]
    fn test_malformed_candidate_is_parse_error() {
        let err = extract("{name: Card}").unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }
}
