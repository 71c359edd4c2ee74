//! Model Output Parsing
//!
//! Turns a raw text completion into a JSON value. Models frequently wrap JSON
//! in a Markdown code fence, so fenced output is unwrapped before parsing.
//! No schema is applied: any well-formed JSON document is accepted.

use serde_json::Value;

/// Failure to read a completion as JSON.
#[derive(Debug, thiserror::Error)]
pub enum OutputParserError {
    #[error("Invalid json output: {text}")]
    InvalidJson {
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a model completion as a JSON document.
pub fn parse_json_output(text: &str) -> Result<Value, OutputParserError> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let candidate = extract_fenced_block(trimmed).unwrap_or(trimmed);
    serde_json::from_str(candidate.trim().trim_matches('`').trim()).map_err(|source| {
        OutputParserError::InvalidJson {
            text: text.to_string(),
            source,
        }
    })
}

/// Returns everything between the first and the last ```` ``` ```` fence,
/// minus an optional `json` tag. Fences nested inside the JSON (for example
/// in a string value) stay part of the body.
fn extract_fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let rest = &text[start..];
    let body = &rest[..rest.rfind("```")?];
    Some(body.strip_prefix("json").unwrap_or(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_bare_json() {
        let value = parse_json_output(r#"  {"title": "Rust", "questions": []}  "#).unwrap();
        assert_eq!(value, json!({"title": "Rust", "questions": []}));
    }

    #[test]
    fn test_parses_json_fence() {
        let text = "Here is your quiz:\n```json\n{\"title\": \"Cells\"}\n```\nEnjoy!";
        let value = parse_json_output(text).unwrap();
        assert_eq!(value["title"], "Cells");
    }

    #[test]
    fn test_parses_untagged_fence() {
        let text = "```\n[1, 2, 3]\n```";
        assert_eq!(parse_json_output(text).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_parses_single_line_fence() {
        let text = "```{\"a\": 1}```";
        assert_eq!(parse_json_output(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_parses_tagged_single_line_fence() {
        let text = "```json{\"a\": 1}```";
        assert_eq!(parse_json_output(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_keeps_backticks_inside_fenced_json() {
        let text = "```json\n{\"explanation\": \"Use ``` to open a code block\"}\n```";
        let value = parse_json_output(text).unwrap();
        assert_eq!(value["explanation"], "Use ``` to open a code block");
    }

    #[test]
    fn test_unclosed_fence_is_rejected() {
        assert!(parse_json_output("```json\n{\"a\": 1").is_err());
    }

    #[test]
    fn test_accepts_semantically_wrong_json() {
        let value = parse_json_output(r#"{"unexpected": true}"#).unwrap();
        assert_eq!(value, json!({"unexpected": true}));
    }

    #[test]
    fn test_rejects_prose() {
        let err = parse_json_output("Sorry, I cannot help with that.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid json output: Sorry, I cannot help with that."
        );
    }

    #[test]
    fn test_rejects_truncated_json() {
        let err = parse_json_output(r#"{"title": "Rust", "questions": [{"query":"#).unwrap_err();
        let OutputParserError::InvalidJson { text, .. } = err;
        assert!(text.starts_with(r#"{"title""#));
    }

    #[test]
    fn test_rejects_empty_output() {
        assert!(parse_json_output("   ").is_err());
    }

    #[test]
    fn test_rejects_missing_comma() {
        let text = r#"{"explanation": "because" "timer": 10}"#;
        assert!(parse_json_output(text).is_err());
    }
}
