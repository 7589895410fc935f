//! Parser for subtask lists returned by a provider

use crate::error::GenerationError;
use serde_json::Value;
use tracing::debug;

/// Parse the raw provider output into subtask descriptions
///
/// Accepts `{"tasks": [...]}` (or `subtasks`), a bare JSON array, either of
/// them wrapped in the CLI's `{"result": "..."}` envelope, fenced in a
/// markdown code block, or embedded in surrounding prose.
pub fn parse_subtasks(raw: &str) -> Result<Vec<String>, GenerationError> {
    // Claude wraps result in {"result": "...", ...} JSON
    #[derive(serde::Deserialize)]
    struct ClaudeOutput {
        result: String,
    }

    if let Ok(claude_out) = serde_json::from_str::<ClaudeOutput>(raw) {
        if let Some(tasks) = try_parse_tasks(&claude_out.result)? {
            return Ok(tasks);
        }
    }

    if let Some(tasks) = try_parse_tasks(raw)? {
        return Ok(tasks);
    }

    debug!(
        "Failed to parse subtasks from: {}...",
        raw.chars().take(200).collect::<String>()
    );
    Err(GenerationError::ParseOutput(
        "no task list found in provider output".to_string(),
    ))
}

fn try_parse_tasks(s: &str) -> Result<Option<Vec<String>>, GenerationError> {
    let Some(value) = extract_json(s) else {
        return Ok(None);
    };

    let list = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("tasks").or_else(|| map.get("subtasks")) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(GenerationError::ParseOutput(
                    "'tasks' is not a list".to_string(),
                ))
            }
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    list.iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(text) => Ok(text.clone()),
            other => Err(GenerationError::ParseOutput(format!(
                "task {} is not a string: {}",
                i + 1,
                other
            ))),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Extract a JSON object or array from a string that might contain markdown code blocks
fn extract_json(s: &str) -> Option<Value> {
    let trimmed = s.trim();

    // First try: the whole string is valid JSON
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            return Some(value);
        }
    }

    // Second try: extract from markdown code block
    let re = regex::Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").ok()?;
    for cap in re.captures_iter(s) {
        let potential_json = cap.get(1)?.as_str().trim();
        if let Ok(value) = serde_json::from_str::<Value>(potential_json) {
            return Some(value);
        }
    }

    // Third try: first JSON object embedded in prose; trailing text is ignored
    s.match_indices('{').find_map(|(start, _)| {
        serde_json::Deserializer::from_str(&s[start..])
            .into_iter::<Value>()
            .next()
            .and_then(Result::ok)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direct_json() {
        let json = r#"{"tasks": ["Draft outline", "Write body", "Edit"]}"#;
        let tasks = parse_subtasks(json).unwrap();
        assert_eq!(tasks, vec!["Draft outline", "Write body", "Edit"]);
    }

    #[test]
    fn test_parse_claude_wrapper() {
        let raw = r#"{"type": "result", "result": "```json\n{\"tasks\": [\"Outline\", \"Write\"]}\n```"}"#;
        let tasks = parse_subtasks(raw).unwrap();
        assert_eq!(tasks, vec!["Outline", "Write"]);
    }

    #[test]
    fn test_parse_markdown_wrapped() {
        let md = r#"
Here is the breakdown:

```json
{"subtasks": ["Collect receipts", "Fill in the form"]}
```
"#;
        let tasks = parse_subtasks(md).unwrap();
        assert_eq!(tasks, vec!["Collect receipts", "Fill in the form"]);
    }

    #[test]
    fn test_parse_object_in_prose() {
        let raw = r#"Sure! {"tasks": ["Plan", "Do"]} Good luck."#;
        assert_eq!(parse_subtasks(raw).unwrap(), vec!["Plan", "Do"]);
    }

    #[test]
    fn test_parse_object_in_prose_with_braces_in_strings() {
        let raw = r#"Here: {"tasks": ["Fix the } key", "Test {x}"]} done"#;
        assert_eq!(
            parse_subtasks(raw).unwrap(),
            vec!["Fix the } key", "Test {x}"]
        );

        let raw = r#"Use {braces} like this: {"tasks": ["Plan"]}"#;
        assert_eq!(parse_subtasks(raw).unwrap(), vec!["Plan"]);
    }

    #[test]
    fn test_parse_bare_array() {
        let raw = r#"["One", "Two"]"#;
        assert_eq!(parse_subtasks(raw).unwrap(), vec!["One", "Two"]);
    }

    #[test]
    fn test_non_string_entry_is_rejected() {
        let raw = r#"{"tasks": ["Plan", 42]}"#;
        assert!(matches!(
            parse_subtasks(raw),
            Err(GenerationError::ParseOutput(_))
        ));
    }

    #[test]
    fn test_no_json_is_rejected() {
        assert!(matches!(
            parse_subtasks("I cannot help with that."),
            Err(GenerationError::ParseOutput(_))
        ));
        assert!(matches!(
            parse_subtasks(r#"{"answer": "no list here"}"#),
            Err(GenerationError::ParseOutput(_))
        ));
    }

    #[test]
    fn test_empty_list_parses_to_empty() {
        // Emptiness is rejected when the list is built, not here
        assert!(parse_subtasks(r#"{"tasks": []}"#).unwrap().is_empty());
    }
}
