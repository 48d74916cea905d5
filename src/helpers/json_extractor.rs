use serde_json::{Map, Value};
use crate::enums::ai_provider_error::AiProviderError;

/// Pulls a JSON object out of a model response: the whole body if it parses,
/// otherwise the span from the first `{` to the last `}`, otherwise the first
/// balanced `{...}` block.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, AiProviderError> {
    if let Some(object) = parse_object(raw.trim()) {
        return Ok(object);
    }

    let start = raw.find('{')
        .ok_or_else(|| AiProviderError::MalformedResponse("response contains no JSON object".to_string()))?;

    if let Some(end) = raw.rfind('}') {
        if end > start {
            if let Some(object) = parse_object(&raw[start..=end]) {
                return Ok(object);
            }
        }
    }

    balanced_span(&raw[start..])
        .and_then(parse_object)
        .ok_or_else(|| AiProviderError::MalformedResponse("could not parse response as JSON".to_string()))
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// `text` must start with `{`. Braces inside string literals are ignored.
fn balanced_span(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=index]);
                }
            }
            _ => {}
        }
    }

    None
}
