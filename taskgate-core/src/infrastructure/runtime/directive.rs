use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
pub(super) enum AgentDirective {
    Think { thought: String },
    Final { response: String },
}

/// Reads the model's directive. Anything that is not a recognised directive
/// is taken as a final answer in plain text.
pub(super) fn parse_directive(content: &str) -> AgentDirective {
    let plain = || AgentDirective::Final {
        response: content.trim().to_string(),
    };

    let Some(Value::Object(map)) = extract_json(content) else {
        return plain();
    };

    let text = |field: &str| map.get(field).and_then(Value::as_str).map(str::to_string);
    match map.get("action").and_then(Value::as_str) {
        Some("final") => match text("response") {
            Some(response) => AgentDirective::Final { response },
            None => plain(),
        },
        Some("think") => AgentDirective::Think {
            thought: text("thought").unwrap_or_default(),
        },
        _ => plain(),
    }
}

fn extract_json(content: &str) -> Option<Value> {
    let trimmed = content.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    if trimmed.starts_with("```") {
        let stripped = trimmed.trim_start_matches("```json");
        let stripped = stripped.trim_start_matches("```JSON");
        let stripped = stripped.trim_start_matches("```");
        if let Some(end) = stripped.rfind("```") {
            if let Ok(value) = serde_json::from_str::<Value>(stripped[..end].trim()) {
                return Some(value);
            }
        }
    }

    None
}
