use serde_json::Value;

/// Flattens a JSON value into one line of text for a notice.
/// Field maps such as `{"name": ["taken"]}` become `name: taken`.
pub fn json_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => join_non_empty(items.iter().map(json_to_text)),
        Value::Object(fields) => join_non_empty(fields.iter().map(|(key, v)| match json_to_text(v) {
            text if text.is_empty() => String::new(),
            text => format!("{}: {}", key, text),
        })),
    }
}

fn join_non_empty(parts: impl Iterator<Item = String>) -> String {
    parts.filter(|p| !p.is_empty()).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::json_to_text;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(json_to_text(&json!(" quota exceeded ")), "quota exceeded");
        assert_eq!(json_to_text(&json!(42)), "42");
        assert_eq!(json_to_text(&json!(null)), "");
    }

    #[test]
    fn field_errors_are_labelled() {
        let v = json!({"name": ["already taken"], "region": [], "port": "out of range"});
        assert_eq!(json_to_text(&v), "name: already taken; port: out of range");
    }
}
