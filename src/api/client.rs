use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::{DeployError, GENERIC_SERVER_ERROR};
use crate::utils::json_to_text;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

fn log_curl(method: &str, url: &str, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Best-effort user-facing message from a failed response body.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").cloned())
        .map(|e| json_to_text(&e))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// Core HTTP client function for making API calls.
/// Non-2xx responses become `DeployError::Server`; 2xx bodies must be JSON or empty.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
) -> Result<Value, DeployError> {
    let url = format!("{}{}", api_base_url, endpoint);
    log_curl(method, &url, body.as_ref());

    let mut req = match method {
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };
    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = req.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    log_output(format!(
        "Response ({}):\n{}",
        status.as_u16(),
        Paint::new(&text).rgb(100, 100, 100)
    ));

    if !status.is_success() {
        return Err(DeployError::Server {
            status: status.as_u16(),
            message: error_message_from_body(&text),
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| DeployError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_error_field() {
        assert_eq!(error_message_from_body(r#"{"error":"App name already taken"}"#), "App name already taken");
    }

    #[test]
    fn flattens_structured_errors() {
        assert_eq!(error_message_from_body(r#"{"error":{"name":["required"]}}"#), "name: required");
    }

    #[test]
    fn falls_back_to_generic_message() {
        assert_eq!(error_message_from_body(r#"{"detail":"nope"}"#), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message_from_body(r#"{"error":""}"#), GENERIC_SERVER_ERROR);
    }
}
