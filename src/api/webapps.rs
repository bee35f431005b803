use serde_json::Value;

use super::client::api_call;
use super::error::DeployError;
use crate::models::DeploymentRequest;
use crate::utils::json_to_text;

pub const WEBAPPS_ENDPOINT: &str = "/api/webapps/";

/// The parts of a create response the wizard uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedWebapp {
    pub id: Option<String>,
    pub public_ip: Option<String>,
}

impl CreatedWebapp {
    pub fn from_value(v: &Value) -> Self {
        CreatedWebapp {
            id: non_empty(v.get("id")),
            public_ip: non_empty(v.get("public_ip")),
        }
    }
}

/// Status of a webapp as reported by `GET /api/webapps/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebappStatus {
    Pending(String),
    Live { public_ip: Option<String> },
    Failed(String),
}

impl WebappStatus {
    pub fn from_value(v: &Value) -> Self {
        let raw = v
            .pointer("/environment/instance/0/status")
            .or_else(|| v.get("status"))
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .trim()
            .to_lowercase();
        match raw.as_str() {
            "running" | "active" | "live" | "deployed" => WebappStatus::Live {
                public_ip: non_empty(v.get("public_ip")),
            },
            "failed" | "error" => WebappStatus::Failed(
                non_empty(v.get("error")).unwrap_or_else(|| format!("Instance reported status '{}'", raw)),
            ),
            _ => WebappStatus::Pending(raw),
        }
    }
}

fn non_empty(v: Option<&Value>) -> Option<String> {
    v.map(json_to_text).filter(|s| !s.trim().is_empty())
}

/// Submit a deployment request.
pub async fn create_webapp(
    client: &reqwest::Client,
    api_base_url: &str,
    request: &DeploymentRequest,
) -> Result<CreatedWebapp, DeployError> {
    let body = serde_json::to_value(request).map_err(|e| DeployError::Decode(e.to_string()))?;
    let payload = api_call(client, api_base_url, "POST", WEBAPPS_ENDPOINT, Some(body)).await?;
    Ok(CreatedWebapp::from_value(&payload))
}

/// Probe the current status of a created webapp.
pub async fn fetch_webapp_status(
    client: &reqwest::Client,
    api_base_url: &str,
    webapp_id: &str,
) -> Result<WebappStatus, DeployError> {
    let endpoint = format!("{}{}/", WEBAPPS_ENDPOINT, urlencoding::encode(webapp_id));
    let payload = api_call(client, api_base_url, "GET", &endpoint, None).await?;
    Ok(WebappStatus::from_value(&payload))
}
