use std::time::Instant;

/// A submitted deployment waiting for its success notice.
#[derive(Debug, Clone)]
pub struct PendingDeployment {
    pub app_name: String,
    pub public_ip: Option<String>,
    /// Identifier returned by the API, used to look up status.
    pub webapp_id: Option<String>,
    pub started_at: Instant,
}

impl PendingDeployment {
    pub fn new(app_name: impl Into<String>, public_ip: Option<String>, webapp_id: Option<String>) -> Self {
        Self {
            app_name: app_name.into(),
            public_ip,
            webapp_id,
            started_at: Instant::now(),
        }
    }
}
