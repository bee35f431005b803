use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_NOTICE_DELAY_SECS: u64 = 3;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Base URL of the deployment API (`API_BASE_URL`), without trailing slashes.
pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Public URL this server is reachable at. Empty means links stay relative.
pub fn get_public_base_url() -> String {
    trim_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

/// How long a submitted deployment waits for a terminal status before it is
/// reported live.
pub fn get_notice_delay() -> Duration {
    Duration::from_secs(parse_secs("DEPLOY_NOTICE_DELAY_SECS", DEFAULT_NOTICE_DELAY_SECS))
}

/// Refresh interval of the deployment tracking page.
pub fn get_poll_interval() -> Duration {
    Duration::from_secs(parse_secs("DEPLOY_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS))
}

fn parse_secs(var: &str, default: u64) -> u64 {
    match env::var(var) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(var, value = %raw, default, "Ignoring non-numeric duration");
                default
            }
        },
        Err(_) => default,
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = trim_base_url(raw);
    if trimmed.is_empty() {
        FALLBACK_API_BASE_URL.to_string()
    } else {
        trimmed
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
