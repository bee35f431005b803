use kuberns::config;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Tests touching process environment run one at a time.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.kuberns.com/"),
        "https://api.kuberns.com"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.kuberns.com"),
        "https://api.kuberns.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.kuberns.com///"),
        "https://api.kuberns.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.kuberns.com/  "),
        "https://api.kuberns.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), config::FALLBACK_API_BASE_URL);
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:5000");
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    let _g = env_guard();
    env::set_var("API_BASE_URL", "https://api.kuberns.com/");

    assert_eq!(config::get_api_base_url(), "https://api.kuberns.com");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_default() {
    let _g = env_guard();
    env::remove_var("API_BASE_URL");

    // DEFAULT_API_BASE_URL is empty, so sanitize_base_url returns localhost fallback
    assert_eq!(config::get_api_base_url(), "http://localhost:5000");
}

#[test]
fn test_public_base_url_may_be_empty() {
    let _g = env_guard();
    env::remove_var("PUBLIC_BASE_URL");
    assert_eq!(config::get_public_base_url(), "");

    env::set_var("PUBLIC_BASE_URL", "https://deploy.example.com/");
    assert_eq!(config::get_public_base_url(), "https://deploy.example.com");
    env::remove_var("PUBLIC_BASE_URL");
}

#[test]
fn test_notice_delay_defaults_to_three_seconds() {
    let _g = env_guard();
    env::remove_var("DEPLOY_NOTICE_DELAY_SECS");
    assert_eq!(config::get_notice_delay(), Duration::from_secs(3));
}

#[test]
fn test_notice_delay_reads_env() {
    let _g = env_guard();
    env::set_var("DEPLOY_NOTICE_DELAY_SECS", " 10 ");
    assert_eq!(config::get_notice_delay(), Duration::from_secs(10));
    env::remove_var("DEPLOY_NOTICE_DELAY_SECS");
}

#[test]
fn test_poll_interval_ignores_garbage() {
    let _g = env_guard();
    env::set_var("DEPLOY_POLL_INTERVAL_SECS", "soon");
    assert_eq!(
        config::get_poll_interval(),
        Duration::from_secs(config::DEFAULT_POLL_INTERVAL_SECS)
    );
    env::remove_var("DEPLOY_POLL_INTERVAL_SECS");
}
