use axum::response::{Html, IntoResponse, Response};
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Notice};
use crate::templates::BaseTemplate;

pub const SESSION_COOKIE: &str = "session_id";

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Queue a notice for the next page rendered in this session.
pub fn push_notice(state: &AppState, jar: &CookieJar, notice: Notice) {
    match session_id_from_jar(jar) {
        Some(sid) => state.push_notice(&sid, notice),
        None => tracing::debug!(title = %notice.title, "Dropping notice without session"),
    }
}

pub fn take_notices(state: &AppState, jar: &CookieJar) -> Vec<Notice> {
    match session_id_from_jar(jar) {
        Some(sid) => state.take_notices(&sid),
        None => vec![],
    }
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub api_hostname: String,
    pub base_url: String,
    pub notices: Vec<Notice>,
    pub has_notices: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let notices = take_notices(state, jar);
    let has_notices = !notices.is_empty();
    TemplateGlobals {
        api_hostname: crate::utils::hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        notices,
        has_notices,
    }
}

/// Prefixes a site path with the public base URL. An empty base keeps links relative.
pub fn absolute_url_from_state(state: &AppState, path: &str) -> String {
    match state.public_base_url.trim_end_matches('/') {
        "" => path.to_string(),
        base => format!("{}/{}", base, path.trim_start_matches('/')),
    }
}

pub fn render_template<T: askama::Template + BaseTemplate>(t: T) -> Response {
    if t.has_notices() {
        tracing::debug!(count = t.notices().len(), "Rendering page with notices");
    }
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::absolute_url_from_state;
    use crate::models::AppState;

    #[test]
    fn empty_base_keeps_links_relative() {
        let state = AppState::new("http://127.0.0.1:9", "", reqwest::Client::new());
        assert_eq!(absolute_url_from_state(&state, "/create/step-2"), "/create/step-2");
    }

    #[test]
    fn joins_public_base_once() {
        let state = AppState::new("http://127.0.0.1:9", "https://deploy.example.com/", reqwest::Client::new());
        assert_eq!(
            absolute_url_from_state(&state, "/deployments/ab"),
            "https://deploy.example.com/deployments/ab"
        );
    }
}
