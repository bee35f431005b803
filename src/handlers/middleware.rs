use axum::{
    extract::Request,
    http::{header::COOKIE, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::handlers::helpers::SESSION_COOKIE;
use crate::utils::random_token;

/// Gives every visitor a session cookie so notices survive redirects.
/// A freshly issued id is also added to the current request.
pub async fn session_middleware(jar: CookieJar, mut request: Request, next: Next) -> Response {
    if jar.get(SESSION_COOKIE).is_some() {
        return next.run(request).await;
    }
    let sid = random_token();
    if let Ok(value) = HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, sid)) {
        request.headers_mut().append(COOKIE, value);
    }
    let response = next.run(request).await;
    let mut cookie = Cookie::new(SESSION_COOKIE, sid);
    cookie.set_path("/");
    cookie.set_http_only(true);
    (jar.add(cookie), response).into_response()
}
