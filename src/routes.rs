use axum::{http::header::CONTENT_TYPE, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

/// Stylesheet compiled into the binary.
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    build_router_with_stylesheet(state, DEFAULT_STYLESHEET.to_string())
}

pub fn build_router_with_stylesheet(state: AppState, stylesheet: String) -> Router {
    Router::new()
        .route("/", get(handlers::wizard::root_get))
        .route(
            "/create/step-1",
            get(handlers::wizard::create_step_1_get).post(handlers::wizard::create_step_1_post),
        )
        .route(
            "/create/step-2",
            get(handlers::wizard::create_step_2_get).post(handlers::wizard::create_step_2_post),
        )
        .route("/deployments/:tracking_id", get(handlers::deployments::deployment_status_get))
        .route(
            "/submissions/:submission_id",
            get(handlers::deployments::submission_status_get),
        )
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(handlers::middleware::session_middleware)),
        )
        .with_state(state)
}
