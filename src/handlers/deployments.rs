use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::handlers::helpers::{
    absolute_url_from_state, build_template_globals, push_notice, render_template, TemplateGlobals,
};
use crate::handlers::wizard::STEP_1_PATH;
use crate::models::{AppState, SubmissionOutcome};
use crate::services::{failure_notice, resolve_deployment, success_notice, TrackingOutcome};
use crate::templates::DeploymentPendingTemplate;
use crate::utils::format_status;

pub fn tracking_path(tracking_id: &str) -> String {
    format!("/deployments/{}", tracking_id)
}

fn submission_path(submission_id: &str) -> String {
    format!("/submissions/{}", urlencoding::encode(submission_id))
}

/// Waiting page for a submission whose create call has not returned yet.
/// It polls the submission route, which hands over to tracking once known.
pub fn render_submission_wait(state: &AppState, jar: &CookieJar, app_name: &str, submission_id: &str) -> Response {
    let TemplateGlobals {
        api_hostname,
        base_url,
        notices,
        has_notices,
    } = build_template_globals(state, jar);
    render_template(DeploymentPendingTemplate {
        api_hostname,
        base_url,
        notices,
        has_notices,
        app_name: app_name.to_string(),
        status_label: "Submitting".to_string(),
        refresh_secs: state.poll_interval.as_secs().max(1),
        status_url: absolute_url_from_state(state, &submission_path(submission_id)),
        restart_url: absolute_url_from_state(state, STEP_1_PATH),
    })
}

pub async fn submission_status_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(submission_id): Path<String>,
) -> Response {
    if let Some(SubmissionOutcome::Tracked(tracking_id)) = state.submission_outcome(&submission_id) {
        return Redirect::to(&tracking_path(&tracking_id)).into_response();
    }
    if let Some(message) = state.take_failed_submission(&submission_id) {
        push_notice(&state, &jar, failure_notice(&message));
        return Redirect::to("/").into_response();
    }
    match state.submitting_app(&submission_id) {
        Some(app_name) => render_submission_wait(&state, &jar, &app_name, &submission_id),
        None => Redirect::to("/").into_response(),
    }
}

/// Tracking page shown after a deployment is accepted. Refreshes itself
/// until the deployment resolves, then returns to the wizard start.
pub async fn deployment_status_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(tracking_id): Path<String>,
) -> Response {
    match resolve_deployment(&state, &tracking_id).await {
        None => Redirect::to("/").into_response(),
        Some(TrackingOutcome::Pending { app_name, status }) => {
            let TemplateGlobals {
                api_hostname,
                base_url,
                notices,
                has_notices,
            } = build_template_globals(&state, &jar);
            render_template(DeploymentPendingTemplate {
                api_hostname,
                base_url,
                notices,
                has_notices,
                app_name,
                status_label: format_status(&status),
                refresh_secs: state.poll_interval.as_secs().max(1),
                status_url: absolute_url_from_state(&state, &tracking_path(&tracking_id)),
                restart_url: absolute_url_from_state(&state, STEP_1_PATH),
            })
        }
        Some(TrackingOutcome::Live { public_ip }) => {
            push_notice(&state, &jar, success_notice(public_ip.as_deref()));
            Redirect::to("/").into_response()
        }
        Some(TrackingOutcome::Failed { message }) => {
            push_notice(&state, &jar, failure_notice(&message));
            Redirect::to("/").into_response()
        }
    }
}
