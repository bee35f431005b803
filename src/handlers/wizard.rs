use axum::{
    body::Bytes,
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::collections::HashMap;

use crate::handlers::deployments::{render_submission_wait, tracking_path};
use crate::handlers::helpers::{
    absolute_url_from_state, build_template_globals, push_notice, render_template, TemplateGlobals,
};
use crate::models::catalog::{BRANCHES, FRAMEWORKS, ORGANIZATIONS, REGIONS, REPOSITORIES};
use crate::models::{
    label_for, option_views, AppState, EnvVariables, FormData, PendingDeployment, PlanCatalog, PortMode,
    PortSelection, StepIndicator, SubmissionOutcome,
};
use crate::services::{
    build_form_query_pairs, continue_disabled, failure_notice, parse_env_rows, parse_form_data,
    parse_port_selection, started_notice, submit_deployment, submit_disabled, wizard_url, WizardHandoff,
};
use crate::templates::*;
use crate::utils::{first_values, parse_optional_index, parse_urlencoded_body, random_token};

pub const STEP_1_PATH: &str = "/create/step-1";
pub const STEP_2_PATH: &str = "/create/step-2";

pub async fn root_get() -> Redirect {
    Redirect::to(STEP_1_PATH)
}

// ---------- Wizard Step 1 (Selection) ----------

fn render_step_1(state: &AppState, jar: &CookieJar, form: FormData) -> Response {
    let TemplateGlobals {
        api_hostname,
        base_url,
        notices,
        has_notices,
    } = build_template_globals(state, jar);
    let plans = PlanCatalog
        .tiers()
        .map(|(tier, detail)| PlanOptionView {
            id: tier.id(),
            detail,
            selected: tier == form.plan_type,
        })
        .collect();
    let organizations = option_views(ORGANIZATIONS, &form.organization);
    let repositories = option_views(REPOSITORIES, &form.repository);
    let branches = option_views(BRANCHES, &form.branch);
    let regions = option_views(REGIONS, &form.region);
    let frameworks = option_views(FRAMEWORKS, &form.framework);
    render_template(Step1Template {
        api_hostname,
        base_url,
        notices,
        has_notices,
        steps: StepIndicator::wizard(1).marks(),
        organizations,
        repositories,
        branches,
        regions,
        frameworks,
        plans,
        continue_disabled: continue_disabled(&form),
        submit_url: absolute_url_from_state(state, STEP_1_PATH),
        form,
    })
}

/// Query parameters pre-fill the form, so "Back" from step 2 keeps the selection.
pub async fn create_step_1_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    render_step_1(&state, &jar, parse_form_data(&q))
}

pub async fn create_step_1_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(f): Form<HashMap<String, String>>,
) -> Response {
    let mut form = parse_form_data(&f);
    if f.get("action").map(String::as_str) == Some("use_database") {
        form.use_database = true;
        return render_step_1(&state, &jar, form);
    }
    if continue_disabled(&form) {
        tracing::debug!(missing = ?form.missing_fields(), "Continue withheld on incomplete selection");
        return render_step_1(&state, &jar, form);
    }
    tracing::info!(app = %form.app_name, plan = %form.plan_type, region = %form.region, "Selection complete");
    Redirect::to(&wizard_url(STEP_2_PATH, &form)).into_response()
}

// ---------- Wizard Step 2 (Configuration & submit) ----------

fn render_step_2(
    state: &AppState,
    jar: &CookieJar,
    handoff: &WizardHandoff,
    port: &PortSelection,
    env: &EnvVariables,
    submission_id: &str,
) -> Response {
    let is_submitting = state.is_submitting(submission_id);
    let form = &handoff.form_data;
    let TemplateGlobals {
        api_hostname,
        base_url,
        notices,
        has_notices,
    } = build_template_globals(state, jar);
    let hidden_fields = build_form_query_pairs(form)
        .into_iter()
        .map(|(name, value)| HiddenField { name, value })
        .collect();
    let env_rows = env
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| EnvRowView {
            index,
            key: row.key.clone(),
            value: row.value.clone(),
        })
        .collect();
    render_template(Step2Template {
        api_hostname,
        base_url,
        notices,
        has_notices,
        steps: StepIndicator::wizard(2).marks(),
        hidden_fields,
        app_name: form.app_name.clone(),
        repo_url: form.repo_url(),
        branch: form.branch.clone(),
        region_label: label_for(REGIONS, &form.region),
        framework_label: label_for(FRAMEWORKS, &form.framework),
        plan: handoff.selected_plan(),
        use_database: form.use_database,
        port_random: port.mode == PortMode::Random,
        custom_port: port.custom_port.clone(),
        env_rows,
        can_remove_env: env.can_remove(),
        submission_id: submission_id.to_string(),
        is_submitting,
        submit_blocked: submit_disabled(is_submitting, port),
        back_url: absolute_url_from_state(state, &wizard_url(STEP_1_PATH, form)),
        submit_url: absolute_url_from_state(state, STEP_2_PATH),
    })
}

pub async fn create_step_2_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let Some(handoff) = WizardHandoff::from_params(&q) else {
        tracing::debug!("Configuration step reached without a selection; restarting wizard");
        return Redirect::to(STEP_1_PATH).into_response();
    };
    render_step_2(
        &state,
        &jar,
        &handoff,
        &PortSelection::default(),
        &EnvVariables::default(),
        &random_token(),
    )
}

pub async fn create_step_2_post(State(state): State<AppState>, jar: CookieJar, body: Bytes) -> Response {
    let parsed = parse_urlencoded_body(&body);
    let fields = first_values(&parsed);
    let Some(handoff) = WizardHandoff::from_params(&fields) else {
        tracing::debug!("Configuration form posted without a selection; restarting wizard");
        return Redirect::to(STEP_1_PATH).into_response();
    };
    let port = parse_port_selection(&fields);
    let mut env = parse_env_rows(&parsed);
    let submission_id = fields
        .get("submission_id")
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(random_token);

    match fields.get("action").map(String::as_str).unwrap_or("") {
        "submit" => return submit_step_2(&state, &jar, &handoff, &port, &env, &submission_id).await,
        "add_env" => env.push_empty(),
        other => {
            if let Some(index) = parse_optional_index(other.strip_prefix("remove_env:")) {
                env.remove(index);
            }
        }
    }
    render_step_2(&state, &jar, &handoff, &port, &env, &submission_id)
}

async fn submit_step_2(
    state: &AppState,
    jar: &CookieJar,
    handoff: &WizardHandoff,
    port: &PortSelection,
    env: &EnvVariables,
    submission_id: &str,
) -> Response {
    if let Some(SubmissionOutcome::Tracked(tracking_id)) = state.submission_outcome(submission_id) {
        return Redirect::to(&tracking_path(&tracking_id)).into_response();
    }
    if let Some(app_name) = state.submitting_app(submission_id) {
        return render_submission_wait(state, jar, &app_name, submission_id);
    }
    if submit_disabled(false, port) {
        return render_step_2(state, jar, handoff, port, env, submission_id);
    }
    let app_name = &handoff.form_data.app_name;
    let Some(guard) = state.begin_submission(submission_id, app_name) else {
        return render_submission_wait(state, jar, app_name, submission_id);
    };
    let result = submit_deployment(&state.client, &state.api_base_url, handoff, port, env).await;

    // Outcome is recorded before the guard drops so a waiting page always finds one.
    match result {
        Ok(submitted) => {
            let app_name = submitted.request.name;
            let public_ip = submitted.created.public_ip;
            push_notice(state, jar, started_notice(&app_name, public_ip.as_deref()));
            let tracking_id = state.track_deployment(PendingDeployment::new(app_name, public_ip, submitted.created.id));
            state.record_submission(submission_id, SubmissionOutcome::Tracked(tracking_id.clone()));
            drop(guard);
            Redirect::to(&tracking_path(&tracking_id)).into_response()
        }
        Err(e) => {
            tracing::error!(%e, app = %app_name, "Deployment error");
            state.record_submission(submission_id, SubmissionOutcome::Failed(e.to_string()));
            drop(guard);
            push_notice(state, jar, failure_notice(&e.to_string()));
            // A retry is a new submission.
            render_step_2(state, jar, handoff, port, env, &random_token())
        }
    }
}
