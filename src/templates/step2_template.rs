use askama::Template;

use crate::models::{Notice, PlanDetail, StepMark};

/// Step-1 selection carried through the configuration form.
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

pub struct EnvRowView {
    pub index: usize,
    pub key: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "step_2.html")]
pub struct Step2Template<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub notices: Vec<Notice>,
    pub has_notices: bool,
    pub steps: Vec<StepMark>,
    pub hidden_fields: Vec<HiddenField>,
    pub app_name: String,
    pub repo_url: String,
    pub branch: String,
    pub region_label: String,
    pub framework_label: String,
    pub plan: &'a PlanDetail,
    pub use_database: bool,
    pub port_random: bool,
    pub custom_port: String,
    pub env_rows: Vec<EnvRowView>,
    pub can_remove_env: bool,
    pub submission_id: String,
    pub is_submitting: bool,
    pub submit_blocked: bool,
    pub back_url: String,
    pub submit_url: String,
}

crate::impl_base_template!(Step2Template<'_>);
