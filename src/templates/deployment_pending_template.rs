use askama::Template;

use crate::models::Notice;

#[derive(Template)]
#[template(path = "deployment_pending.html")]
pub struct DeploymentPendingTemplate {
    pub api_hostname: String,
    pub base_url: String,
    pub notices: Vec<Notice>,
    pub has_notices: bool,
    pub app_name: String,
    pub status_label: String,
    pub refresh_secs: u64,
    pub status_url: String,
    pub restart_url: String,
}

crate::impl_base_template!(DeploymentPendingTemplate);
