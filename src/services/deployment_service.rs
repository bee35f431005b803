use crate::api::{create_webapp, CreatedWebapp, DeployError};
use crate::models::{DeploymentRequest, EnvVariables, Notice, PortSelection};
use crate::services::wizard_service::WizardHandoff;

pub const STARTED_TITLE: &str = "Deployment Started!";
pub const SUCCESS_TITLE: &str = "Deployment Successful!";
pub const FAILED_TITLE: &str = "Deployment Failed!";

#[derive(Debug, Clone)]
pub struct SubmittedDeployment {
    pub request: DeploymentRequest,
    pub created: CreatedWebapp,
}

/// Resolve the port, build the payload and send it. One attempt, no retry.
pub async fn submit_deployment(
    client: &reqwest::Client,
    api_base_url: &str,
    handoff: &WizardHandoff,
    port: &PortSelection,
    env: &EnvVariables,
) -> Result<SubmittedDeployment, DeployError> {
    let port = port.resolve()?;
    let request = DeploymentRequest::build(&handoff.form_data, &handoff.plans, env, port);
    tracing::info!(
        app = %request.name,
        plan = %request.plan_type,
        region = %request.region,
        port,
        env_vars = request.environment.env_vars.len(),
        "Submitting deployment"
    );
    let created = create_webapp(client, api_base_url, &request).await?;
    tracing::info!(app = %request.name, webapp_id = ?created.id, public_ip = ?created.public_ip, "Deployment accepted");
    Ok(SubmittedDeployment { request, created })
}

pub fn started_notice(app_name: &str, public_ip: Option<&str>) -> Notice {
    Notice::info(
        STARTED_TITLE,
        format!(
            "Your app \"{}\" is being deployed. Public IP: {}",
            app_name,
            public_ip.unwrap_or("N/A")
        ),
    )
}

pub fn success_notice(public_ip: Option<&str>) -> Notice {
    let location = match public_ip {
        Some(ip) => format!("http://{}", ip),
        None => "a random IP".to_string(),
    };
    Notice::info(SUCCESS_TITLE, format!("Your app is now live at {}", location))
}

pub fn failure_notice(message: &str) -> Notice {
    Notice::destructive(FAILED_TITLE, format!("Error: {}", message))
}
