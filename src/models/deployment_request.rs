use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::env_variable::EnvVariables;
use super::form_data::FormData;
use super::plan::{PlanCatalog, PlanTier};

pub const DEFAULT_OWNER: &str = "user";
pub const INITIAL_INSTANCE_STATUS: &str = "pending";

/// Body of `POST /api/webapps/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub name: String,
    pub owner: String,
    pub region: String,
    pub template: String,
    pub plan_type: PlanTier,
    pub repo_url: String,
    pub environment: DeploymentEnvironment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEnvironment {
    pub port: u16,
    pub env_vars: BTreeMap<String, String>,
    pub instance: Vec<InstanceSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSpec {
    pub cpu: u32,
    /// MB
    pub ram: u32,
    /// GB
    pub storage: u32,
    pub status: String,
}

impl DeploymentRequest {
    pub fn build(form: &FormData, plans: &PlanCatalog, env: &EnvVariables, port: u16) -> Self {
        let plan = plans.detail(form.plan_type);
        DeploymentRequest {
            name: form.app_name.clone(),
            owner: DEFAULT_OWNER.to_string(),
            region: form.region.clone(),
            template: form.framework.clone(),
            plan_type: form.plan_type,
            repo_url: form.repo_url(),
            environment: DeploymentEnvironment {
                port,
                env_vars: env.to_env_map(),
                instance: vec![InstanceSpec {
                    cpu: plan.cpu,
                    ram: plan.memory,
                    storage: plan.storage,
                    status: INITIAL_INSTANCE_STATUS.to_string(),
                }],
            },
        }
    }
}
