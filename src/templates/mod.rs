// Base template trait shared by every page
pub mod base_template;
pub use base_template::BaseTemplate;

// Wizard templates
pub mod step1_template;
pub mod step2_template;
pub mod deployment_pending_template;

pub use step1_template::{PlanOptionView, Step1Template};
pub use step2_template::{EnvRowView, HiddenField, Step2Template};
pub use deployment_pending_template::DeploymentPendingTemplate;
