pub mod app_state;
pub mod catalog;
pub mod deployment_request;
pub mod env_variable;
pub mod form_data;
pub mod notice;
pub mod pending_deployment;
pub mod plan;
pub mod port;
pub mod step_indicator;

pub use app_state::{AppState, SubmissionGuard, SubmissionOutcome};
pub use catalog::{label_for, option_views, OptionView, SelectOption};
pub use deployment_request::{DeploymentEnvironment, DeploymentRequest, InstanceSpec};
pub use env_variable::{EnvVariable, EnvVariables};
pub use form_data::FormData;
pub use notice::Notice;
pub use pending_deployment::PendingDeployment;
pub use plan::{PlanCatalog, PlanDetail, PlanTier, UnknownPlanTier};
pub use port::{random_port, PortMode, PortSelection, RANDOM_PORT_MAX, RANDOM_PORT_MIN};
pub use step_indicator::{StepIndicator, StepMark, StepState};
