pub mod deployment_service;
pub mod tracking_service;
pub mod wizard_service;

// Re-export commonly used functions
pub use deployment_service::{failure_notice, started_notice, submit_deployment, success_notice, SubmittedDeployment};
pub use tracking_service::{resolve_deployment, TrackingOutcome};
pub use wizard_service::{
    build_form_query_pairs, continue_disabled, parse_env_rows, parse_form_data, parse_port_selection,
    submit_disabled, wizard_url, WizardHandoff,
};
