// Atomic API modules
pub mod client;
pub mod error;
pub mod webapps;

// Re-export commonly used functions
pub use client::{api_call, error_message_from_body, set_silent};
pub use error::{DeployError, GENERIC_SERVER_ERROR};
pub use webapps::{create_webapp, fetch_webapp_status, CreatedWebapp, WebappStatus, WEBAPPS_ENDPOINT};
