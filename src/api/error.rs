/// Error types for calls to the deployment API
use thiserror::Error;

/// Fallback shown when a failed response carries no `error` field.
pub const GENERIC_SERVER_ERROR: &str = "Deployment failed on server.";

/// Errors surfaced to the user when a deployment cannot be submitted
#[derive(Debug, Error)]
pub enum DeployError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server's `error` field when present
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
    },

    /// A 2xx response whose body is not JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Custom port that is not a valid port number
    #[error("Invalid port: '{0}'")]
    InvalidPort(String),
}

impl From<reqwest::Error> for DeployError {
    fn from(e: reqwest::Error) -> Self {
        DeployError::Network(e.to_string())
    }
}
