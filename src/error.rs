use thiserror::Error;

/// Errors that can occur while talking to the meal or favorites services
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure while issuing a request
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// A spawned fetch task was cancelled or panicked
    #[error("Fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Client construction error
    #[error("Builder error: {0}")]
    Builder(String),
}
