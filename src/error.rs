use thiserror::Error;

/// Outcome classification of a single upstream GET.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("resource not found (404)")]
    NotFound,

    #[error("upstream returned HTTP {0}")]
    UpstreamError(u16),

    #[error("transport failure: {0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Summoner '{0}' not found or API issue.")]
    PlayerNotFound(String),

    #[error("Request failed: {0}")]
    Client(#[from] ClientError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Demo fixture error: {0}")]
    FixtureError(String),
}
