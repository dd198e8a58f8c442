use thiserror::Error;

/// Failure of a single remote read against the platform API.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Parse(err.to_string())
    }
}

/// Fatal resolution failure: nothing to aggregate, the run aborts.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no channels found for query: {0}")]
    NoMatches(String),

    #[error("channel search failed: {0}")]
    Upstream(#[from] GatewayError),
}
