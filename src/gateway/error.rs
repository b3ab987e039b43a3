use thiserror::Error;

/// Failures originating at the AI gateway boundary.
///
/// These are downstream-service errors; a response that arrives intact but
/// does not match the expected artifact schema is a schema error at the
/// crate level, never a `GatewayError`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Gateway returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse gateway response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Parse(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}
