use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Error)]
pub enum NexiaError {
    #[error("Config error: {0}")]
    Config(String),

    /// Input rejected by the quality validator before any gateway call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The gateway answered, but the body does not match the expected
    /// artifact schema. Kept distinct from [`NexiaError::Gateway`] so
    /// callers can tell a bad response apart from a failed request.
    #[error("Response did not match the expected schema: {0}")]
    Schema(String),

    #[error("AI gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_and_gateway_errors_are_distinct() {
        let schema = NexiaError::Schema("missing sections".into());
        let gateway = NexiaError::from(GatewayError::Timeout);

        assert!(matches!(schema, NexiaError::Schema(_)));
        assert!(matches!(gateway, NexiaError::Gateway(GatewayError::Timeout)));
    }

    #[test]
    fn invalid_input_message() {
        let e = NexiaError::InvalidInput("Descrição is required.".into());
        assert_eq!(e.to_string(), "Invalid input: Descrição is required.");
    }
}
