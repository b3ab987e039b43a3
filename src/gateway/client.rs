use std::time::Duration;

use reqwest::Client;

use super::error::GatewayError;
use super::types::{CompletionRequest, CompletionResponse};

const GATEWAY_URL: &str = "https://gateway.nexia.app/v1/completions";

/// Anything that can send a completion request — the real client or a test
/// mock.
pub trait CompletionSender {
    async fn send_completion(
        &self,
        req: &CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError>;
}

/// HTTP client for the hosted AI gateway.
pub struct GatewayClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GATEWAY_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            client,
            base_url,
        }
    }
}

impl CompletionSender for GatewayClient {
    async fn send_completion(
        &self,
        req: &CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(req)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(1000);
            return Err(GatewayError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<CompletionResponse>().await?;
        Ok(body)
    }
}
