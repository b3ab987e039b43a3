pub mod client;
pub mod error;
pub mod types;

pub use client::{CompletionSender, GatewayClient};
pub use error::GatewayError;
pub use types::{ChatMessage, CompletionRequest, CompletionResponse, Usage};
