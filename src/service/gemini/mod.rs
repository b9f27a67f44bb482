pub mod client;

pub use client::GeminiClient;

use crate::error::GatewayError;
use async_trait::async_trait;

/// Remote model that answers a prompt with JSON text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier reported by the health check.
    fn model(&self) -> String;

    /// Makes sure the underlying client handle can be built.
    async fn ready(&self) -> Result<(), GatewayError>;

    /// Sends `prompt` and returns the raw text the model produced.
    async fn generate_json(&self, api_key: &str, prompt: &str) -> Result<String, GatewayError>;
}
