use super::TextGenerator;
use crate::entities::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::error::{GatewayError, ParseError};
use crate::utils::config::GeminiConfig;
use async_trait::async_trait;
use rust_i18n::t;
use std::time::Duration;
use tokio::sync::OnceCell;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// REST client for Gemini `generateContent`.
///
/// The HTTP client is built on first use and reused afterwards; it is safe to
/// share between workers.
pub struct GeminiClient {
    config: GeminiConfig,
    http: OnceCell<reqwest::Client>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config, http: OnceCell::new() }
    }

    async fn http(&self) -> Result<&reqwest::Client, GatewayError> {
        self.http
            .get_or_try_init(move || async move {
                log::debug!("Building Gemini HTTP client, timeout {}s", self.config.timeout_secs);
                reqwest::Client::builder()
                    .timeout(Duration::from_secs(self.config.timeout_secs))
                    .build()
                    .map_err(|e| {
                        GatewayError::Unexpected(format!("failed to build HTTP client: {}", e))
                    })
            })
            .await
    }

    fn transport_error(&self, err: reqwest::Error) -> GatewayError {
        let message = if err.is_timeout() {
            format!("request timed out after {}s", self.config.timeout_secs)
        } else {
            format!("request failed: {}", err)
        };
        log::error!("{}", t!("logs.remote_unreachable", msg = &message));
        GatewayError::RemoteService { status: None, message }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> String {
        self.config.model.clone()
    }

    async fn ready(&self) -> Result<(), GatewayError> {
        self.http().await.map(|_| ())
    }

    async fn generate_json(&self, api_key: &str, prompt: &str) -> Result<String, GatewayError> {
        let http = self.http().await?;
        let request = GenerateContentRequest::json_prompt(prompt.to_string());

        let response = http
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            log::error!("{}", t!("logs.remote_error", status = status, body = &body));
            return Err(GatewayError::RemoteService {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            log::error!("{}", t!("logs.envelope_invalid", msg = &e, body = &body));
            GatewayError::Unexpected(format!("invalid response envelope: {}", e))
        })?;

        match envelope.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                log::error!("{}", t!("logs.parse_failed", msg = ParseError::MissingText, body = &body));
                Err(ParseError::MissingText.into())
            }
        }
    }
}
