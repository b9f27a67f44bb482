pub mod prompt;

use crate::entities::RoastRecipe;
use crate::error::{GatewayError, ParseError};
use crate::service::gemini::{GeminiClient, TextGenerator};
use crate::utils::config::GeminiConfig;
use rust_i18n::t;
use std::sync::Arc;

/// Turns a list of ingredients into a validated roast and recipe.
///
/// Built once at startup and shared by every worker. The API key is captured
/// at construction; when it is missing every `generate` call fails before
/// any network traffic.
pub struct RoastService {
    api_key: Option<String>,
    api_key_env: String,
    generator: Arc<dyn TextGenerator>,
}

impl RoastService {
    pub fn new(
        api_key: Option<String>,
        api_key_env: impl Into<String>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self { api_key, api_key_env: api_key_env.into(), generator }
    }

    /// Gemini-backed service with the key taken from the environment.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(
            config.api_key_from_env(),
            config.api_key_env.clone(),
            Arc::new(GeminiClient::new(config.clone())),
        )
    }

    pub fn model(&self) -> String {
        self.generator.model()
    }

    pub async fn ready(&self) -> Result<(), GatewayError> {
        self.generator.ready().await
    }

    pub async fn generate(&self, ingredients: &str) -> Result<RoastRecipe, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            log::error!("{}", t!("logs.api_key_missing", env_var = &self.api_key_env));
            GatewayError::Configuration { env_var: self.api_key_env.clone() }
        })?;

        let prompt = prompt::build_prompt(ingredients);
        let text = self.generator.generate_json(api_key, &prompt).await?;

        RoastRecipe::from_model_text(&text).map_err(|e: ParseError| {
            log::error!("{}", t!("logs.parse_failed", msg = &e, body = &text));
            GatewayError::from(e)
        })
    }
}
