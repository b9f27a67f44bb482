use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
pub const CONFIG_PATH_ENV: &str = "ROAST_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
    pub client_request_timeout: u64,
    pub payload_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
            client_request_timeout: 30,
            payload_limit: 64 * 1024,
        }
    }
}

/// Where and how to reach the Gemini `generateContent` API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 30,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Reads the API key from the configured environment variable.
    /// Blank values count as missing.
    pub fn api_key_from_env(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(config_path: P) -> anyhow::Result<Self> {
        let config_file = std::fs::File::open(config_path.as_ref())?;
        let config: Option<Self> = serde_yaml::from_reader(config_file)?;
        Ok(config.unwrap_or_default())
    }

    /// Config file named by `ROAST_CONFIG`, falling back to `config/app.yml`.
    pub fn path_from_env() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }
}
