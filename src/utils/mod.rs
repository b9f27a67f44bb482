pub mod config;
pub mod init;

pub use config::{AppConfig, GeminiConfig, ServerConfig};
pub use init::init;
