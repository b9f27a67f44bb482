use crate::middleware::error_handler::ErrorResponse;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Errors raised while bootstrapping the service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Why the model's text could not be turned into a recipe.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response envelope carried no candidate text")]
    MissingText,
    #[error("candidate text is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("candidate JSON does not match the recipe schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

/// Failures of a single generate call.
///
/// All of them surface to the caller as a 500 with a `{"detail": ...}` body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{env_var} not found")]
    Configuration { env_var: String },
    #[error("{}", remote_detail(.status, .message))]
    RemoteService { status: Option<u16>, message: String },
    #[error("Failed to parse AI response")]
    ResponseParse(#[from] ParseError),
    #[error("{0}")]
    Unexpected(String),
}

fn remote_detail(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("Gemini API Error ({}): {}", status, message),
        None => format!("Gemini API Error: {}", message),
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse { detail: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_detail_includes_status_when_known() {
        let err = GatewayError::RemoteService {
            status: Some(429),
            message: "quota exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API Error (429): quota exhausted");

        let err = GatewayError::RemoteService { status: None, message: "timed out".to_string() };
        assert_eq!(err.to_string(), "Gemini API Error: timed out");
    }

    #[test]
    fn parse_failures_hide_the_payload() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = GatewayError::from(ParseError::InvalidJson(source));
        assert_eq!(err.to_string(), "Failed to parse AI response");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
