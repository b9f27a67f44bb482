use crate::controller::health::{health, root};
use crate::controller::roast::generate;
use actix_web::error::{ErrorUnprocessableEntity, JsonPayloadError};
use actix_web::{web, HttpRequest};

pub const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

pub fn api_routes() -> actix_web::Scope {
    web::scope("/api").service(health).service(generate)
}

/// Bodies that parse as JSON but do not fit the request type are a 422.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Deserialize(_) => ErrorUnprocessableEntity(err),
        _ => err.into(),
    }
}

pub fn configure_with_limit(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(web::JsonConfig::default().limit(json_limit).error_handler(json_error))
        .service(root)
        .service(api_routes());
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_with_limit(cfg, DEFAULT_JSON_LIMIT);
}
