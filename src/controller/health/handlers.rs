use crate::service::roast::RoastService;
use actix_web::{get, web, HttpResponse};
use rust_i18n::t;
use serde_json::json;

pub const SERVICE_NAME: &str = "Roast My Fridge API";

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// Reports ok once the remote client handle is usable. A missing API key is
/// not a health failure; only `/api/generate` needs it.
#[get("/health")]
pub async fn health(service: web::Data<RoastService>) -> HttpResponse {
    match service.ready().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "model": service.model()
        })),
        Err(e) => {
            log::error!("{}", t!("logs.health_failed", msg = &e));
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "error",
                "error": e.to_string()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::service::gemini::MockTextGenerator;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn app_data(generator: MockTextGenerator) -> web::Data<RoastService> {
        web::Data::new(RoastService::new(None, "GEMINI_API_KEY", Arc::new(generator)))
    }

    #[actix_web::test]
    async fn health_reports_unusable_client() {
        let mut generator = MockTextGenerator::new();
        generator.expect_ready().times(1).returning(|| {
            Err(GatewayError::Unexpected("failed to build HTTP client: no TLS backend".to_string()))
        });
        let app =
            test::init_service(App::new().app_data(app_data(generator)).service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "status": "error",
                "error": "failed to build HTTP client: no TLS backend"
            })
        );
    }

    #[actix_web::test]
    async fn health_reports_model_when_ready() {
        let mut generator = MockTextGenerator::new();
        generator.expect_ready().times(1).returning(|| Ok(()));
        generator.expect_model().return_const("gemini-2.5-flash".to_string());
        let app =
            test::init_service(App::new().app_data(app_data(generator)).service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok", "model": "gemini-2.5-flash" }));
    }
}
