use crate::error::GatewayError;
use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error as ActixError, HttpRequest, HttpResponse,
};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin};

/// Failure body shared by every endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

fn detail_response(req: HttpRequest, status: StatusCode, detail: String) -> ServiceResponse<BoxBody> {
    ServiceResponse::new(req, HttpResponse::build(status).json(ErrorResponse { detail }))
}

/// Rewrites framework errors (bad JSON, oversized bodies, ...) into the
/// `{"detail": ...}` shape. Responses produced by [`GatewayError`] already
/// have that shape and pass through untouched.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // The router needs sole ownership of the HttpRequest, so only
        // method and uri are kept across the inner call.
        let method = req.method().clone();
        let uri = req.uri().clone();

        log::debug!("Handling request: method={}, uri={}", method, uri);

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let foreign_error = res
                        .response()
                        .error()
                        .filter(|err| err.as_error::<GatewayError>().is_none())
                        .map(|err| err.to_string());

                    match foreign_error {
                        Some(detail) => {
                            let status = res.status();
                            log::warn!(
                                "{}",
                                t!(
                                    "logs.request_rejected",
                                    method = &method,
                                    uri = &uri,
                                    status = status,
                                    msg = &detail
                                )
                            );
                            let (req, _) = res.into_parts();
                            Ok(detail_response(req, status, detail))
                        }
                        None => Ok(res.map_into_boxed_body()),
                    }
                }
                Err(err) => {
                    log::error!("Request failed: {} {}", method, uri);
                    log::debug!("Error details: {:?}", err);
                    Err(err)
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use serde_json::json;

    async fn ok_route() -> HttpResponse {
        HttpResponse::Ok().json(json!({ "status": "ok" }))
    }

    async fn gateway_route() -> Result<HttpResponse, GatewayError> {
        Err(GatewayError::Unexpected("boom".to_string()))
    }

    async fn json_route(body: web::Json<ErrorResponse>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }

    #[actix_web::test]
    async fn matched_routes_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(error_handler())
                .route("/items/{id}", web::get().to(ok_route))
                .route("/fail", web::get().to(gateway_route)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok" }));

        let req = test::TestRequest::get().uri("/fail").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body, ErrorResponse { detail: "boom".to_string() });
    }

    #[actix_web::test]
    async fn extractor_errors_get_detail_body() {
        let app = test::init_service(
            App::new().wrap(error_handler()).route("/echo", web::post().to(json_route)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
    }
}
