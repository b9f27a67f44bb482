use crate::entities::GenerateRequest;
use crate::error::GatewayError;
use crate::service::roast::RoastService;
use actix_web::{post, web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

#[post("/generate")]
pub async fn generate(
    service: web::Data<RoastService>,
    req: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!("[{}] Received generate request", request_id);
    log::debug!("[{}] Ingredients: {:?}", request_id, req.ingredients);

    match service.generate(&req.ingredients).await {
        Ok(recipe) => {
            let duration = Utc::now() - start_time;
            log::info!(
                "[{}] Generated \"{}\" in {}ms",
                request_id,
                recipe.recipe_name,
                duration.num_milliseconds()
            );
            Ok(HttpResponse::Ok().json(recipe))
        }
        Err(e) => {
            let duration = Utc::now() - start_time;
            log::error!(
                "[{}] Generate request failed after {}ms: {:?}",
                request_id,
                duration.num_milliseconds(),
                e
            );
            Err(e)
        }
    }
}
