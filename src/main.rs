use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::time::Duration;

use roast_gateway::middleware::{error_handler, Logging};
use roast_gateway::routes;
use roast_gateway::service::RoastService;
use roast_gateway::utils::init;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = init::init()
        .await
        .context("failed to initialise application")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // one gateway for all workers
    let service = web::Data::new(RoastService::from_config(&config.gemini));

    let server = config.server.clone();
    let json_limit = server.payload_limit;
    log::info!("Starting server at http://{}:{}", server.host, server.port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(error_handler())
            .wrap(Logging)
            .wrap(Cors::permissive())
            .configure(|cfg| routes::configure_with_limit(cfg, json_limit))
    })
    .client_request_timeout(Duration::from_secs(server.client_request_timeout))
    .bind((server.host.clone(), server.port))?
    .shutdown_timeout(server.shutdown_timeout)
    .run()
    .await
}
