//! Roast Gateway
//!
//! Takes a list of ingredients, asks Gemini to roast them and suggest a real
//! recipe, validates the JSON the model returns and relays it.
//!
//! # Modules
//! - `controller`: HTTP handlers for `/`, `/api/health` and `/api/generate`
//! - `entities`: request/response types and the Gemini wire format
//! - `error`: startup and gateway error types
//! - `middleware`: access logging and `{"detail": ...}` error bodies
//! - `routes`: route table
//! - `service`: the roast gateway and the Gemini client behind it
//! - `utils`: configuration and bootstrapping
//!
//! # Examples
//! ```no_run
//! use actix_web::{web, App, HttpServer};
//! use roast_gateway::{routes, service::RoastService, utils::GeminiConfig};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let service = web::Data::new(RoastService::from_config(&GeminiConfig::default()));
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(service.clone())
//!             .configure(routes::configure)
//!     })
//!     .bind("127.0.0.1:8000")?
//!     .run()
//!     .await
//! }
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod controller;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
pub use service::RoastService;
pub use utils::AppConfig;
