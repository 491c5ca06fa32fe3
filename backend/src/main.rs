mod classify;
mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use classify::openai_service::OpenAiService;
use classify::service::ClassifierService;
use config::RelayConfig;
use routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = RelayConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let classifier = ClassifierService::new(
        config.api_key.clone(),
        config.model.clone(),
        Arc::new(OpenAiService::new(config.endpoint.clone())),
    );

    if classifier.is_configured() {
        log::info!("Upstream credential configured");
    } else {
        log::warn!("OPENAI_API_KEY is not set; /api/classify will answer 500 until it is");
    }
    log::info!("Upstream model {} at {}", config.model, config.endpoint);
    log::info!("Serving client bundle from {}", config.frontend_dir);

    let bind_address = config.bind_address();
    let frontend_dir = config.frontend_dir.clone();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(classifier.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
