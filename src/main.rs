mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::http;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let client = http::connect(&config.user_ms)?;

    let container = Arc::new(Container::new(client, &config.user_ms, &config.cors));

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting {}",
        config.service.name
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
