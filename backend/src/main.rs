mod api_error;
mod config;
mod cors;
mod model;
mod services;
mod store;
mod timestamp;

use crate::config::AppConfig;
use crate::store::MonkeyStore;
use actix_web::http::header::HeaderValue;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::parse();

    let allow_origin = HeaderValue::from_str(&config.cors_origins).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid CORS origin {:?}: {}", config.cors_origins, e),
        )
    })?;

    let store = MonkeyStore::open(&config.database).map_err(io::Error::other)?;
    info!("SQLite database ready at {}", config.database.display());
    let store = web::Data::new(store);

    let url = config.bind_url();
    info!("Server running at {}", url);

    let app_store = store.clone();
    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .app_data(api_error::json_config(json_limit))
            .app_data(app_store.clone())
            .wrap(api_error::failure_log())
            .wrap(cors::default_headers(allow_origin.clone()))
            .wrap(Logger::default())
            .configure(services::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    close_store(store);
    Ok(())
}

/// Closes the connection once the server has stopped and dropped its app instances.
fn close_store(store: web::Data<MonkeyStore>) {
    match Arc::try_unwrap(store.into_inner()) {
        Ok(store) => match store.close() {
            Ok(()) => info!("SQLite database closed"),
            Err(e) => error!("Failed to close SQLite database: {}", e),
        },
        Err(_) => warn!("Store still referenced at shutdown; connection closes on drop"),
    }
}
