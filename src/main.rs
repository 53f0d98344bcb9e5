use std::sync::Arc;

use actix_web::HttpServer;
use env_logger::Env;

use trip_planner_api::{
    build_app,
    config::AppConfig,
    services::{kv_store::MemoryStore, trip_store::InMemoryTripStore},
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let (host, port) = (config.host.clone(), config.port);
    log::info!(
        "Starting trip planner API ({}) on {}:{}",
        config.environment,
        host,
        port
    );

    let state = AppState::new(
        config,
        Arc::new(InMemoryTripStore::new()),
        Arc::new(MemoryStore::new()),
    );

    HttpServer::new(move || build_app(state.clone()))
        .bind((host, port))?
        .run()
        .await
}
