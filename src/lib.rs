//! Day-indexed schedule editor for trip planning, plus the thin HTTP service
//! that the planner front end talks to.
//!
//! Embedding callers that keep the list in process can drive edits through
//! [`schedule::ScheduleHistory`] for undo/redo.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod schedule;
pub mod services;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Logger,
    web, App, HttpResponse,
};
use serde_json::json;

use config::AppConfig;
use services::{
    kv_store::KeyValueStore, search_history::SearchHistory, trip_service::TripService,
    trip_store::TripStore,
};

pub use error::{ApiError, ScheduleError, TimeError, TripError};
pub use models::schedule::{EntryPatch, ScheduleEntry, ScheduleList};

/// Shared handles the handlers pull out of app data.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<AppConfig>,
    pub trips: web::Data<TripService>,
    pub search_history: web::Data<SearchHistory>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        trip_store: Arc<dyn TripStore>,
        kv_store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let search_history = SearchHistory::new(kv_store, config.search_history_limit);
        Self {
            config: web::Data::new(config),
            trips: web::Data::new(TripService::new(trip_store)),
            search_history: web::Data::new(search_history),
        }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("Rejected request body: {}", message);
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "error": message })))
            .into()
    })
}

pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .app_data(json_config())
        .app_data(state.config)
        .app_data(state.trips)
        .app_data(state.search_history)
        .configure(routes::configure)
}
